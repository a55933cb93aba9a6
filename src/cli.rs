//! CLI argument parsing for the comparar tools

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "comparar-summary")]
#[command(version)]
#[command(about = "Print grouped descriptive statistics for benchmark timings", long_about = None)]
pub struct SummaryArgs {
    /// Path to a headerless CSV file with `method,time` rows
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
#[command(name = "comparar-plot")]
#[command(version)]
#[command(about = "Render a comparison chart for dining-philosophers benchmark timings", long_about = None)]
pub struct PlotArgs {
    /// Path to a headerless CSV file with `method,n,time` rows
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the chart to this SVG file instead of opening the system viewer
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_parses_input_path() {
        let args = SummaryArgs::parse_from(["comparar-summary", "results.csv"]);
        assert_eq!(args.input, PathBuf::from("results.csv"));
    }

    #[test]
    fn test_summary_rejects_missing_input() {
        let parsed = SummaryArgs::try_parse_from(["comparar-summary"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_summary_rejects_extra_positionals() {
        let parsed = SummaryArgs::try_parse_from(["comparar-summary", "a.csv", "b.csv"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_plot_parses_input_path() {
        let args = PlotArgs::parse_from(["comparar-plot", "dining.csv"]);
        assert_eq!(args.input, PathBuf::from("dining.csv"));
        assert!(args.output.is_none());
    }

    #[test]
    fn test_plot_parses_output_flag() {
        let args = PlotArgs::parse_from(["comparar-plot", "dining.csv", "-o", "chart.svg"]);
        assert_eq!(args.output, Some(PathBuf::from("chart.svg")));
    }

    #[test]
    fn test_plot_parses_long_output_flag() {
        let args = PlotArgs::parse_from(["comparar-plot", "dining.csv", "--output", "chart.svg"]);
        assert_eq!(args.output, Some(PathBuf::from("chart.svg")));
    }
}
