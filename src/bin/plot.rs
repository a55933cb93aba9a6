use anyhow::{Context, Result};
use clap::Parser;
use comparar::{chart, cli::PlotArgs, loader, stats};
use std::path::Path;

fn main() -> Result<()> {
    let args = PlotArgs::parse();
    comparar::init_tracing();

    let samples = loader::load_sized_samples(&args.input)?;
    let groups = stats::group_by_method_and_n(&samples);
    let svg = chart::render_svg(&groups)?;

    match args.output {
        Some(path) => write_svg(&path, &svg),
        None => display(&svg),
    }
}

fn write_svg(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "chart written");
    Ok(())
}

/// Render into the system temp directory and hand off to the platform viewer
fn display(svg: &str) -> Result<()> {
    let path = std::env::temp_dir().join("comparar-dining.svg");
    write_svg(&path, svg)?;
    opener::open(&path).with_context(|| format!("failed to open {} in a viewer", path.display()))?;
    Ok(())
}
