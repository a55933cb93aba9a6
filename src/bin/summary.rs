use anyhow::Result;
use clap::Parser;
use comparar::{cli::SummaryArgs, loader, stats, summary};

fn main() -> Result<()> {
    let args = SummaryArgs::parse();
    comparar::init_tracing();

    let samples = loader::load_samples(&args.input)?;
    let groups = stats::group_by_method(&samples);
    print!("{}", summary::render_table(&groups));

    Ok(())
}
