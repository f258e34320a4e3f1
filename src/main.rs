use anyhow::Result;
use flatdocs::cli::{init_logging, parse_args};
use flatdocs::run_flatten;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = parse_args()?;
    init_logging(config.verbosity);

    let summary = run_flatten(&config).await?;
    println!("{summary}");
    Ok(())
}
