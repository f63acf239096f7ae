use anyhow::Result;
use clap::Parser;

use articlegen::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    articlegen::logging::init(cli.verbose);
    cli.run().await
}
