//! tidywatch - CLI entry point

use clap::Parser;
use tidywatch::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tidywatch::logging::init(cli.verbose);

    match cli.command {
        Commands::Watch(args) => tidywatch::cli::watch::run(args).await?,
        Commands::Organize(args) => tidywatch::cli::organize::run(args).await?,
        Commands::Report(args) => tidywatch::cli::report::run(args).await?,
    }

    Ok(())
}
