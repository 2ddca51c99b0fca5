use anyhow::Result;
use clap::Parser;
use thermoprop::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    thermoprop::run(cli)
}
