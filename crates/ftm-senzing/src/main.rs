use anyhow::Result;
use clap::Parser;

use ftm_senzing::cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    ftm_senzing::cli::convert::run(&cli)
}
