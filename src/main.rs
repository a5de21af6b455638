mod cli;
mod application;
mod domain;
mod data;
mod render;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // Logs go to stderr so rendered output on stdout stays byte-exact
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("sql_cheatsheet=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
