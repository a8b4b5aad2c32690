//! CLI entry point for splitting and blending images

use clap::Parser;
use scatterblend::io::cli::{Cli, CommandRunner};

fn main() -> scatterblend::Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    let mut runner = CommandRunner::new(cli);
    runner.run().map(|_written| ())
}
