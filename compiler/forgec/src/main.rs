//! Forge CLI

use clap::Parser;
use forgec::cli::Cli;

fn main() {
    forgec::init_tracing();
    let cli = Cli::parse();
    std::process::exit(cli.run());
}
