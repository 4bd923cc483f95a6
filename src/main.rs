//! openbook CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, resolve the
//! effective configuration, and run the roster batch. For programmatic use,
//! prefer the library API (`openbook::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
