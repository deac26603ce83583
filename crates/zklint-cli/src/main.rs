//! zklint CLI — circuit-safety linting for o1js smart contracts.
//!
//! This binary provides the `zklint` command with subcommands for checking
//! sources, listing rules, and writing a starter config. See `zklint --help`
//! for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn zklint_output::OutputFormatter> = if cli.json {
        Box::new(zklint_output::json::JsonFormatter)
    } else {
        Box::new(zklint_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Check { paths, strict } => {
            commands::check::run(&*formatter, cli.verbose, paths, strict)
        }
        Commands::Rules => commands::rules::run(&*formatter),
        Commands::Init { force } => commands::init::run(cli.verbose, force),
    };

    std::process::exit(exit_code);
}
