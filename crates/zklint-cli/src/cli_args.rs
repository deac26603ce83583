use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "zklint", version, about = "Circuit-safety linter for o1js smart contracts")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as structured JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Include progress detail on stderr
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Lint TypeScript sources for circuit-safety violations
    Check {
        /// Files or directories to lint (default: current directory)
        paths: Vec<String>,
        /// Treat warnings as errors for the exit code
        #[arg(long)]
        strict: bool,
    },

    /// List every rule with its code and default severity
    Rules,

    /// Write a starter zklint.json in the current directory
    Init {
        /// Overwrite an existing zklint.json
        #[arg(long)]
        force: bool,
    },
}
