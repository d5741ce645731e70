use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tour-seed-sql")]
#[command(version, about = "Generate SQL seed statements from a tours fixture")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a tours JSON file into INSERT statements
    Convert {
        /// Tours JSON file
        #[arg(default_value = "tours.json")]
        input: PathBuf,

        /// Output SQL file ("-" for stdout)
        #[arg(default_value = "output.sql")]
        output: PathBuf,
    },

    /// Show entity and statement counts without writing anything
    Stats {
        /// Tours JSON file
        #[arg(default_value = "tours.json")]
        input: PathBuf,
    },

    /// Print CREATE TABLE statements for the target schema
    Schema,

    /// List all target tables and their columns
    ListTables,
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
