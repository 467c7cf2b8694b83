use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "adr", bin_name = "adr", version)]
#[command(about = "Create and maintain Architecture Decision Records", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Record directory (overrides adr.json and ADR_DIR)
    #[arg(short, long, global = true)]
    pub dir: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a record, or update the status (and title) of an existing one
    #[command(alias = "r")]
    Record {
        /// Record number (e.g. 001). Omit to use the next free number
        #[arg(short, long)]
        number: Option<String>,

        /// Decision status (e.g. Proposed, Accepted, Superseded)
        #[arg(short, long)]
        status: Option<String>,

        /// Record title, required for new records. A different title renames
        #[arg(short, long)]
        title: Option<String>,

        /// Prompt for anything not given on the command line
        #[arg(short, long)]
        interactive: bool,
    },

    /// List records with their current status
    #[command(alias = "ls")]
    List,

    /// Print the next free record number
    Next,

    /// Regenerate the README.md index
    Reindex,

    /// Create the record directory with a template and an index
    Init,
}
