use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Default, Debug, Parser)]
#[command(name = crate::APP_NAME)]
#[command(flatten_help = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Enable logging to 'gitstate.log'
    #[clap(long, action)]
    pub log: bool,
    /// Read settings from this file instead of the user config directory
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the work tree's files, staged ones first
    Status {
        /// Show moved files as a deletion and an addition
        #[clap(long, action)]
        no_renames: bool,
    },
    /// Print the commit the history of a reference is compared against
    MergeBase {
        #[clap(default_value = "HEAD")]
        reference: String,
    },
}
