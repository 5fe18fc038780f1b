pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod process;
#[cfg(test)]
mod tests;
mod util;

use cli::Commands;
use config::Config;
use error::Error;
use git::{
    config::GitConfig,
    file_kind::WorkTree,
    files::{LoadFilesOptions, StatusContext},
    status::FileState,
};
use process::ProcessRunner;
use std::path::Path;

pub const APP_NAME: &str = "gitstate";
pub const LOG_FILE_NAME: &str = "gitstate.log";

pub type Res<T> = Result<T, Error>;

pub fn run(args: &cli::Args, config: &Config) -> Res<String> {
    let runner = ProcessRunner::discover()?;
    run_in(runner.dir(), args, config)
}

/// Runs the requested command against the work tree at `dir`, returning what to print.
pub fn run_in(dir: &Path, args: &cli::Args, config: &Config) -> Res<String> {
    let runner = ProcessRunner::new(dir.to_path_buf());

    match args.command {
        Some(Commands::MergeBase { ref reference }) => {
            let commit = git::merge_base::merge_base(&runner, &config.merge_base, reference)?;
            Ok(format!("{commit}\n"))
        }
        Some(Commands::Status { no_renames }) => status(dir, &runner, config, no_renames),
        None => status(dir, &runner, config, false),
    }
}

fn status(dir: &Path, runner: &ProcessRunner, config: &Config, no_renames: bool) -> Res<String> {
    let git_config = GitConfig::open(dir)?;
    let work_tree = WorkTree::new(dir.to_path_buf());

    let ctx = StatusContext {
        runner,
        git_config: &git_config,
        classifier: &work_tree,
        config: &config.status,
    };

    let files = git::files::load_files(&ctx, LoadFilesOptions { no_renames });
    Ok(format_files(&files))
}

pub fn format_files(files: &[FileState]) -> String {
    files
        .iter()
        .map(|file| format!("{}\n", file.display_line))
        .collect()
}
