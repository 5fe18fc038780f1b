//! End-to-end tests against throwaway repositories. Each test shapes a work tree
//! with the real `git` binary, runs gitstate against it and asserts the result.
//!
//! To inspect a repository after a test, print `ctx.dir.path()` and call
//! `ctx.dir.leak()` so it isn't removed.

mod helpers;
mod refresh;

use crate::{
    cli::{Args, Commands},
    config::Config,
    git::{
        config::GitConfig,
        file_kind::WorkTree,
        files::{LoadFilesOptions, StatusContext, load_files},
        status::FileState,
    },
    process::ProcessRunner,
};
use helpers::RepoTestContext;

fn status_args(no_renames: bool) -> Args {
    Args {
        command: Some(Commands::Status { no_renames }),
        ..Default::default()
    }
}

fn merge_base_args(reference: &str) -> Args {
    Args {
        command: Some(Commands::MergeBase {
            reference: reference.to_string(),
        }),
        ..Default::default()
    }
}

fn run(ctx: &RepoTestContext, args: &Args) -> String {
    crate::run_in(ctx.path(), args, &Config::default()).unwrap()
}

fn load(ctx: &RepoTestContext, no_renames: bool) -> Vec<FileState> {
    with_status_context(ctx, |status_ctx| {
        load_files(status_ctx, LoadFilesOptions { no_renames })
    })
}

fn with_status_context<T>(ctx: &RepoTestContext, f: impl FnOnce(&StatusContext) -> T) -> T {
    let config = Config::default();
    let runner = ProcessRunner::new(ctx.path().to_path_buf());
    let git_config = GitConfig::open(ctx.path()).unwrap();
    let work_tree = WorkTree::new(ctx.path().to_path_buf());

    f(&StatusContext {
        runner: &runner,
        git_config: &git_config,
        classifier: &work_tree,
        config: &config.status,
    })
}
