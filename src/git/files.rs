use itertools::Itertools;

use super::{
    config::ConfigReader,
    file_kind::FileKindClassifier,
    parse::status::parse_status_line,
    status::FileState,
};
use crate::{
    config::StatusConfig,
    process::{CommandRunner, GIT},
    util::str_vec,
};

const SHOW_UNTRACKED_FILES: &str = "status.showUntrackedFiles";

/// Collaborators needed to turn `git status` output into [`FileState`]s.
pub struct StatusContext<'a> {
    pub runner: &'a dyn CommandRunner,
    pub git_config: &'a dyn ConfigReader,
    pub classifier: &'a dyn FileKindClassifier,
    pub config: &'a StatusConfig,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LoadFilesOptions {
    /// Report moved files as separate add/delete entries.
    pub no_renames: bool,
}

/// Lists the work tree's files, staged ones first, each group sorted by name.
///
/// A failing `git status` is logged and yields whatever could be read, usually nothing.
pub fn load_files(ctx: &StatusContext, opts: LoadFilesOptions) -> Vec<FileState> {
    let untracked_files = match ctx.git_config.get_value(SHOW_UNTRACKED_FILES) {
        value if value.is_empty() => ctx.config.default_untracked_files.clone(),
        value => value,
    };

    let args = status_args(&untracked_files, opts.no_renames);
    let output = ctx
        .runner
        .run(GIT, &str_vec(&args))
        .inspect_err(|e| log::error!("{}", e))
        .unwrap_or_default();

    let files = output
        .lines()
        .filter(|line| !line.is_empty())
        .filter(|line| {
            if line.starts_with("warning") {
                log::warn!("warning when calling git status: {}", line);
                return false;
            }
            true
        })
        .filter_map(|line| {
            let file = parse_status_line(line, ctx.classifier);
            if file.is_none() {
                log::warn!("Skipping malformed status line: {:?}", line);
            }
            file
        })
        .collect();

    sort_by_staged(files)
}

pub fn status_args(untracked_files: &str, no_renames: bool) -> Vec<String> {
    let mut args = vec![
        "status".to_string(),
        format!("--untracked-files={untracked_files}"),
        "--porcelain".to_string(),
    ];

    if no_renames {
        args.push("--no-renames".to_string());
    }

    args
}

/// Staged files first, then the rest. Both groups sorted by name, ties keep their order.
pub fn sort_by_staged(files: Vec<FileState>) -> Vec<FileState> {
    let (staged, unstaged): (Vec<_>, Vec<_>) =
        files.into_iter().partition(|file| file.has_staged_changes);

    staged
        .into_iter()
        .sorted_by(|a, b| a.name.cmp(&b.name))
        .chain(unstaged.into_iter().sorted_by(|a, b| a.name.cmp(&b.name)))
        .collect()
}
