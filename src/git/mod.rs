pub mod config;
pub mod file_kind;
pub mod files;
pub mod merge_base;
pub(crate) mod parse;
pub mod reconcile;
pub mod status;

use files::{LoadFilesOptions, StatusContext};
use status::FileState;

/// Reloads the file list and reconciles it with what's currently displayed.
pub fn refresh_files(
    ctx: &StatusContext,
    opts: LoadFilesOptions,
    displayed: &[FileState],
    selected: Option<&FileState>,
) -> Vec<FileState> {
    reconcile::merge_files(displayed, files::load_files(ctx, opts), selected)
}
