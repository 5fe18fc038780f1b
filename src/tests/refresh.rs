use std::fs;

use pretty_assertions::assert_eq;

use super::{
    helpers::{RepoTestContext, commit, run},
    load, with_status_context,
};
use crate::git::{files::LoadFilesOptions, refresh_files, status::FileState};

fn names(files: &[FileState]) -> Vec<&str> {
    files.iter().map(|file| file.name.as_str()).collect()
}

fn refresh(
    ctx: &RepoTestContext,
    displayed: &[FileState],
    selected: Option<&FileState>,
) -> Vec<FileState> {
    with_status_context(ctx, |status_ctx| {
        refresh_files(status_ctx, LoadFilesOptions::default(), displayed, selected)
    })
}

#[test]
fn unchanged_work_tree_keeps_order() {
    let ctx = RepoTestContext::setup_init();
    commit(ctx.path(), "a", "a\n");
    commit(ctx.path(), "b", "b\n");
    fs::write(ctx.dir.child("a"), "changed\n").unwrap();
    fs::write(ctx.dir.child("b"), "changed\n").unwrap();
    run(ctx.path(), &["git", "add", "b"]);

    let displayed = load(&ctx, false);
    let refreshed = refresh(&ctx, &displayed, displayed.first());

    assert_eq!(names(&displayed), vec!["b", "a"]);
    assert_eq!(refreshed, displayed);
}

#[test]
fn staging_moves_file_to_staged_group() {
    let ctx = RepoTestContext::setup_init();
    commit(ctx.path(), "a", "a\n");
    commit(ctx.path(), "b", "b\n");
    fs::write(ctx.dir.child("a"), "changed\n").unwrap();
    fs::write(ctx.dir.child("b"), "changed\n").unwrap();

    let displayed = load(&ctx, false);
    run(ctx.path(), &["git", "add", "b"]);
    let refreshed = refresh(&ctx, &displayed, displayed.get(1));

    assert_eq!(names(&displayed), vec!["a", "b"]);
    assert_eq!(names(&refreshed), vec!["b", "a"]);
    assert!(refreshed[0].has_staged_changes);
}

#[test]
fn staging_a_move_becomes_a_rename() {
    let ctx = RepoTestContext::setup_init();
    commit(ctx.path(), "old", "some content that is long enough\n");
    fs::rename(ctx.dir.child("old"), ctx.dir.child("new")).unwrap();

    let displayed = load(&ctx, false);
    assert_eq!(names(&displayed), vec!["new", "old"]);

    run(ctx.path(), &["git", "add", "--all"]);
    let refreshed = refresh(&ctx, &displayed, displayed.first());

    assert_eq!(names(&refreshed), vec!["old -> new"]);
    assert!(refreshed[0].is_rename());
}

#[test]
fn first_refresh_shows_everything() {
    let ctx = RepoTestContext::setup_init();
    fs::write(ctx.dir.child("new-file"), "hello").unwrap();

    let refreshed = refresh(&ctx, &[], None);

    assert_eq!(names(&refreshed), vec!["new-file"]);
}
