use super::{files::sort_by_staged, status::FileState};

/// Reconciles a fresh file list with the one currently on screen.
///
/// Every old file claims the first unclaimed new file matching it. Only claimed files
/// are kept, then the staged/name ordering of [`sort_by_staged`] is imposed again.
/// An empty `old` list means there's nothing to honor yet, so `new` is returned as is.
pub fn merge_files(
    old: &[FileState],
    new: Vec<FileState>,
    selected: Option<&FileState>,
) -> Vec<FileState> {
    if old.is_empty() {
        return new;
    }

    let retained = retain_positions(old, new, |old_file, new_file| {
        old_file.matches(new_file) && !wait_for_matching_file(selected, old_file, new_file)
    });

    sort_by_staged(retained)
}

/// Walks `old` in order, pairing each entry with the first unclaimed `new` entry
/// accepted by `pairs`. Returns the claimed entries in the order they were claimed.
fn retain_positions<F>(old: &[FileState], new: Vec<FileState>, pairs: F) -> Vec<FileState>
where
    F: Fn(&FileState, &FileState) -> bool,
{
    let mut claimed = vec![false; new.len()];
    let mut order = Vec::with_capacity(old.len().min(new.len()));

    for old_file in old {
        if let Some(index) = (0..new.len()).find(|&i| !claimed[i] && pairs(old_file, &new[i])) {
            claimed[index] = true;
            order.push(index);
        }
    }

    let mut slots = new.into_iter().map(Some).collect::<Vec<_>>();
    order
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}

/// Staging `b` may turn it into `a -> b`. While the cursor sits on `b`, the rename is
/// only claimed once the walk reaches an old entry matching `b`, so the cursor stays put.
///
/// The rename check looks at the old entry, not the selection. A selected rename that
/// shares a path with the new rename still makes a plain old entry wait, as long as
/// that old entry doesn't match the selection itself.
fn wait_for_matching_file(
    selected: Option<&FileState>,
    old_file: &FileState,
    new_file: &FileState,
) -> bool {
    let Some(selected) = selected else {
        return false;
    };

    new_file.is_rename()
        && !old_file.is_rename()
        && new_file.matches(selected)
        && !old_file.matches(selected)
}
