use super::file_kind::FileKind;

pub(crate) const RENAME_SEPARATOR: &str = " -> ";

/// Codes git reports for files that are new to version control.
const UNTRACKED_CODES: [[char; 2]; 3] = [['?', '?'], ['A', ' '], ['A', 'M']];

/// Index characters that don't count as a staged change.
const NO_STAGED_CHANGES: [char; 3] = [' ', 'U', '?'];

const MERGE_CONFLICT_CODES: [[char; 2]; 7] = [
    ['D', 'D'],
    ['A', 'A'],
    ['U', 'U'],
    ['A', 'U'],
    ['U', 'A'],
    ['U', 'D'],
    ['D', 'U'],
];

/// Conflicts that can be resolved by editing the conflict markers in place.
const INLINE_MERGE_CONFLICT_CODES: [[char; 2]; 2] = [['U', 'U'], ['A', 'A']];

/// Flags decoded from a porcelain `XY` code, X being the index and Y the work tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags {
    pub tracked: bool,
    pub has_staged_changes: bool,
    pub has_unstaged_changes: bool,
    pub deleted: bool,
    pub has_merge_conflict: bool,
    pub has_inline_merge_conflict: bool,
}

impl StatusFlags {
    pub fn decode(code: [char; 2]) -> Self {
        let [staged, unstaged] = code;

        Self {
            tracked: !UNTRACKED_CODES.contains(&code),
            has_staged_changes: !NO_STAGED_CHANGES.contains(&staged),
            has_unstaged_changes: unstaged != ' ',
            deleted: staged == 'D' || unstaged == 'D',
            has_merge_conflict: MERGE_CONFLICT_CODES.contains(&code),
            has_inline_merge_conflict: INLINE_MERGE_CONFLICT_CODES.contains(&code),
        }
    }
}

/// Whether the code carries an `old -> new` path pair.
pub(crate) fn is_rename_code(code: [char; 2]) -> bool {
    code.iter().any(|c| matches!(c, 'R' | 'C'))
}

/// One path of the working tree as reported by `git status --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileState {
    /// Identity of the entry. For renames this is `"<previous> -> <current>"`.
    pub name: String,
    pub path: String,
    pub previous_path: Option<String>,
    /// The raw status line, kept for redisplay.
    pub display_line: String,
    pub short_status: [char; 2],
    pub has_staged_changes: bool,
    pub has_unstaged_changes: bool,
    pub tracked: bool,
    pub deleted: bool,
    pub has_merge_conflict: bool,
    pub has_inline_merge_conflict: bool,
    pub kind: FileKind,
}

impl FileState {
    pub(crate) fn new(
        display_line: &str,
        short_status: [char; 2],
        path: String,
        previous_path: Option<String>,
        kind: FileKind,
    ) -> Self {
        let StatusFlags {
            tracked,
            has_staged_changes,
            has_unstaged_changes,
            deleted,
            has_merge_conflict,
            has_inline_merge_conflict,
        } = StatusFlags::decode(short_status);

        let name = match &previous_path {
            Some(previous) => format!("{previous}{RENAME_SEPARATOR}{path}"),
            None => path.clone(),
        };

        Self {
            name,
            path,
            previous_path,
            display_line: display_line.to_string(),
            short_status,
            has_staged_changes,
            has_unstaged_changes,
            tracked,
            deleted,
            has_merge_conflict,
            has_inline_merge_conflict,
            kind,
        }
    }

    pub fn is_rename(&self) -> bool {
        self.previous_path.is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.previous_path
            .iter()
            .map(String::as_str)
            .chain([self.path.as_str()])
    }

    /// Two entries match when they share any path, so `a -> b` matches both `a` and `b`.
    pub fn matches(&self, other: &FileState) -> bool {
        self.names()
            .any(|name| other.names().any(|other_name| other_name == name))
    }

    pub fn short_status(&self) -> String {
        self.short_status.iter().collect()
    }
}
