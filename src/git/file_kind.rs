use std::{fs, path::PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileKind {
    File,
    Directory,
    Submodule,
    Symlink,
    #[default]
    Unknown,
}

pub trait FileKindClassifier {
    fn classify(&self, path: &str) -> FileKind;
}

impl<F> FileKindClassifier for F
where
    F: Fn(&str) -> FileKind,
{
    fn classify(&self, path: &str) -> FileKind {
        self(path)
    }
}

/// Classifies paths relative to a work tree without following symlinks.
pub struct WorkTree {
    dir: PathBuf,
}

impl WorkTree {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl FileKindClassifier for WorkTree {
    fn classify(&self, path: &str) -> FileKind {
        let full_path = self.dir.join(path);

        match fs::symlink_metadata(&full_path) {
            Ok(meta) if meta.file_type().is_symlink() => FileKind::Symlink,
            Ok(meta) if meta.is_dir() => {
                if full_path.join(".git").exists() {
                    FileKind::Submodule
                } else {
                    FileKind::Directory
                }
            }
            Ok(meta) if meta.is_file() => FileKind::File,
            Ok(_) => FileKind::Unknown,
            Err(e) => {
                log::debug!("Couldn't classify {:?}: {}", full_path, e);
                FileKind::Unknown
            }
        }
    }
}
