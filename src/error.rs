use std::{fmt::Display, io, string};

#[derive(Debug)]
pub enum Error {
    FindGitDir(io::Error),
    GitDirUtf8(string::FromUtf8Error),
    OpenRepo(git2::Error),
    ReadGitConfig(git2::Error),
    Config(Box<figment::Error>),
    OpenLogFile(io::Error),
    SpawnCmd(io::Error),
    CmdBadExit(String, Option<i32>),
    CurrentBranchName(Box<Error>),
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::FindGitDir(e) => f.write_fmt(format_args!("Couldn't find git directory: {}", e)),
            Error::GitDirUtf8(_e) => f.write_str("Git directory not valid UTF-8"),
            Error::OpenRepo(e) => match e.code() {
                git2::ErrorCode::NotFound => f.write_str("No .git found in the current directory"),
                _ => f.write_fmt(format_args!("Couldn't open repo: {e:?}")),
            },
            Error::ReadGitConfig(e) => f.write_fmt(format_args!("Couldn't read git config: {}", e)),
            Error::Config(e) => f.write_fmt(format_args!("Configuration error: {}", e)),
            Error::OpenLogFile(e) => f.write_fmt(format_args!("Couldn't open log file: {}", e)),
            Error::SpawnCmd(e) => f.write_fmt(format_args!("Failed to spawn command: {}", e)),
            Error::CmdBadExit(args, code) => f.write_fmt(format_args!(
                "'{}' exited with code: {}",
                args,
                code.map(|c| c.to_string())
                    .unwrap_or_else(|| "".to_string())
            )),
            Error::CurrentBranchName(e) => {
                f.write_fmt(format_args!("Couldn't get current branch name: {}", e))
            }
        }
    }
}
