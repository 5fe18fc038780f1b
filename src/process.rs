use crate::{Res, error::Error};
use itertools::Itertools;
use std::{
    borrow::Cow,
    iter,
    path::{Path, PathBuf},
    process::Command,
};

pub const GIT: &str = "git";

/// Executes an external program and hands back what it printed on stdout.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Res<String>;
}

impl<F> CommandRunner for F
where
    F: Fn(&str, &[&str]) -> Res<String>,
{
    fn run(&self, program: &str, args: &[&str]) -> Res<String> {
        self(program, args)
    }
}

/// Runs commands as child processes inside a git work tree.
pub struct ProcessRunner {
    dir: PathBuf,
}

impl ProcessRunner {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Finds the work tree enclosing the current directory.
    pub fn discover() -> Res<Self> {
        log::debug!("Finding git dir");
        let out = Command::new(GIT)
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .map_err(Error::FindGitDir)?;

        if !out.status.success() {
            return Err(Error::CmdBadExit(
                "git rev-parse --show-toplevel".to_string(),
                out.status.code(),
            ));
        }

        let dir = String::from_utf8(out.stdout).map_err(Error::GitDirUtf8)?;
        Ok(Self::new(PathBuf::from(dir.trim_end())))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl CommandRunner for ProcessRunner {
    fn run(&self, program: &str, args: &[&str]) -> Res<String> {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(&self.dir);

        let display = command_args(&cmd);
        log::debug!("Running: {}", display);

        let out = cmd.output().map_err(Error::SpawnCmd)?;
        if !out.status.success() {
            log::debug!(
                "'{}' failed: {}",
                display,
                String::from_utf8_lossy(&out.stderr).trim_end()
            );
            return Err(Error::CmdBadExit(display.into_owned(), out.status.code()));
        }

        // Paths printed with `core.quotePath=false` may hold arbitrary bytes.
        match String::from_utf8(out.stdout) {
            Ok(stdout) => Ok(stdout),
            Err(e) => {
                log::warn!("'{}' printed invalid UTF-8, decoding lossily", display);
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}

pub(crate) fn command_args(cmd: &Command) -> Cow<'static, str> {
    iter::once(cmd.get_program().to_string_lossy())
        .chain(cmd.get_args().map(|arg| arg.to_string_lossy()))
        .join(" ")
        .into()
}
