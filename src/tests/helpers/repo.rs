use std::{env, fs, path::Path, process::Command, sync::Once};

use temp_dir::TempDir;

// https://git-scm.com/book/en/v2/Git-Internals-Environment-Variables
const GIT_ENV: [(&str, &str); 12] = [
    ("GIT_CONFIG_GLOBAL", "/dev/null"),
    ("GIT_CONFIG_SYSTEM", "/dev/null"),
    ("GIT_CONFIG_NOSYSTEM", "1"),
    // libgit2 finds global config through these
    ("HOME", "/dev/null"),
    ("GIT_AUTHOR_NAME", "Author Name"),
    ("GIT_AUTHOR_EMAIL", "author@email.com"),
    ("GIT_AUTHOR_DATE", "Fri Feb 16 11:11 2024 +0100"),
    ("GIT_COMMITTER_NAME", "Committer Name"),
    ("GIT_COMMITTER_EMAIL", "committer@email.com"),
    ("GIT_COMMITTER_DATE", "Sun Feb 18 14:00 2024 +0100"),
    ("LC_ALL", "C"),
    ("XDG_CONFIG_HOME", "/dev/null"),
];

static SET_ENV_VARS: Once = Once::new();

/// Isolates the whole test process from the user's git configuration, so the runner
/// and libgit2 under test see the same settings as the helpers.
pub fn set_env_vars() {
    SET_ENV_VARS.call_once(|| {
        for (key, value) in GIT_ENV {
            // SAFETY: every test writes the same values, once, before touching git.
            unsafe { env::set_var(key, value) };
        }
    });
}

pub struct RepoTestContext {
    pub dir: TempDir,
}

impl RepoTestContext {
    pub fn setup_init() -> Self {
        set_env_vars();
        let dir = TempDir::new().unwrap();

        run(dir.path(), &["git", "init", "--initial-branch=main"]);
        set_config(dir.path());

        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Runs `cmd` in `dir` and returns its stdout.
pub fn run(dir: &Path, cmd: &[&str]) -> String {
    let output = Command::new(cmd[0])
        .args(&cmd[1..])
        .envs(GIT_ENV)
        .current_dir(dir)
        .output()
        .unwrap_or_else(|_| panic!("failed to execute {:?}", cmd));

    assert!(
        output.status.success(),
        "{:?} failed: {}",
        cmd,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).unwrap()
}

fn set_config(path: &Path) {
    run(path, &["git", "config", "user.email", "ci@example.com"]);
    run(path, &["git", "config", "user.name", "CI"]);
}

pub fn commit(dir: &Path, file_name: &str, contents: &str) {
    let path = dir.to_path_buf().join(file_name);
    let message = match path.try_exists() {
        Ok(true) => format!("modify {}\n\nCommit body goes here\n", file_name),
        _ => format!("add {}\n\nCommit body goes here\n", file_name),
    };
    fs::write(path, contents).expect("error writing to file");
    run(dir, &["git", "add", file_name]);
    run(dir, &["git", "commit", "-m", &message]);
}
