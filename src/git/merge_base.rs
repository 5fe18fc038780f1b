use crate::{
    Res,
    config::MergeBaseConfig,
    error::Error,
    process::{CommandRunner, GIT},
};

/// Finds the commit a history view of `reference` should be compared against.
///
/// Trunk branches are compared against themselves, everything else against the
/// integration branch. Failing to resolve the current branch is an error, while a
/// missing merge base degrades to an empty commit.
pub fn merge_base(
    runner: &dyn CommandRunner,
    config: &MergeBaseConfig,
    reference: &str,
) -> Res<String> {
    let branch = current_branch_name(runner)?;
    let target = comparison_branch(config, &branch);

    match runner.run(GIT, &["merge-base", reference, target]) {
        Ok(out) => Ok(out.trim().to_string()),
        Err(e) => {
            log::warn!("No merge base between {} and {}: {}", reference, target, e);
            Ok(String::new())
        }
    }
}

pub fn current_branch_name(runner: &dyn CommandRunner) -> Res<String> {
    runner
        .run(GIT, &["symbolic-ref", "--short", "HEAD"])
        .map(|out| out.trim().to_string())
        .map_err(|e| Error::CurrentBranchName(Box::new(e)))
}

fn comparison_branch<'a>(config: &'a MergeBaseConfig, branch: &'a str) -> &'a str {
    if config.is_trunk(branch) {
        branch
    } else {
        &config.integration_branch
    }
}
