mod remote;

pub use remote::parse_repo_slug;

use crate::{
    command::{CommandExecutor, Invocation},
    error::Error,
};
use anyhow::Result;

const HEADS_PREFIX: &str = "refs/heads/";
const REMOTE_NAME: &str = "origin";

/// Outcome of the branch readiness check.
#[derive(Debug, PartialEq, Eq)]
pub enum Readiness {
    Ready,
    NotReady(Error),
}

pub struct Git<'a, E> {
    executor: &'a E,
    bin: &'a str,
}

impl<'a, E> Git<'a, E>
where
    E: CommandExecutor,
{
    pub fn new(executor: &'a E, bin: &'a str) -> Self {
        Git { executor, bin }
    }

    fn invocation(&self) -> Invocation {
        Invocation::new(self.bin)
    }

    pub async fn fetch(&self) -> Result<()> {
        let exit = self.executor.run(&self.invocation().arg("fetch")).await?;
        if !exit.success() {
            return Err(Error::FetchFailed.into());
        }

        Ok(())
    }

    /// True when the index has nothing staged relative to `HEAD`.
    pub async fn index_is_clean(&self) -> Result<bool> {
        let exit = self
            .executor
            .run(&self.invocation().args(["diff", "--cached", "--exit-code"]))
            .await?;

        Ok(exit.success())
    }

    /// True when `branch` has no differences from `origin/<branch>`.
    pub async fn matches_remote(&self, branch: &str) -> Result<bool> {
        let exit = self
            .executor
            .run(&self.invocation().args([
                "diff".to_owned(),
                "--exit-code".to_owned(),
                branch.to_owned(),
                format!("{}/{}", REMOTE_NAME, branch),
            ]))
            .await?;

        Ok(exit.success())
    }

    pub async fn current_branch(&self) -> Result<String> {
        let output = self
            .executor
            .capture(&self.invocation().args(["symbolic-ref", "HEAD"]))
            .await
            .map_err(|error| {
                log::debug!("symbolic-ref failed: {:#}", error);
                Error::InvalidBranchName(String::new())
            })?;

        Ok(parse_branch_name(&output)?)
    }

    pub async fn remotes(&self) -> Result<String> {
        self.executor
            .capture(&self.invocation().args(["remote", "-v"]))
            .await
    }
}

pub fn parse_branch_name(output: &str) -> Result<String, Error> {
    let trimmed = output.trim();

    match trimmed.strip_prefix(HEADS_PREFIX) {
        Some(name) if !name.is_empty() && !name.contains(char::is_whitespace) => {
            Ok(name.to_owned())
        }
        _ => Err(Error::InvalidBranchName(trimmed.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::fake::FakeExecutor;

    #[test]
    fn should_parse_branch_name() {
        assert_eq!(parse_branch_name("refs/heads/main\n").unwrap(), "main");
        assert_eq!(
            parse_branch_name("refs/heads/feature/login\n").unwrap(),
            "feature/login"
        );
    }

    #[test]
    fn should_reject_invalid_branch_names() {
        assert!(parse_branch_name("").is_err());
        assert!(parse_branch_name("refs/heads/\n").is_err());
        assert!(parse_branch_name("refs/tags/v1.0.0").is_err());
    }

    #[tokio::test]
    async fn should_fail_when_fetch_fails() {
        let executor = FakeExecutor::new().status("git fetch", 128);
        let git = Git::new(&executor, "git");

        let error = git.fetch().await.unwrap_err();

        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::FetchFailed)
        ));
    }

    #[tokio::test]
    async fn should_compare_the_branch_with_its_remote_counterpart() -> Result<()> {
        let executor = FakeExecutor::new().status("git diff --exit-code topic origin/topic", 1);
        let git = Git::new(&executor, "git");

        assert!(!git.matches_remote("topic").await?);

        Ok(())
    }

    #[tokio::test]
    async fn should_read_the_current_branch() -> Result<()> {
        let executor = FakeExecutor::new().output("git symbolic-ref HEAD", "refs/heads/topic\n");
        let git = Git::new(&executor, "git");

        assert_eq!(git.current_branch().await?, "topic");

        Ok(())
    }

    #[tokio::test]
    async fn should_report_a_detached_head_as_invalid_branch() {
        let executor = FakeExecutor::new().failing_output("git symbolic-ref HEAD", 128);
        let git = Git::new(&executor, "git");

        let error = git.current_branch().await.unwrap_err();

        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::InvalidBranchName(_))
        ));
    }
}
