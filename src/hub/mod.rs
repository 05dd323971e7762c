use crate::{
    command::{CommandExecutor, Invocation},
    error::Error,
};
use anyhow::{Context, Result};
use std::path::PathBuf;

const PULL_REQUEST_SUBCOMMAND: &str = "pull-request";

/// Flags forwarded to the pull request helper; each is passed only when set.
#[derive(Debug, Default, Clone)]
pub struct PullRequestOptions {
    pub browse: bool,
    pub force: bool,
    pub file: Option<PathBuf>,
    pub message: Option<String>,
    pub issue: Option<String>,
    pub base: Option<String>,
    pub head: Option<String>,
}

impl PullRequestOptions {
    pub fn invocation(&self, helper: &str) -> Invocation {
        let mut invocation = Invocation::new(helper).arg(PULL_REQUEST_SUBCOMMAND);

        if self.browse {
            invocation = invocation.arg("-o");
        }
        if self.force {
            invocation = invocation.arg("-f");
        }
        if let Some(file) = &self.file {
            invocation = invocation.arg("-F").arg(file.to_string_lossy());
        }

        let valued = [
            ("-m", &self.message),
            ("-i", &self.issue),
            ("-b", &self.base),
            ("-h", &self.head),
        ];
        for (flag, value) in valued {
            if let Some(value) = value {
                invocation = invocation.arg(flag).arg(value.as_str());
            }
        }

        invocation
    }
}

/// Runs the helper, which creates the pull request, and returns its number.
pub async fn create_pull_request<E>(
    executor: &E,
    helper: &str,
    options: &PullRequestOptions,
) -> Result<u64>
where
    E: CommandExecutor,
{
    let invocation = options.invocation(helper);

    let output = executor
        .capture(&invocation)
        .await
        .context("The pull request helper failed")?;

    Ok(parse_issue_number(&output)?)
}

/// Reads the number from the last path segment of the final line, e.g.
/// `https://github.com/o/r/pull/42` gives 42.
pub fn parse_issue_number(output: &str) -> Result<u64, Error> {
    let malformed = || Error::MalformedHelperOutput(output.trim().to_owned());

    let last_line = output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .last()
        .ok_or_else(malformed)?;

    let segment = last_line.trim_end_matches('/').rsplit('/').next().ok_or_else(malformed)?;

    segment.parse::<u64>().map_err(|_| malformed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::fake::FakeExecutor;

    #[test]
    fn should_parse_pull_request_number() {
        assert_eq!(
            parse_issue_number("https://github.com/o/r/pull/42\n"),
            Ok(42)
        );
    }

    #[test]
    fn should_use_the_last_non_empty_line() {
        let output = "Warning: something odd\nhttps://github.com/o/r/pull/7\n\n";

        assert_eq!(parse_issue_number(output), Ok(7));
    }

    #[test]
    fn should_reject_output_without_a_number() {
        assert!(parse_issue_number("").is_err());
        assert!(parse_issue_number("https://github.com/o/r/pull/").is_err());
        assert!(parse_issue_number("Aborted: no commits").is_err());
    }

    #[test]
    fn should_build_bare_invocation() {
        let invocation = PullRequestOptions::default().invocation("hub");

        assert_eq!(invocation.to_string(), "hub pull-request");
    }

    #[test]
    fn should_forward_every_provided_flag() {
        let options = PullRequestOptions {
            browse: true,
            force: true,
            file: Some(PathBuf::from("msg.md")),
            message: Some("Fix flaky test".to_owned()),
            issue: Some("12".to_owned()),
            base: Some("main".to_owned()),
            head: Some("o:topic".to_owned()),
        };

        assert_eq!(
            options.invocation("hub").to_string(),
            "hub pull-request -o -f -F msg.md -m 'Fix flaky test' -i 12 -b main -h o:topic"
        );
    }

    #[tokio::test]
    async fn should_create_pull_request_and_return_number() -> Result<()> {
        let executor = FakeExecutor::new().output(
            "hub pull-request -m Fix flaky test",
            "https://github.com/o/r/pull/17\n",
        );
        let options = PullRequestOptions {
            message: Some("Fix flaky test".to_owned()),
            ..Default::default()
        };

        let number = create_pull_request(&executor, "hub", &options).await?;

        assert_eq!(number, 17);

        Ok(())
    }

    #[tokio::test]
    async fn should_abort_when_the_helper_fails() {
        let executor = FakeExecutor::new().failing_output("hub pull-request", 1);

        let error = create_pull_request(&executor, "hub", &PullRequestOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::CommandFailed { code: Some(1), .. })
        ));
    }
}
