use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Was unable to call git fetch")]
    FetchFailed,
    #[error("Uncommitted changes in local working directory")]
    UncommittedChanges,
    #[error("Unpushed local changes on branch {branch}")]
    UnpushedChanges { branch: String },
    #[error("Got invalid branch name {0:?}")]
    InvalidBranchName(String),
    #[error("Could not figure out the github repository from the git remotes")]
    NoGithubRemote,
    #[error("Could not find oauth token in {0}")]
    MissingToken(String),
    #[error("No label with the text '{review}' and without the text '{exclude}' found")]
    NoAssignmentLabel { review: String, exclude: String },
    #[error("No assignee named {0} found")]
    UnknownAssignee(String),
    #[error("`{command}` exited with {}", .code.map_or("a signal".to_owned(), |c| format!("status {c}")))]
    CommandFailed { command: String, code: Option<i32> },
    #[error("Could not read a pull request number from the helper output {0:?}")]
    MalformedHelperOutput(String),
    #[error("Editor `{editor}` exited with {}", .code.map_or("a signal".to_owned(), |c| format!("status {c}")))]
    EditorFailed { editor: String, code: Option<i32> },
    #[error("Aborting due to empty pull request message")]
    EmptyMessage,
    #[error("Interrupted")]
    Interrupted,
    #[error("Failed to mark issue {issue} with label {label} and assign {assignee}")]
    LabelAndAssignFailed {
        issue: u64,
        label: String,
        assignee: String,
    },
}
