pub mod github_client;
mod handler;
mod repo_slug;
mod request;
mod response;
pub mod token;

pub use github_client::GithubClient;
pub use repo_slug::RepoSlug;
pub use token::Token;

/// Substrings that pick the label marking a pull request as awaiting peer review.
#[derive(Debug, Clone)]
pub struct LabelMarkers<'a> {
    pub review: &'a str,
    pub exclude: &'a str,
}

/// First label, in the given order, containing the review marker but not the excluded one.
pub fn find_assignment_label<'l>(labels: &'l [String], markers: &LabelMarkers) -> Option<&'l str> {
    labels
        .iter()
        .map(String::as_str)
        .find(|label| label.contains(markers.review) && !label.contains(markers.exclude))
}

/// Returns `handle` only if it is one of `candidates`, compared exactly.
pub fn validate_assignee<'c>(handle: &str, candidates: &'c [String]) -> Option<&'c str> {
    candidates
        .iter()
        .map(String::as_str)
        .find(|candidate| *candidate == handle)
}
