use super::issue_handler::IssueHandler;
use crate::github::{github_client::GithubClient, RepoSlug};
use anyhow::Result;

pub struct RepositoryHandler<'a> {
    client: &'a GithubClient,
    slug: &'a RepoSlug,
}

impl<'a> RepositoryHandler<'a> {
    pub fn new(client: &'a GithubClient, slug: &'a RepoSlug) -> Self {
        RepositoryHandler { client, slug }
    }

    /// Label names in the order the API returns them.
    pub async fn labels(&self) -> Result<Vec<String>> {
        self.client.get_labels(self.slug).await
    }

    /// Handles that can be assigned to issues of this repository.
    pub async fn assignees(&self) -> Result<Vec<String>> {
        self.client.get_assignees(self.slug).await
    }

    pub fn issue(&self, number: u64) -> IssueHandler<'a> {
        IssueHandler::new(self.client, self.slug, number)
    }
}
