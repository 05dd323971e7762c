use crate::github::{github_client::GithubClient, RepoSlug};
use anyhow::Result;

pub struct IssueHandler<'a> {
    client: &'a GithubClient,
    slug: &'a RepoSlug,
    number: u64,
}

impl<'a> IssueHandler<'a> {
    pub fn new(client: &'a GithubClient, slug: &'a RepoSlug, number: u64) -> Self {
        IssueHandler {
            client,
            slug,
            number,
        }
    }

    pub async fn label_and_assign(&self, label: &str, assignee: &str) -> Result<bool> {
        self.client
            .update_issue(self.slug, self.number, label, assignee)
            .await
    }
}
