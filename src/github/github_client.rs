use super::{
    handler::repository_handler::RepositoryHandler,
    request::IssueUpdateRequest,
    response::{AssigneeResponse, LabelResponse},
    token::Token,
    RepoSlug,
};
use crate::http::{request::Body, Client, ClientRequestBuilder};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

const OK_STATUS: u16 = 200;
const PAGE_SIZE: u8 = 100;

pub struct GithubClient {
    http: Client,
    api_url: String,
    token: Token,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>, token: Token) -> Self {
        GithubClient {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_owned(),
            token,
        }
    }

    pub fn repo<'a>(&'a self, slug: &'a RepoSlug) -> RepositoryHandler<'a> {
        RepositoryHandler::new(self, slug)
    }

    fn repo_url(&self, slug: &RepoSlug) -> String {
        format!("{}/repos/{}/{}", self.api_url, slug.owner(), slug.repo())
    }

    pub(super) async fn get_labels(&self, slug: &RepoSlug) -> Result<Vec<String>> {
        let uri = format!("{}/labels?per_page={}", self.repo_url(slug), PAGE_SIZE);

        let labels: Vec<LabelResponse> = self
            .get_all(uri)
            .await
            .with_context(|| format!("Cannot list the labels of {}", slug))?;

        Ok(labels.into_iter().map(|label| label.name).collect())
    }

    pub(super) async fn get_assignees(&self, slug: &RepoSlug) -> Result<Vec<String>> {
        let uri = format!("{}/assignees?per_page={}", self.repo_url(slug), PAGE_SIZE);

        let assignees: Vec<AssigneeResponse> = self
            .get_all(uri)
            .await
            .with_context(|| format!("Cannot list the assignees of {}", slug))?;

        Ok(assignees.into_iter().map(|person| person.login).collect())
    }

    /// Follows `Link: rel="next"` until the last page, keeping the server's order.
    async fn get_all<T>(&self, uri: String) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut next = Some(uri);

        while let Some(uri) = next.take() {
            let response = self
                .http
                .get(uri)
                .json_content_headers(self.token.expose())
                .send()
                .await?;

            next = response.next().map(str::to_owned);
            items.extend(response.json::<Vec<T>>()?);
        }

        Ok(items)
    }

    /// Sets assignee and label on an issue in one request. Only a 200 counts as success.
    pub(super) async fn update_issue(
        &self,
        slug: &RepoSlug,
        issue_number: u64,
        label: &str,
        assignee: &str,
    ) -> Result<bool> {
        log::debug!("Labelling and assigning issue {}", issue_number);
        let uri = format!("{}/issues/{}", self.repo_url(slug), issue_number);

        let request = IssueUpdateRequest::new(assignee, label);

        let response = self
            .http
            .post(uri)
            .json_content_headers(self.token.expose())
            .body(Body::json(&request)?)
            .send()
            .await?;

        if response.status() != OK_STATUS {
            log::debug!(
                "issue update answered {}: {}",
                response.status(),
                response.text()
            );
        }

        Ok(response.status() == OK_STATUS)
    }
}
