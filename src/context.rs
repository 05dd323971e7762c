use crate::{
    command::CommandExecutor,
    config::Config,
    error::Error,
    git::{self, Git, Readiness},
    github::{GithubClient, RepoSlug, Token},
};
use anyhow::{anyhow, Context, Result};
use once_cell::sync::OnceCell;

/// Everything one command run needs. Repository slug, branch name and token
/// are looked up on first use and reused for the rest of the run.
pub struct RunContext<E> {
    executor: E,
    config: Config,
    repo_slug: OnceCell<RepoSlug>,
    branch: OnceCell<String>,
    token: OnceCell<Token>,
}

impl<E> RunContext<E>
where
    E: CommandExecutor,
{
    pub fn new(executor: E, config: Config) -> Self {
        RunContext {
            executor,
            config,
            repo_slug: OnceCell::new(),
            branch: OnceCell::new(),
            token: OnceCell::new(),
        }
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn git(&self) -> Git<'_, E> {
        Git::new(&self.executor, &self.config.git)
    }

    pub async fn repo_slug(&self) -> Result<&RepoSlug> {
        if let Some(slug) = self.repo_slug.get() {
            return Ok(slug);
        }

        let remotes = self.git().remotes().await?;
        let slug = git::parse_repo_slug(&remotes)?;
        log::debug!("current repository: {}", slug);

        Ok(self.repo_slug.get_or_init(|| slug))
    }

    pub async fn current_branch(&self) -> Result<&str> {
        if let Some(branch) = self.branch.get() {
            return Ok(branch.as_str());
        }

        let branch = self.git().current_branch().await?;
        log::debug!("current branch: {}", branch);

        Ok(self.branch.get_or_init(|| branch).as_str())
    }

    /// Refreshes remote-tracking refs, then checks for staged and unpushed work.
    /// The branch name is only needed, and so only resolved, for the last step.
    pub async fn branch_readiness(&self) -> Result<Readiness> {
        let git = self.git();
        git.fetch().await?;

        if !git.index_is_clean().await? {
            return Ok(Readiness::NotReady(Error::UncommittedChanges));
        }

        let branch = self.current_branch().await?;
        if !git.matches_remote(branch).await? {
            return Ok(Readiness::NotReady(Error::UnpushedChanges {
                branch: branch.to_owned(),
            }));
        }

        Ok(Readiness::Ready)
    }

    /// `GITHUB_TOKEN` when set, otherwise the `oauth_token` of the hub config.
    pub async fn token(&self) -> Result<&Token> {
        if let Some(token) = self.token.get() {
            return Ok(token);
        }

        let token = match &self.config.github_token {
            Some(token) => Token::new(token.trim()),
            None => {
                let path = self
                    .config
                    .hub_config_path()
                    .ok_or_else(|| anyhow!("Cannot locate the home directory"))?;
                Token::from_hub_config(&path)
                    .await
                    .context("Cannot load the github token")?
            }
        };

        Ok(self.token.get_or_init(|| token))
    }

    pub async fn github(&self) -> Result<GithubClient> {
        let token = self.token().await?.clone();

        Ok(GithubClient::new(&self.config.api_url, token))
    }
}
