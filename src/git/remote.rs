use crate::{error::Error, github::RepoSlug};

const GITHUB_HOST: &str = "github.com";
const PREFERRED_REMOTE: &str = "origin";

/// Picks the github repository out of `git remote -v` output, preferring `origin`.
pub fn parse_repo_slug(remotes: &str) -> Result<RepoSlug, Error> {
    let candidates: Vec<(&str, RepoSlug)> = remotes
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let name = fields.next()?;
            let url = fields.next()?;
            slug_from_url(url).map(|slug| (name, slug))
        })
        .collect();

    let preferred = candidates
        .iter()
        .position(|(name, _)| *name == PREFERRED_REMOTE)
        .unwrap_or(0);

    candidates
        .into_iter()
        .nth(preferred)
        .map(|(_, slug)| slug)
        .ok_or(Error::NoGithubRemote)
}

fn slug_from_url(url: &str) -> Option<RepoSlug> {
    let (_, rest) = url.split_once(GITHUB_HOST)?;

    // one separator: ':' for scp-like urls, '/' otherwise
    let path = rest.strip_prefix([':', '/'])?;
    let path = path.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let (owner, repo) = path.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }

    Some(RepoSlug::new(owner, repo))
}
