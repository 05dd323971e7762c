use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_GIT_BIN_NAME: &str = "git";
const DEFAULT_PR_HELPER_BIN_NAME: &str = "hub";
const DEFAULT_REVIEW_MARKER: &str = "review";
const DEFAULT_SELF_MARKER: &str = "self";
const DEFAULT_EDITOR: &str = "vi";

const DEFAULT_CONFIG_FILE_NAME: &str = ".config/hubplus.yaml";
const DEFAULT_HUB_CONFIG_FILE_NAME: &str = ".config/hub";

const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub hub_config: Option<PathBuf>,
    pub git: String,
    pub pr_helper: String,
    pub review_marker: String,
    pub self_marker: String,
    pub default_editor: String,
    pub message_template: Option<String>,
    #[serde(skip)]
    pub github_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_owned(),
            hub_config: None,
            git: DEFAULT_GIT_BIN_NAME.to_owned(),
            pr_helper: DEFAULT_PR_HELPER_BIN_NAME.to_owned(),
            review_marker: DEFAULT_REVIEW_MARKER.to_owned(),
            self_marker: DEFAULT_SELF_MARKER.to_owned(),
            default_editor: DEFAULT_EDITOR.to_owned(),
            message_template: None,
            github_token: None,
        }
    }
}

impl Config {
    /// Loads the config file and applies environment overrides.
    ///
    /// An explicit `path` must exist; the default location may be missing, in
    /// which case every field keeps its default.
    pub async fn load(path: Option<&Path>) -> Result<Config> {
        let mut config = match path {
            Some(path) => Self::read(path).await?,
            None => match default_config_path() {
                Some(path) if path.is_file() => Self::read(&path).await?,
                _ => Config::default(),
            },
        };

        config.github_token = env::var(GITHUB_TOKEN_ENV)
            .ok()
            .filter(|token| !token.trim().is_empty());

        Ok(config)
    }

    async fn read(path: &Path) -> Result<Config> {
        log::debug!("reading config from {}", path.display());

        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read {}", path.display()))?;

        Self::parse(&config_string)
    }

    fn parse(content: &str) -> Result<Config> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_yaml::from_str::<Config>(content)?;

        Ok(config)
    }

    pub fn hub_config_path(&self) -> Option<PathBuf> {
        self.hub_config
            .clone()
            .or_else(|| dirs::home_dir().map(|home| home.join(DEFAULT_HUB_CONFIG_FILE_NAME)))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE_NAME))
}
