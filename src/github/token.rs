use crate::error::Error;
use anyhow::{Context, Result};
use std::{fmt, path::Path};

const TOKEN_MARKER: &str = "oauth_token:";

#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    pub fn new(value: impl Into<String>) -> Self {
        Token(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Reads the token out of a hub config file.
    pub async fn from_hub_config(path: &Path) -> Result<Token> {
        log::debug!("reading oauth token from {}", path.display());

        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read {}", path.display()))?;

        parse_token(&content).ok_or_else(|| Error::MissingToken(path.display().to_string()).into())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

/// Finds the last `oauth_token:` marker anywhere in `content` and returns the
/// run of non-whitespace characters after it.
pub fn parse_token(content: &str) -> Option<Token> {
    let (_, rest) = content.rsplit_once(TOKEN_MARKER)?;

    let token: String = rest
        .trim_start_matches([' ', '\t'])
        .chars()
        .take_while(|c| !c.is_whitespace())
        .collect();

    if token.is_empty() {
        None
    } else {
        Some(Token(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HUB_CONFIG: &str = "github.com:\n\
                              - user: carol\n  \
                                oauth_token: 0123abcd\n  \
                                protocol: https\n";

    #[test]
    fn should_parse_token_from_hub_config() {
        let token = parse_token(HUB_CONFIG).unwrap();

        assert_eq!(token.expose(), "0123abcd");
    }

    #[test]
    fn should_take_the_last_token_of_several_hosts() {
        let content = "github.com:\n\
                       - user: carol\n  \
                         oauth_token: first111\n\
                       ghe.example.com:\n\
                       - user: carol\n  \
                         oauth_token: last2222\n";

        let token = parse_token(content).unwrap();

        assert_eq!(token.expose(), "last2222");
    }

    #[test]
    fn should_stop_at_whitespace() {
        let token = parse_token("oauth_token:\tabc def").unwrap();

        assert_eq!(token.expose(), "abc");
    }

    #[test]
    fn should_not_find_a_missing_or_empty_token() {
        assert!(parse_token("github.com:\n- user: carol\n").is_none());
        assert!(parse_token("oauth_token:   \nprotocol: https").is_none());
    }

    #[test]
    fn should_redact_debug_output() {
        let token = Token::new("secret");

        assert_eq!(format!("{:?}", token), "Token(***)");
    }

    #[tokio::test]
    async fn should_read_token_from_file() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(HUB_CONFIG.as_bytes())?;

        let token = Token::from_hub_config(file.path()).await?;

        assert_eq!(token.expose(), "0123abcd");

        Ok(())
    }

    #[tokio::test]
    async fn should_fail_when_file_has_no_token() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all(b"github.com:\n- user: carol\n")?;

        let error = Token::from_hub_config(file.path()).await.unwrap_err();

        assert!(matches!(
            error.downcast_ref::<Error>(),
            Some(Error::MissingToken(_))
        ));

        Ok(())
    }
}
