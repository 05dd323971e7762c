use crate::{
    command::{CommandExecutor, Invocation},
    error::Error,
};
use anyhow::{Context, Result};
use std::{env, io::Write};
use tempfile::NamedTempFile;

const TEMP_FILE_PREFIX: &str = "PULLREQ_EDITMSG";

/// Pull request text; the first line is the title and the rest is the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestMessage(String);

impl PullRequestMessage {
    pub fn new(text: impl Into<String>) -> Self {
        PullRequestMessage(text.into())
    }

    pub fn title(&self) -> &str {
        self.0.lines().next().unwrap_or_default().trim()
    }

    pub fn body(&self) -> &str {
        match self.0.split_once('\n') {
            Some((_, body)) => body.trim(),
            None => "",
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// `VISUAL`, then `EDITOR`, then `fallback`. Blank values count as unset.
pub fn resolve_editor(visual: Option<String>, editor: Option<String>, fallback: &str) -> String {
    visual
        .into_iter()
        .chain(editor)
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

pub fn editor_from_env(fallback: &str) -> String {
    resolve_editor(env::var("VISUAL").ok(), env::var("EDITOR").ok(), fallback)
}

/// Opens `editor` on a temporary file seeded with `default` and returns what
/// the user saved, trimmed. The file is removed whatever happens.
pub async fn compose<E>(executor: &E, editor: &str, default: Option<&str>) -> Result<PullRequestMessage>
where
    E: CommandExecutor,
{
    let mut file = tempfile::Builder::new()
        .prefix(TEMP_FILE_PREFIX)
        .suffix(".md")
        .tempfile()
        .context("Cannot create a temporary file for the pull request message")?;

    if let Some(default) = default {
        file.write_all(default.as_bytes())?;
        file.flush()?;
    }

    let invocation = editor_invocation(editor, &file)?;
    let exit = executor.interactive(&invocation).await?;
    if !exit.success() {
        return Err(Error::EditorFailed {
            editor: editor.to_owned(),
            code: exit.raw(),
        }
        .into());
    }

    let content = tokio::fs::read_to_string(file.path()).await?;
    let message = content.trim();
    if message.is_empty() {
        return Err(Error::EmptyMessage.into());
    }

    Ok(PullRequestMessage::new(message))
}

// editors such as `code --wait` carry their own arguments
fn editor_invocation(editor: &str, file: &NamedTempFile) -> Result<Invocation> {
    let mut words = editor.split_whitespace();
    let program = words
        .next()
        .ok_or_else(|| anyhow::anyhow!("No editor configured"))?;

    Ok(Invocation::new(program)
        .args(words)
        .arg(file.path().to_string_lossy()))
}
