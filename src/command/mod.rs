#[cfg(test)]
pub mod fake;

use crate::error::Error;
use anyhow::{Context, Result};
use std::{fmt, process::Stdio};
use tokio::process::Command;

/// A program plus its argv, executed without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Invocation {
            program: program.into(),
            args: vec![],
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    fn command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).kill_on_drop(true);
        command
    }
}

/// Renders the invocation the way it would be typed in a POSIX shell.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(self.program()))?;
        for arg in self.arguments() {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

pub fn shell_quote(value: &str) -> String {
    let plain = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));

    if plain {
        value.to_owned()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

/// Exit code of a finished process; `None` when it was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit(Option<i32>);

impl Exit {
    pub fn new(code: Option<i32>) -> Self {
        Exit(code)
    }

    pub fn success(&self) -> bool {
        self.0 == Some(0)
    }

    pub fn raw(&self) -> Option<i32> {
        self.0
    }
}

impl From<std::process::ExitStatus> for Exit {
    fn from(status: std::process::ExitStatus) -> Self {
        Exit::new(status.code())
    }
}

pub trait CommandExecutor {
    /// Runs the invocation with stdout discarded and reports how it exited.
    async fn run(&self, invocation: &Invocation) -> Result<Exit>;

    /// Runs the invocation and returns its stdout. A non-zero exit is an error.
    async fn capture(&self, invocation: &Invocation) -> Result<String>;

    /// Runs the invocation attached to the terminal, for interactive programs.
    async fn interactive(&self, invocation: &Invocation) -> Result<Exit>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl CommandExecutor for SystemExecutor {
    async fn run(&self, invocation: &Invocation) -> Result<Exit> {
        log::debug!("> {}", invocation);

        let status = invocation
            .command()
            .stdout(Stdio::null())
            .spawn()
            .with_context(|| format!("Cannot spawn `{}`", invocation))?
            .wait()
            .await?;

        Ok(status.into())
    }

    async fn capture(&self, invocation: &Invocation) -> Result<String> {
        log::debug!("> {}", invocation);

        let output = invocation
            .command()
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit())
            .output()
            .await
            .with_context(|| format!("Cannot spawn `{}`", invocation))?;

        if !output.status.success() {
            return Err(Error::CommandFailed {
                command: invocation.to_string(),
                code: output.status.code(),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        log::trace!("{}", stdout);

        Ok(stdout)
    }

    async fn interactive(&self, invocation: &Invocation) -> Result<Exit> {
        log::debug!("> {}", invocation);

        let status = invocation
            .command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("Cannot spawn `{}`", invocation))?
            .wait()
            .await?;

        Ok(status.into())
    }
}

/// Fails early when a required binary is not on `PATH`.
pub fn check_binary(name: &str) -> Result<()> {
    match which::which(name) {
        Ok(path) => {
            log::debug!("found {} at {}", name, path.display());
            Ok(())
        }
        Err(error) => {
            log::error!("{} not found in PATH", name);
            Err(anyhow::anyhow!("`{}` is required but was not found: {}", name, error))
        }
    }
}
