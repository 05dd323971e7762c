use super::{CommandExecutor, Exit, Invocation};
use crate::error::Error;
use anyhow::{bail, Result};
use std::{cell::RefCell, collections::HashMap};

enum Scripted {
    Status(i32),
    Output(i32, String),
}

/// Executor answering from a script keyed by the space-joined command line.
#[derive(Default)]
pub struct FakeExecutor {
    script: HashMap<String, Scripted>,
    editor_writes: Option<String>,
    editor_hangs: bool,
    calls: RefCell<Vec<Invocation>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, line: &str, code: i32) -> Self {
        self.script.insert(line.to_owned(), Scripted::Status(code));
        self
    }

    pub fn output(mut self, line: &str, stdout: &str) -> Self {
        self.script
            .insert(line.to_owned(), Scripted::Output(0, stdout.to_owned()));
        self
    }

    pub fn failing_output(mut self, line: &str, code: i32) -> Self {
        self.script
            .insert(line.to_owned(), Scripted::Output(code, String::new()));
        self
    }

    /// Content the fake editor writes into the file it is handed (its last argument).
    pub fn editor_writes(mut self, content: &str) -> Self {
        self.editor_writes = Some(content.to_owned());
        self
    }

    /// The fake editor never exits, like a user who has not saved yet.
    pub fn editor_hangs(mut self) -> Self {
        self.editor_hangs = true;
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub fn lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(line).collect()
    }

    fn lookup(&self, invocation: &Invocation) -> Result<&Scripted> {
        self.calls.borrow_mut().push(invocation.clone());

        match self.script.get(&line(invocation)) {
            Some(scripted) => Ok(scripted),
            None => bail!("unexpected command `{}`", line(invocation)),
        }
    }
}

fn line(invocation: &Invocation) -> String {
    std::iter::once(invocation.program())
        .chain(invocation.arguments().iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

impl CommandExecutor for FakeExecutor {
    async fn run(&self, invocation: &Invocation) -> Result<Exit> {
        match self.lookup(invocation)? {
            Scripted::Status(code) | Scripted::Output(code, _) => Ok(Exit::new(Some(*code))),
        }
    }

    async fn capture(&self, invocation: &Invocation) -> Result<String> {
        match self.lookup(invocation)? {
            Scripted::Output(0, stdout) => Ok(stdout.to_owned()),
            Scripted::Output(code, _) | Scripted::Status(code) => Err(Error::CommandFailed {
                command: invocation.to_string(),
                code: Some(*code),
            }
            .into()),
        }
    }

    async fn interactive(&self, invocation: &Invocation) -> Result<Exit> {
        self.calls.borrow_mut().push(invocation.clone());

        if let (Some(content), Some(path)) = (&self.editor_writes, invocation.arguments().last()) {
            std::fs::write(path, content)?;
        }

        if self.editor_hangs {
            std::future::pending::<()>().await;
        }

        let program = invocation.program();
        match self.script.get(program) {
            Some(Scripted::Status(code)) => Ok(Exit::new(Some(*code))),
            _ => Ok(Exit::new(Some(0))),
        }
    }
}
