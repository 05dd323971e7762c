use crate::error::Error;
use anyhow::Result;
use std::{future::Future, io};

/// Drives `work` until it finishes or `interrupt` fires, whichever comes first.
///
/// On interrupt `work` is dropped, so every resource it owns (the editor's
/// temporary file, child processes spawned with `kill_on_drop`) is released
/// before the error is returned.
pub async fn until_interrupted<W, I, T>(work: W, interrupt: I) -> Result<T>
where
    W: Future<Output = Result<T>>,
    I: Future<Output = io::Result<()>>,
{
    tokio::select! {
        result = work => result,
        signal = interrupt => {
            signal?;
            log::debug!("received interrupt, aborting");
            Err(Error::Interrupted.into())
        }
    }
}
