use thiserror::Error;

/// Errors a plugin command can end with
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command was cancelled; not reported to the user
    #[error("command cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CommandResult<T> = Result<T, CommandError>;

/// Run a command, swallowing cancellation.
///
/// Returns `Ok(None)` when the command was cancelled.
pub fn catch_cancel<T, F>(command: F) -> CommandResult<Option<T>>
where
    F: FnOnce() -> CommandResult<T>,
{
    match command() {
        Ok(value) => Ok(Some(value)),
        Err(CommandError::Cancelled) => {
            tracing::debug!(target: "command", "A COMMAND WAS CANCELED");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
