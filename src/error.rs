use thiserror::Error;

/// Conditions that end a run early.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("no work paths were specified")]
    NoWorkPaths,

    #[error("unknown parameter {0} while silent")]
    UnknownFlag(String),
}

impl Error {
    /// Process exit status for this condition.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::NoWorkPaths => 1,
            Error::UnknownFlag(_) => 2,
        }
    }
}
