use thiserror::Error;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Invalid regular expression: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("git {command} failed: {message}")]
    GitCommand { command: String, message: String },

    #[error("failed to execute git {command}")]
    GitSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Remote '{remote}' not found")]
    UnknownRemote { remote: String },

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

pub type Result<T> = std::result::Result<T, SweepError>;
