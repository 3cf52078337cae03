use thiserror::Error;

#[derive(Error, Debug)]
pub enum SniffError {
    #[error("Load error: {0}")]
    Load(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
