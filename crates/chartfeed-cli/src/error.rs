use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] chartfeed_core::ValidationError),

    #[error(transparent)]
    Datafeed(#[from] chartfeed_core::DatafeedError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Datafeed(_) => 4,
            Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
