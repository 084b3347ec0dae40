use thiserror::Error;

pub type Result<T> = std::result::Result<T, ViewerError>;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] sift_core::DataError),

    #[error(transparent)]
    Driver(#[from] sift_runtime::DriverError),

    #[error("unknown command: {input}")]
    BadCommand { input: String },
}

impl ViewerError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Data(_) => 2,
            _ => 1,
        }
    }

    #[must_use]
    pub fn bad_command(input: impl Into<String>) -> Self {
        Self::BadCommand {
            input: input.into(),
        }
    }
}
