use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid color: {0}")]
    InvalidColor(String),

    #[error("I/O error ({}): {source}", .context.as_deref().unwrap_or("unknown"))]
    Io {
        source: std::io::Error,
        context: Option<String>,
    },

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        AppError::Io {
            source,
            context: None,
        }
    }
}
