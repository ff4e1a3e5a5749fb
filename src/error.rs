/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Discord gateway error: {0}")]
    Discord(#[from] serenity::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
