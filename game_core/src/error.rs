use thiserror::Error;

/// Rejected game configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("field must have a positive size, got {width}x{height}")]
    EmptyField { width: f32, height: f32 },

    #[error("{what} must have a positive size, got {width}x{height}")]
    EmptyEntity {
        what: &'static str,
        width: f32,
        height: f32,
    },

    #[error("paddle height {paddle} does not fit in field height {field}")]
    PaddleTooTall { paddle: f32, field: f32 },

    #[error("paddles overlap: field width {field} is too narrow for margin {margin} and width {paddle}")]
    FieldTooNarrow { field: f32, margin: f32, paddle: f32 },

    #[error("ball max speed must be positive, got {0}")]
    MaxSpeed(f32),

    #[error("win target must be at least 1")]
    WinTarget,
}

/// Failure inside one of the front-end collaborators (terminal, window, ...)
#[derive(Error, Debug)]
pub enum FrontendError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
