use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkyGraphError {
    #[error("Invalid plot parameter: {0}")]
    InvalidPlotParameter(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unable to parse sky scene: {0}")]
    SceneParseError(#[from] serde_json::Error),
}

impl PartialEq for SkyGraphError {
    fn eq(&self, other: &Self) -> bool {
        use SkyGraphError::*;
        match (self, other) {
            (InvalidPlotParameter(a), InvalidPlotParameter(b)) => a == b,
            (InvalidColor(a), InvalidColor(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (RenderError(a), RenderError(b)) => a == b,

            // Wrapped errors are not comparable: same variant means equal
            (IoError(_), IoError(_)) => true,
            (SceneParseError(_), SceneParseError(_)) => true,

            _ => false,
        }
    }
}
