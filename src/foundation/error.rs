/// Convenience result alias used across the crate.
pub type DailyJokeResult<T> = Result<T, DailyJokeError>;

/// Error raised by a pipeline stage. The variant names the stage that failed.
#[derive(thiserror::Error, Debug)]
pub enum DailyJokeError {
    /// Invalid configuration, including an empty catalog at selection time.
    #[error("config error: {0}")]
    Config(String),

    /// Catalog file could not be read or parsed.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Background image or font could not be loaded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Text shaping or measuring failed.
    #[error("layout error: {0}")]
    Layout(String),

    /// Rasterisation failed.
    #[error("render error: {0}")]
    Render(String),

    /// The output image could not be written.
    #[error("save error: {0}")]
    Save(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DailyJokeError {
    /// Build a [`DailyJokeError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`DailyJokeError::Catalog`].
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Build a [`DailyJokeError::Asset`].
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`DailyJokeError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`DailyJokeError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`DailyJokeError::Save`].
    pub fn save(msg: impl Into<String>) -> Self {
        Self::Save(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
