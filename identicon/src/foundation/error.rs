/// Convenience result type used across the identicon crate.
pub type IdenticonResult<T> = Result<T, IdenticonError>;

/// Top-level error taxonomy.
///
/// The derivation pipeline itself cannot fail; errors only originate at the rendering and
/// output boundary.
#[derive(thiserror::Error, Debug)]
pub enum IdenticonError {
    /// Invalid caller-provided settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing an identity.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IdenticonError {
    /// Build an [`IdenticonError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`IdenticonError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
