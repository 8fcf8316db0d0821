/// Convenience alias for results carrying a [`RaypassError`].
pub type RaypassResult<T> = Result<T, RaypassError>;

/// Crate-wide error taxonomy.
///
/// Codec errors (`InvalidDimensions`, `UnsupportedPixelFormat`) are non-fatal to a
/// render session: the offending frame is skipped and the session keeps waiting for
/// the next one. `Engine` is session-fatal and resolves into a failed terminal
/// session event; it never crosses the worker/UI boundary as a panic.
#[derive(thiserror::Error, Debug)]
pub enum RaypassError {
    /// A value failed boundary validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// Reported byte length does not match `width * height * bytes_per_pixel`, or an
    /// extent is zero.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// `bytes_per_pixel` is not one of the supported values (1, 3 or 4).
    #[error("unsupported pixel format: {bytes_per_pixel} bytes per pixel")]
    UnsupportedPixelFormat {
        /// The rejected pixel size.
        bytes_per_pixel: u32,
    },

    /// The blocking engine call returned abnormally.
    #[error("engine failure: {0}")]
    Engine(String),

    /// Wrapped foreign error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RaypassError {
    /// Build a `Validation` error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an `InvalidDimensions` error.
    pub fn invalid_dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build an `Engine` error.
    pub fn engine(msg: impl Into<String>) -> Self {
        Self::Engine(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
