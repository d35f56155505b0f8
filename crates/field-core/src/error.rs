use thiserror::Error;

/// Errors raised while building or resizing a particle field.
///
/// Per-frame simulation cannot fail; only construction is validated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("particle field needs at least one particle")]
    EmptyField,
    #[error("invalid viewport {width}x{height}: dimensions must be finite and positive")]
    InvalidViewport { width: f32, height: f32 },
    #[error("invalid layout buffer {0}: must be finite and non-negative")]
    InvalidBuffer(f32),
}
