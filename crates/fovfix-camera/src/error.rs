use thiserror::Error;

pub type FovResult<T> = Result<T, FovError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FovError {
    #[error("horizontal fov must be in (0, 180) degrees, got {0}")]
    InvalidFov(f32),

    #[error("resolution must be positive and finite, got {width}x{height}")]
    InvalidResolution { width: f32, height: f32 },

    #[error("matrix is singular (determinant {determinant})")]
    SingularMatrix { determinant: f32 },
}
