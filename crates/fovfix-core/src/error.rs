use thiserror::Error;

use fovfix_camera::FovError;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("config error: {0}")]
    Config(String),

    #[error("mesh error [{mesh}]: {source}")]
    Mesh {
        mesh: String,
        #[source]
        source: FovError,
    },

    #[error(transparent)]
    Fov(#[from] FovError),
}
