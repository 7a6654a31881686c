pub mod component;
pub mod config;
pub mod error;
pub mod frame;

pub use crate::component::{CorrectedMesh, Transform};
pub use crate::config::{FovConfig, MeshConfig};
pub use crate::error::{CoreError, CoreResult};
pub use crate::frame::FrameView;

pub use fovfix_camera as camera;
