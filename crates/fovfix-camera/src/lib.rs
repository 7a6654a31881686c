#![forbid(unsafe_op_in_unsafe_fn)]

//! Field-of-view correction for meshes drawn with their own horizontal FOV.
//!
//! Conventions (kept identical to the host renderer so corrected matrices compose losslessly):
//! - World: X forward, Y right, Z up.
//! - View: X right, Y up, Z forward (left-handed).
//! - Projection: reversed Z, infinite far plane.
//! - glam column vectors: "A then B" is `B * A`.

pub mod corrector;
pub mod error;
pub mod fit;
pub mod fov;
pub mod matrices;
pub mod pose;
pub mod projection;
pub mod viewport;

pub use crate::corrector::{compute_render_matrix, Correction, FovCorrector};
pub use crate::error::{FovError, FovResult};
pub use crate::fit::{AspectCorrection, ResolutionFit};
pub use crate::fov::DesiredFov;
pub use crate::matrices::MatrixSet;
pub use crate::pose::{Rotator, ViewPose};
pub use crate::projection::{AspectConstraint, ProjectionParams};
pub use crate::viewport::{ViewRect, ViewportMetrics};
