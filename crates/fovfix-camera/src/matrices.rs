#![forbid(unsafe_op_in_unsafe_fn)]

use glam::Mat4;

use crate::error::{FovError, FovResult};
use crate::pose::ViewPose;
use crate::projection::{near_plane, ProjectionParams};
use crate::viewport::ViewRect;

/// Inverse that refuses singular or non-finite input instead of returning garbage.
#[inline]
pub fn try_inverse(m: &Mat4) -> FovResult<Mat4> {
    let determinant = m.determinant();
    if determinant == 0.0 || !determinant.is_finite() {
        return Err(FovError::SingularMatrix { determinant });
    }
    let inv = m.inverse();
    if !inv.is_finite() {
        return Err(FovError::SingularMatrix { determinant });
    }
    Ok(inv)
}

/// Camera matrices of one frame, all derived from the same pose/rect/projection.
///
/// Matrices are column-major, column vectors (glam convention).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatrixSet {
    view: Mat4,
    inv_view: Mat4,
    proj: Mat4,
    inv_proj: Mat4,
    inv_view_proj: Mat4,
    near: f32,
}

impl MatrixSet {
    /// Builds view/projection for `rect` and both inverses.
    ///
    /// Fails only if one of the matrices cannot be inverted; no partial set is returned.
    pub fn build(pose: &ViewPose, rect: &ViewRect, params: &ProjectionParams) -> FovResult<Self> {
        let view = pose.view_matrix();
        let proj = params.matrix(rect.width() as f32, rect.height() as f32);
        Self::from_parts(view, proj)
    }

    pub fn from_parts(view: Mat4, proj: Mat4) -> FovResult<Self> {
        let inv_view = try_inverse(&view)?;
        let inv_proj = try_inverse(&proj)?;

        Ok(Self {
            view,
            inv_view,
            proj,
            inv_proj,
            // Undo projection, then undo view.
            inv_view_proj: inv_view * inv_proj,
            near: near_plane(&proj),
        })
    }

    #[inline]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    #[inline]
    pub fn inv_view(&self) -> Mat4 {
        self.inv_view
    }

    #[inline]
    pub fn proj(&self) -> Mat4 {
        self.proj
    }

    #[inline]
    pub fn inv_proj(&self) -> Mat4 {
        self.inv_proj
    }

    #[inline]
    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view
    }

    #[inline]
    pub fn inv_view_proj(&self) -> Mat4 {
        self.inv_view_proj
    }

    #[inline]
    pub fn near(&self) -> f32 {
        self.near
    }
}
