#![forbid(unsafe_op_in_unsafe_fn)]

use glam::{Mat4, Vec2};

use crate::error::FovResult;
use crate::fit::ResolutionFit;
use crate::fov::hor_plus;
use crate::matrices::MatrixSet;
use crate::pose::ViewPose;
use crate::projection::{reversed_z_perspective, ProjectionParams};
use crate::viewport::ViewportMetrics;

/// Result of one correction pass, kept around for inspection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correction {
    pub native: MatrixSet,
    pub fit: ResolutionFit,
    /// Horizontal FOV (degrees) the new projection was built with.
    pub applied_hor_fov: f32,
    pub projection: Mat4,
    pub view_proj: Mat4,
}

impl Correction {
    /// Model -> corrected clip -> back through the native view-projection.
    #[inline]
    pub fn apply(&self, model: Mat4) -> Mat4 {
        self.native.inv_view_proj() * self.view_proj * model
    }

    /// Whether the corrected view-projection equals the native one.
    #[inline]
    pub fn is_noop(&self, max_abs_diff: f32) -> bool {
        self.view_proj.abs_diff_eq(self.native.view_proj(), max_abs_diff)
    }
}

/// Re-projects meshes through a camera with their own horizontal FOV.
///
/// Stateless apart from the reference resolution the FOV was authored for. Every call derives all matrices from the
/// frame inputs it is given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FovCorrector {
    reference: Vec2,
}

impl Default for FovCorrector {
    fn default() -> Self {
        Self {
            reference: Self::REFERENCE_RESOLUTION,
        }
    }
}

impl FovCorrector {
    pub const REFERENCE_RESOLUTION: Vec2 = Vec2::new(1920.0, 1080.0);

    pub fn new(reference_width: f32, reference_height: f32) -> FovResult<Self> {
        ResolutionFit::try_fit(reference_width, reference_height, reference_width, reference_height)?;
        Ok(Self {
            reference: Vec2::new(reference_width, reference_height),
        })
    }

    #[inline]
    pub fn reference(&self) -> Vec2 {
        self.reference
    }

    /// Builds the corrected projection for this frame.
    ///
    /// Only the pillar-box case (viewport wider than the reference) gets Hor+ scaling; every other viewport uses the
    /// desired FOV at the reference resolution.
    pub fn correct(
        &self,
        pose: &ViewPose,
        viewport: &ViewportMetrics,
        params: &ProjectionParams,
        desired_hor_fov: f32,
    ) -> FovResult<Correction> {
        let native = MatrixSet::build(pose, &viewport.view_rect(), params)?;

        let size = viewport.size_f32();
        let fit = ResolutionFit::try_fit(self.reference.x, self.reference.y, size.x, size.y)?;

        let (applied_hor_fov, projection) = if fit.is_pillar_box() {
            let fov = hor_plus(desired_hor_fov, self.reference.x, self.reference.y, size.x, size.y);
            let half = fov.to_radians() * 0.5;
            (fov, reversed_z_perspective(half, size.x, size.y, native.near()))
        } else {
            let half = desired_hor_fov.to_radians() * 0.5;
            (
                desired_hor_fov,
                reversed_z_perspective(half, self.reference.x, self.reference.y, native.near()),
            )
        };

        log::trace!(
            "fov correction: viewport {}x{} {:?}, hor fov {} -> {}",
            viewport.width,
            viewport.height,
            fit.correction,
            desired_hor_fov,
            applied_hor_fov
        );

        Ok(Correction {
            native,
            fit,
            applied_hor_fov,
            projection,
            view_proj: projection * native.view(),
        })
    }

    /// Render matrix to use in place of `model`.
    ///
    /// - No view point, or no viewport with a visible area: `model` is returned as is.
    /// - Native matrices not invertible: returns `Mat4::NAN`.
    pub fn render_matrix(
        &self,
        model: Mat4,
        pose: Option<&ViewPose>,
        viewport: Option<&ViewportMetrics>,
        params: &ProjectionParams,
        desired_hor_fov: f32,
    ) -> Mat4 {
        let viewport = viewport.filter(|v| v.width > 0 && v.height > 0);
        let (Some(pose), Some(viewport)) = (pose, viewport) else {
            log::trace!("fov correction skipped: no active view point or viewport");
            return model;
        };

        match self.correct(pose, viewport, params, desired_hor_fov) {
            Ok(c) => c.apply(model),
            Err(e) => {
                log::warn!("fov correction failed: {e}");
                Mat4::NAN
            }
        }
    }
}

/// [`FovCorrector::render_matrix`] at the default 1920x1080 reference.
#[inline]
pub fn compute_render_matrix(
    model: Mat4,
    pose: Option<&ViewPose>,
    viewport: Option<&ViewportMetrics>,
    params: &ProjectionParams,
    desired_hor_fov: f32,
) -> Mat4 {
    FovCorrector::default().render_matrix(model, pose, viewport, params, desired_hor_fov)
}
