use glam::{Mat4, Quat, Vec3};

use fovfix_camera::{DesiredFov, FovCorrector};

use crate::config::MeshConfig;
use crate::error::CoreResult;
use crate::frame::FrameView;

/// World placement of a mesh.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    #[inline]
    pub fn new(translation: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            translation,
            rotation,
            scale,
        }
    }

    /// Scale, then rotate, then translate.
    #[inline]
    pub fn to_matrix_with_scale(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A mesh drawn with its own horizontal FOV.
#[derive(Clone, Debug, PartialEq)]
pub struct CorrectedMesh {
    pub id: String,
    pub transform: Transform,
    desired_fov: DesiredFov,
}

impl CorrectedMesh {
    pub fn new(id: impl Into<String>, transform: Transform, desired_fov: DesiredFov) -> Self {
        Self {
            id: id.into(),
            transform,
            desired_fov,
        }
    }

    pub fn from_config(cfg: &MeshConfig, transform: Transform) -> CoreResult<Self> {
        Ok(Self::new(cfg.id.clone(), transform, cfg.desired_fov()?))
    }

    #[inline]
    pub fn desired_fov(&self) -> DesiredFov {
        self.desired_fov
    }

    /// Matrix to hand to the renderer instead of the plain model matrix.
    pub fn render_matrix(&self, corrector: &FovCorrector, frame: &FrameView) -> Mat4 {
        corrector.render_matrix(
            self.transform.to_matrix_with_scale(),
            frame.pose.as_ref(),
            frame.viewport.as_ref(),
            &frame.projection,
            self.desired_fov.degrees(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fovfix_camera::{ProjectionParams, Rotator, ViewPose, ViewportMetrics};

    fn mesh(fov: f32) -> CorrectedMesh {
        CorrectedMesh::new(
            "arms",
            Transform::new(Vec3::new(40.0, 5.0, 150.0), Quat::IDENTITY, Vec3::splat(1.5)),
            DesiredFov::new(fov).unwrap(),
        )
    }

    #[test]
    fn detached_frame_renders_plain_model() {
        let m = mesh(70.0);
        let frame = FrameView::detached(ProjectionParams::default());
        let out = m.render_matrix(&FovCorrector::default(), &frame);
        assert_eq!(out, m.transform.to_matrix_with_scale());
    }

    #[test]
    fn active_frame_changes_matrix() {
        let m = mesh(60.0);
        let frame = FrameView::new(
            ViewPose::new(Vec3::new(0.0, 0.0, 150.0), Rotator::ZERO),
            ViewportMetrics::new(1920, 1080),
            ProjectionParams::default(),
        );
        let out = m.render_matrix(&FovCorrector::default(), &frame);
        assert!(out.is_finite());
        assert!(!out.abs_diff_eq(m.transform.to_matrix_with_scale(), 1e-3));
    }

    #[test]
    fn from_config_validates() {
        let bad = MeshConfig {
            id: "bad".into(),
            desired_horizontal_fov: -10.0,
        };
        assert!(CorrectedMesh::from_config(&bad, Transform::default()).is_err());
    }
}
