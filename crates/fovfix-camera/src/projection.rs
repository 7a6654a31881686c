#![forbid(unsafe_op_in_unsafe_fn)]

use glam::Mat4;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which axis keeps the authored FOV when the view rect is not square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AspectConstraint {
    /// FOV applies to the longer axis.
    MajorAxis,
    /// FOV is horizontal; vertical FOV follows the aspect ratio.
    #[default]
    MaintainXFov,
    /// FOV is vertical; horizontal FOV follows the aspect ratio.
    MaintainYFov,
}

impl AspectConstraint {
    /// (x, y) multipliers applied to `1 / tan(half_fov)` for a `width`x`height` rect.
    #[inline]
    pub fn axis_multipliers(self, width: f32, height: f32) -> (f32, f32) {
        let w = width.max(1.0);
        let h = height.max(1.0);
        let keep_x = match self {
            Self::MaintainXFov => true,
            Self::MaintainYFov => false,
            Self::MajorAxis => w > h,
        };
        if keep_x {
            (1.0, w / h)
        } else {
            (h / w, 1.0)
        }
    }
}

/// Active camera projection for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectionParams {
    /// FOV in degrees, on the axis picked by `constraint`.
    pub fov_deg: f32,
    /// Near clip distance in world units.
    pub near: f32,
    pub constraint: AspectConstraint,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self::new(90.0, 10.0, AspectConstraint::MaintainXFov)
    }
}

impl ProjectionParams {
    #[inline]
    pub fn new(fov_deg: f32, near: f32, constraint: AspectConstraint) -> Self {
        Self {
            fov_deg,
            near: near.max(1e-6),
            constraint,
        }
    }

    /// Native projection for a `width`x`height` view rect.
    #[inline]
    pub fn matrix(&self, width: f32, height: f32) -> Mat4 {
        let half = self.fov_deg.max(0.001).to_radians() * 0.5;
        let (mx, my) = self.constraint.axis_multipliers(width, height);
        reversed_z_perspective_axes(half, half, mx, my, self.near)
    }
}

/// Reversed-Z perspective with an infinite far plane.
///
/// `half_fov_rad` is horizontal; the vertical scale follows `width / height`.
#[inline]
pub fn reversed_z_perspective(half_fov_rad: f32, width: f32, height: f32, near: f32) -> Mat4 {
    let aspect = width / height.max(1e-6);
    reversed_z_perspective_axes(half_fov_rad, half_fov_rad, 1.0, aspect, near)
}

/// Reversed-Z perspective with an infinite far plane and per-axis FOV multipliers.
///
/// Clip depth is `near / view_z`: 1 at the near plane, 0 at infinity.
#[inline]
pub fn reversed_z_perspective_axes(
    half_fov_x: f32,
    half_fov_y: f32,
    mult_x: f32,
    mult_y: f32,
    near: f32,
) -> Mat4 {
    let sx = mult_x / half_fov_x.tan();
    let sy = mult_y / half_fov_y.tan();

    Mat4::from_cols_array(&[
        sx, 0.0, 0.0, 0.0,
        0.0, sy, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0,
        0.0, 0.0, near, 0.0,
    ])
}

/// Near distance stored in a matrix built by this module.
#[inline]
pub fn near_plane(projection: &Mat4) -> f32 {
    projection.w_axis.z
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn near_plane_maps_to_depth_one() {
        let p = reversed_z_perspective(45f32.to_radians(), 1920.0, 1080.0, 10.0);
        let ndc = p.project_point3(Vec3::new(0.0, 0.0, 10.0));
        assert!((ndc.z - 1.0).abs() < 1e-6);
        let far = p.project_point3(Vec3::new(0.0, 0.0, 1.0e6));
        assert!(far.z > 0.0 && far.z < 1e-4);
    }

    #[test]
    fn horizontal_edge_hits_ndc_one() {
        // 90 deg horizontal: x == z sits on the right edge.
        let p = reversed_z_perspective(45f32.to_radians(), 1920.0, 1080.0, 10.0);
        let ndc = p.project_point3(Vec3::new(100.0, 0.0, 100.0));
        assert!((ndc.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn maintain_x_matches_single_fov_builder() {
        let params = ProjectionParams::new(90.0, 10.0, AspectConstraint::MaintainXFov);
        let a = params.matrix(1920.0, 1080.0);
        let b = reversed_z_perspective(45f32.to_radians(), 1920.0, 1080.0, 10.0);
        assert!(a.abs_diff_eq(b, 1e-6));
    }

    #[test]
    fn major_axis_follows_orientation() {
        assert_eq!(AspectConstraint::MajorAxis.axis_multipliers(1920.0, 1080.0).0, 1.0);
        assert_eq!(AspectConstraint::MajorAxis.axis_multipliers(1080.0, 1920.0).1, 1.0);
    }

    #[test]
    fn maintain_y_keeps_vertical_scale() {
        let params = ProjectionParams::new(60.0, 10.0, AspectConstraint::MaintainYFov);
        let m = params.matrix(2560.0, 1080.0);
        assert!((m.y_axis.y - 1.0 / 30f32.to_radians().tan()).abs() < 1e-5);
    }

    #[test]
    fn near_is_read_back() {
        let p = ProjectionParams::new(75.0, 12.5, AspectConstraint::MajorAxis).matrix(800.0, 600.0);
        assert_eq!(near_plane(&p), 12.5);
    }
}
