#![forbid(unsafe_op_in_unsafe_fn)]

use glam::{Mat3, Mat4, Vec3, Vec4};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Euler orientation in degrees.
///
/// Host convention:
/// - yaw about +Z (up),
/// - pitch about +Y, positive is nose-up,
/// - roll about +X (forward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rotator {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Rotator {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        roll: 0.0,
    };

    #[inline]
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Local axes expressed in world space: (forward, right, up).
    #[inline]
    pub fn axes(&self) -> (Vec3, Vec3, Vec3) {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sr, cr) = self.roll.to_radians().sin_cos();

        let forward = Vec3::new(cp * cy, cp * sy, sp);
        let right = Vec3::new(sr * sp * cy - cr * sy, sr * sp * sy + cr * cy, -sr * cp);
        let up = Vec3::new(-(cr * sp * cy + sr * sy), cy * sr - cr * sp * sy, cr * cp);
        (forward, right, up)
    }

    /// Local->World rotation.
    #[inline]
    pub fn matrix(&self) -> Mat3 {
        let (forward, right, up) = self.axes();
        Mat3::from_cols(forward, right, up)
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.axes().0
    }
}

/// Player view point for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewPose {
    pub location: Vec3,
    pub rotation: Rotator,
}

impl ViewPose {
    #[inline]
    pub fn new(location: Vec3, rotation: Rotator) -> Self {
        Self { location, rotation }
    }

    /// Maps world axes (forward, right, up) onto view axes (Z, X, Y).
    #[inline]
    pub fn axis_remap() -> Mat4 {
        Mat4::from_cols(
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::W,
        )
    }

    /// Rotation-only part of the view transform.
    #[inline]
    pub fn view_rotation_matrix(&self) -> Mat4 {
        // Pure rotation: the inverse is the transpose.
        Self::axis_remap() * Mat4::from_mat3(self.rotation.matrix().transpose())
    }

    /// World->View matrix.
    #[inline]
    pub fn view_matrix(&self) -> Mat4 {
        self.view_rotation_matrix() * Mat4::from_translation(-self.location)
    }
}
