#![forbid(unsafe_op_in_unsafe_fn)]

use crate::error::{FovError, FovResult};

/// Vertical FOV (degrees) for a horizontal FOV at `width / height`.
#[inline]
pub fn vertical_from_horizontal(hor_fov_deg: f32, width: f32, height: f32) -> f32 {
    let half = (hor_fov_deg.to_radians() * 0.5).tan();
    2.0 * (half * height / width).atan().to_degrees()
}

/// Horizontal FOV (degrees) for a vertical FOV at `width / height`.
#[inline]
pub fn horizontal_from_vertical(vert_fov_deg: f32, width: f32, height: f32) -> f32 {
    let half = (vert_fov_deg.to_radians() * 0.5).tan();
    2.0 * (half * width / height).atan().to_degrees()
}

/// Hor+ scaling.
///
/// `desired_hor_fov` is authored for `ref_w`x`ref_h`. Returns the horizontal FOV that keeps the same vertical FOV
/// at `actual_w`x`actual_h`.
#[inline]
pub fn hor_plus(desired_hor_fov: f32, ref_w: f32, ref_h: f32, actual_w: f32, actual_h: f32) -> f32 {
    debug_assert!(desired_hor_fov > 0.0, "hor+ of non-positive fov {desired_hor_fov}");
    // Same aspect: skip the tan/atan round trip.
    if actual_w * ref_h == ref_w * actual_h {
        return desired_hor_fov;
    }
    let vert = vertical_from_horizontal(desired_hor_fov, ref_w, ref_h);
    horizontal_from_vertical(vert, actual_w, actual_h)
}

/// Authored horizontal FOV, validated to the open range (0, 180) degrees.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DesiredFov(f32);

impl DesiredFov {
    pub const MIN_EXCLUSIVE: f32 = 0.0;
    pub const MAX_EXCLUSIVE: f32 = 180.0;

    pub fn new(degrees: f32) -> FovResult<Self> {
        if degrees.is_finite() && degrees > Self::MIN_EXCLUSIVE && degrees < Self::MAX_EXCLUSIVE {
            Ok(Self(degrees))
        } else {
            Err(FovError::InvalidFov(degrees))
        }
    }

    /// Clamps into the valid range instead of rejecting. NaN becomes 90.
    pub fn clamped(degrees: f32) -> Self {
        if degrees.is_nan() {
            return Self(90.0);
        }
        Self(degrees.clamp(0.001, 179.999))
    }

    #[inline]
    pub fn degrees(self) -> f32 {
        self.0
    }
}

impl Default for DesiredFov {
    fn default() -> Self {
        Self(90.0)
    }
}
