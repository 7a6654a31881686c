#![forbid(unsafe_op_in_unsafe_fn)]

use glam::Vec2;

use crate::error::{FovError, FovResult};

/// Relative tolerance used when comparing aspect ratios.
const ASPECT_EPS: f32 = 1e-6;

/// Which axis bounds the fitted reference resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AspectCorrection {
    /// Actual viewport is wider than the reference: height-constrained, spare columns left/right.
    PillarBox,
    /// Actual viewport is narrower than the reference: width-constrained, spare rows top/bottom.
    LetterBox,
    /// Same aspect ratio.
    None,
}

/// Largest copy of a reference resolution that fits inside the actual viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolutionFit {
    pub resolution: Vec2,
    pub pixel_scale: f32,
    pub correction: AspectCorrection,
}

impl ResolutionFit {
    /// Checked variant of [`max_fitting_resolution`].
    pub fn try_fit(target_w: f32, target_h: f32, actual_w: f32, actual_h: f32) -> FovResult<Self> {
        check_resolution(target_w, target_h)?;
        check_resolution(actual_w, actual_h)?;
        Ok(fit(target_w, target_h, actual_w, actual_h))
    }

    #[inline]
    pub fn is_pillar_box(&self) -> bool {
        self.correction == AspectCorrection::PillarBox
    }
}

/// Fits `target` into `actual` preserving the target aspect ratio.
///
/// Inputs must be positive. Zero, negative or non-finite sizes trip a debug assertion and are replaced by one pixel.
#[inline]
pub fn max_fitting_resolution(target_w: f32, target_h: f32, actual_w: f32, actual_h: f32) -> ResolutionFit {
    debug_assert!(
        check_resolution(target_w, target_h).is_ok() && check_resolution(actual_w, actual_h).is_ok(),
        "degenerate resolution {target_w}x{target_h} -> {actual_w}x{actual_h}"
    );
    fit(
        sanitize(target_w),
        sanitize(target_h),
        sanitize(actual_w),
        sanitize(actual_h),
    )
}

fn fit(target_w: f32, target_h: f32, actual_w: f32, actual_h: f32) -> ResolutionFit {
    let pixel_scale = (actual_w / target_w).min(actual_h / target_h);

    // Cross-multiplied aspect comparison: actual_w / actual_h vs target_w / target_h.
    let lhs = actual_w * target_h;
    let rhs = target_w * actual_h;
    let correction = if (lhs - rhs).abs() <= ASPECT_EPS * lhs.max(rhs) {
        AspectCorrection::None
    } else if lhs > rhs {
        AspectCorrection::PillarBox
    } else {
        AspectCorrection::LetterBox
    };

    // Snap the constrained axis so it equals the actual size exactly.
    let resolution = match correction {
        AspectCorrection::PillarBox => Vec2::new(target_w * pixel_scale, actual_h),
        AspectCorrection::LetterBox => Vec2::new(actual_w, target_h * pixel_scale),
        AspectCorrection::None => Vec2::new(actual_w, actual_h),
    };

    ResolutionFit {
        resolution,
        pixel_scale,
        correction,
    }
}

#[inline]
fn check_resolution(width: f32, height: f32) -> FovResult<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(FovError::InvalidResolution { width, height })
    }
}

#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        1.0
    }
}
