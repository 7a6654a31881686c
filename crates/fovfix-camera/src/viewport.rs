#![forbid(unsafe_op_in_unsafe_fn)]

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Active render target plus the local player's slice of it.
///
/// `origin`/`size` are normalized fractions of the target (split-screen). A single full-screen player
/// uses origin (0, 0) and size (1, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewportMetrics {
    pub width: u32,
    pub height: u32,
    pub origin: Vec2,
    pub size: Vec2,
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}

impl ViewportMetrics {
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            origin: Vec2::ZERO,
            size: Vec2::ONE,
        }
    }

    #[inline]
    pub fn with_split(mut self, origin: Vec2, size: Vec2) -> Self {
        self.origin = origin;
        self.size = size;
        self
    }

    #[inline]
    pub fn size_f32(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Player view rectangle in pixels. Fractions are truncated toward zero.
    #[inline]
    pub fn view_rect(&self) -> ViewRect {
        let px = self.size_f32();
        let min_x = (self.origin.x * px.x).trunc() as i32;
        let min_y = (self.origin.y * px.y).trunc() as i32;
        let w = (self.size.x * px.x).trunc().max(0.0) as i32;
        let h = (self.size.y * px.y).trunc().max(0.0) as i32;
        ViewRect {
            min_x,
            min_y,
            max_x: min_x + w,
            max_y: min_y + h,
        }
    }
}

/// Integer pixel rectangle, max exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewRect {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl ViewRect {
    #[inline]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_screen_rect_matches_target() {
        let rect = ViewportMetrics::new(2560, 1080).view_rect();
        assert_eq!(rect, ViewRect { min_x: 0, min_y: 0, max_x: 2560, max_y: 1080 });
    }

    #[test]
    fn split_screen_bottom_half() {
        let rect = ViewportMetrics::new(1921, 1081)
            .with_split(Vec2::new(0.0, 0.5), Vec2::new(1.0, 0.5))
            .view_rect();
        assert_eq!(rect.min_y, 540);
        assert_eq!(rect.height(), 540);
        assert_eq!(rect.width(), 1921);
    }

    #[test]
    fn zero_size_is_empty() {
        assert!(ViewportMetrics::new(0, 720).view_rect().is_empty());
    }
}
