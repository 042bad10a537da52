// SPDX-License-Identifier: MPL-2.0
//! Tuning parameters for the crop controller and compositor.
//!
//! Values are product choices rather than invariants, so they are carried as
//! data (resolved from the `[crop]` config section) instead of literals.

use crate::config::defaults::{
    DEFAULT_COVERAGE_MARGIN, DEFAULT_EXPORT_UPSCALE, DEFAULT_FRAME_INSET, DEFAULT_JPEG_QUALITY,
    DEFAULT_MAX_FRAME_HEIGHT, DEFAULT_MAX_FRAME_WIDTH, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE,
    DEFAULT_WHEEL_STEP, DEFAULT_ZOOM_STEP,
};

/// Zoom bounds, guaranteed to satisfy `0 < min <= max`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLimits {
    min: f32,
    max: f32,
}

impl ScaleLimits {
    /// Creates bounds, swapping the arguments if they are reversed.
    ///
    /// Non-positive values are raised to `f32::EPSILON`.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: lo.max(f32::EPSILON),
            max: hi.max(f32::EPSILON),
        }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Clamps a scale into the bounds.
    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE)
    }
}

/// Limits used to size the crop frame inside its container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLimits {
    /// Free margin kept on every side of the container.
    pub inset: f32,
    /// Upper bound on the frame width.
    pub max_width: f32,
    /// Upper bound on the frame height.
    pub max_height: f32,
}

impl Default for FrameLimits {
    fn default() -> Self {
        Self {
            inset: DEFAULT_FRAME_INSET,
            max_width: DEFAULT_MAX_FRAME_WIDTH,
            max_height: DEFAULT_MAX_FRAME_HEIGHT,
        }
    }
}

/// Complete crop tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropSettings {
    /// Multiplier over the minimal covering scale applied on load and reset.
    pub coverage_margin: f32,
    pub scale_limits: ScaleLimits,
    /// Scale increment for the zoom buttons.
    pub zoom_step: f32,
    /// Scale increment for one wheel tick.
    pub wheel_step: f32,
    pub frame_limits: FrameLimits,
    /// Export resolution relative to the on-screen frame.
    pub export_upscale: f32,
    /// JPEG quality, 1-100.
    pub jpeg_quality: u8,
}

impl Default for CropSettings {
    fn default() -> Self {
        Self {
            coverage_margin: DEFAULT_COVERAGE_MARGIN,
            scale_limits: ScaleLimits::default(),
            zoom_step: DEFAULT_ZOOM_STEP,
            wheel_step: DEFAULT_WHEEL_STEP,
            frame_limits: FrameLimits::default(),
            export_upscale: DEFAULT_EXPORT_UPSCALE,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_limits_swap_reversed_bounds() {
        let limits = ScaleLimits::new(5.0, 0.3);
        assert_eq!(limits.min(), 0.3);
        assert_eq!(limits.max(), 5.0);
    }

    #[test]
    fn scale_limits_clamp() {
        let limits = ScaleLimits::default();
        assert_eq!(limits.clamp(0.1), 0.3);
        assert_eq!(limits.clamp(9.0), 5.0);
        assert_eq!(limits.clamp(1.0), 1.0);
    }
}
