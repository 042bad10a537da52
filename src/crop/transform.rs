// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state of the source image relative to the crop frame.
//!
//! [`clamp_offset`] is the only function that decides whether an offset is
//! valid. Every mutation path in the controller routes through it.

use super::ScaleLimits;
use iced::{Size, Vector};

/// Current zoom (scale) and pan (offset) of the source image.
///
/// `offset` is the displacement of the image center from the frame center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub offset: Vector,
}

impl TransformState {
    /// Initial state for a freshly loaded image: covering scale, centered.
    #[must_use]
    pub fn initial(frame: Size, image: Size, coverage_margin: f32) -> Self {
        let scale = initial_scale(frame, image, coverage_margin);
        Self {
            scale,
            offset: clamp_offset(scale, Vector::ZERO, frame, image),
        }
    }

    /// Returns a copy with a new scale (bounded) and the offset re-clamped.
    #[must_use]
    pub fn with_scale(self, scale: f32, limits: ScaleLimits, frame: Size, image: Size) -> Self {
        let scale = limits.clamp(scale);
        Self {
            scale,
            offset: clamp_offset(scale, self.offset, frame, image),
        }
    }

    /// Returns a copy with a proposed offset, clamped to the current bounds.
    #[must_use]
    pub fn with_offset(self, offset: Vector, frame: Size, image: Size) -> Self {
        Self {
            scale: self.scale,
            offset: clamp_offset(self.scale, offset, frame, image),
        }
    }
}

/// Allowed offset range on both axes for a given scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl OffsetBounds {
    /// Computes the bounds that keep the scaled image over the frame.
    ///
    /// An axis on which the scaled image is smaller than the frame collapses
    /// to `[0, 0]` so the image stays centered there.
    #[must_use]
    pub fn new(scale: f32, frame: Size, image: Size) -> Self {
        let scaled_w = image.width * scale;
        let scaled_h = image.height * scale;

        let max_x = ((scaled_w - frame.width) / 2.0).max(0.0);
        let max_y = ((scaled_h - frame.height) / 2.0).max(0.0);
        let min_x = if scaled_w < frame.width { 0.0 } else { -max_x };
        let min_y = if scaled_h < frame.height { 0.0 } else { -max_y };

        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    #[must_use]
    pub fn contains(&self, offset: Vector) -> bool {
        (self.min_x..=self.max_x).contains(&offset.x) && (self.min_y..=self.max_y).contains(&offset.y)
    }
}

/// Clamps a proposed offset so the scaled image never exposes empty space
/// inside the frame (or stays centered on axes where it cannot cover it).
///
/// Idempotent: clamping an already clamped offset returns it unchanged.
#[must_use]
pub fn clamp_offset(scale: f32, offset: Vector, frame: Size, image: Size) -> Vector {
    let bounds = OffsetBounds::new(scale, frame, image);
    Vector::new(
        offset.x.clamp(bounds.min_x, bounds.max_x),
        offset.y.clamp(bounds.min_y, bounds.max_y),
    )
}

/// Smallest scale at which the image covers the frame, times `coverage_margin`.
///
/// Returns `1.0` for a degenerate (zero-sized) image.
#[must_use]
pub fn initial_scale(frame: Size, image: Size, coverage_margin: f32) -> f32 {
    if image.width <= 0.0 || image.height <= 0.0 {
        return 1.0;
    }
    (frame.width / image.width).max(frame.height / image.height) * coverage_margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, assert_relative_eq};

    const FRAME: Size = Size::new(600.0, 600.0);
    const IMAGE: Size = Size::new(1000.0, 500.0);

    #[test]
    fn initial_scale_covers_frame_with_margin() {
        let scale = initial_scale(FRAME, IMAGE, 1.1);
        assert_relative_eq!(scale, 1.32, epsilon = 1e-5);
        assert!(scale * IMAGE.width >= FRAME.width);
        assert!(scale * IMAGE.height >= FRAME.height);
    }

    #[test]
    fn initial_state_always_covers_frame() {
        let frames = [Size::new(600.0, 600.0), Size::new(800.0, 450.0), Size::new(300.0, 600.0)];
        let images = [Size::new(1000.0, 500.0), Size::new(40.0, 4000.0), Size::new(1.0, 1.0)];

        for frame in frames {
            for image in images {
                let state = TransformState::initial(frame, image, 1.1);
                assert!(state.scale * image.width >= frame.width);
                assert!(state.scale * image.height >= frame.height);
                assert_eq!(state.offset, Vector::ZERO);
            }
        }
    }

    #[test]
    fn bounds_match_half_overflow() {
        let bounds = OffsetBounds::new(1.32, FRAME, IMAGE);
        assert_relative_eq!(bounds.max_x, 360.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.min_x, -360.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.max_y, 30.0, epsilon = 1e-3);
        assert_relative_eq!(bounds.min_y, -30.0, epsilon = 1e-3);
    }

    #[test]
    fn undersized_axis_is_forced_to_center() {
        // 1000x500 at 0.8 → 800x400: wider than the frame, shorter than it.
        let offset = clamp_offset(0.8, Vector::new(500.0, -50.0), FRAME, IMAGE);
        assert_abs_diff_eq!(offset.x, 100.0);
        assert_abs_diff_eq!(offset.y, 0.0);
    }

    #[test]
    fn clamp_is_idempotent() {
        let proposals = [
            Vector::new(0.0, 0.0),
            Vector::new(1e6, -1e6),
            Vector::new(-12.5, 7.25),
            Vector::new(359.9, 30.1),
        ];
        for scale in [0.3, 0.8, 1.32, 2.0, 5.0] {
            for proposal in proposals {
                let once = clamp_offset(scale, proposal, FRAME, IMAGE);
                let twice = clamp_offset(scale, once, FRAME, IMAGE);
                assert_eq!(once, twice);
                assert!(OffsetBounds::new(scale, FRAME, IMAGE).contains(once));
            }
        }
    }

    #[test]
    fn lowering_scale_reclamps_edge_offset() {
        let limits = ScaleLimits::default();
        let at_edge = TransformState {
            scale: 2.0,
            offset: clamp_offset(2.0, Vector::new(1e6, 1e6), FRAME, IMAGE),
        };
        assert_abs_diff_eq!(at_edge.offset.x, 700.0);
        assert_abs_diff_eq!(at_edge.offset.y, 200.0);

        let zoomed_out = at_edge.with_scale(1.32, limits, FRAME, IMAGE);
        assert!(OffsetBounds::new(zoomed_out.scale, FRAME, IMAGE).contains(zoomed_out.offset));
        assert_relative_eq!(zoomed_out.offset.x, 360.0, epsilon = 1e-3);
        assert_relative_eq!(zoomed_out.offset.y, 30.0, epsilon = 1e-3);
    }

    #[test]
    fn with_scale_respects_limits() {
        let state = TransformState::initial(FRAME, IMAGE, 1.1);
        let limits = ScaleLimits::default();
        assert_abs_diff_eq!(state.with_scale(100.0, limits, FRAME, IMAGE).scale, 5.0);
        assert_abs_diff_eq!(state.with_scale(0.0, limits, FRAME, IMAGE).scale, 0.3);
    }

    #[test]
    fn zero_sized_image_uses_unit_scale() {
        assert_abs_diff_eq!(initial_scale(FRAME, Size::new(0.0, 10.0), 1.1), 1.0);
    }
}
