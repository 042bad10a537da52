// SPDX-License-Identifier: MPL-2.0
//! Crop frame geometry.
//!
//! The frame is the fixed-aspect rectangle that becomes the exported image.
//! Its size depends only on the requested aspect ratio and the container, never
//! on the source image.

use super::FrameLimits;
use iced::{Point, Rectangle, Size};

/// Computes the on-screen crop frame size.
///
/// The usable area is the container minus `limits.inset` on every side, capped
/// at `limits.max_width` × `limits.max_height`. Landscape and square ratios are
/// fitted by width first, portrait ratios by height first, so the result always
/// fits the usable area while keeping `width / height == aspect_ratio`.
///
/// `aspect_ratio` must be positive and finite.
#[must_use]
pub fn compute_frame(aspect_ratio: f32, container: Size, limits: FrameLimits) -> Size {
    let max_w = (container.width - 2.0 * limits.inset)
        .min(limits.max_width)
        .max(0.0);
    let max_h = (container.height - 2.0 * limits.inset)
        .min(limits.max_height)
        .max(0.0);

    if aspect_ratio >= 1.0 {
        let width = max_w.min(max_h * aspect_ratio);
        Size::new(width, width / aspect_ratio)
    } else {
        let height = max_h.min(max_w / aspect_ratio);
        Size::new(height * aspect_ratio, height)
    }
}

/// Places a frame of the given size at the center of the container.
#[must_use]
pub fn frame_rect(frame: Size, container: Size) -> Rectangle {
    Rectangle::new(
        Point::new(
            (container.width - frame.width) / 2.0,
            (container.height - frame.height) / 2.0,
        ),
        frame,
    )
}
