// SPDX-License-Identifier: MPL-2.0
//! Crop controller: owns the frame, the transform and the drag phase.
//!
//! All mutations go through the methods below, and each one ends by clamping
//! the offset against the current frame and image. Nothing else writes to the
//! transform.

use super::frame::{compute_frame, frame_rect};
use super::interaction::{DragOutcome, DragPhase, PointerInput};
use super::transform::TransformState;
use super::{CropSettings, ScaleLimits};
use iced::{Rectangle, Size};

/// Interactive crop state for one dialog session.
#[derive(Debug, Clone)]
pub struct CropController {
    settings: CropSettings,
    aspect_ratio: f32,
    container: Size,
    frame: Size,
    image: Option<Size>,
    /// `None` until both an image and a non-empty frame are known.
    transform: Option<TransformState>,
    phase: DragPhase,
}

impl CropController {
    #[must_use]
    pub fn new(settings: CropSettings, aspect_ratio: f32) -> Self {
        Self {
            settings,
            aspect_ratio,
            container: Size::ZERO,
            frame: Size::ZERO,
            image: None,
            transform: None,
            phase: DragPhase::Idle,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &CropSettings {
        &self.settings
    }

    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Frame size in viewport pixels.
    #[must_use]
    pub fn frame(&self) -> Size {
        self.frame
    }

    /// Frame rectangle in container coordinates.
    #[must_use]
    pub fn frame_rect(&self) -> Rectangle {
        frame_rect(self.frame, self.container)
    }

    #[must_use]
    pub fn image_size(&self) -> Option<Size> {
        self.image
    }

    #[must_use]
    pub fn transform(&self) -> Option<TransformState> {
        self.transform
    }

    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// True once a crop can be produced.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.transform.is_some()
    }

    /// Current zoom as a rounded percentage, for the toolbar label.
    #[must_use]
    pub fn zoom_percent(&self) -> Option<u32> {
        self.transform
            .map(|t| (t.scale * 100.0).round().max(0.0) as u32)
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.transform
            .is_some_and(|t| t.scale < self.settings.scale_limits.max())
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.transform
            .is_some_and(|t| t.scale > self.settings.scale_limits.min())
    }

    /// Updates the container size. Returns `true` if the frame changed.
    pub fn set_container(&mut self, container: Size) -> bool {
        if container == self.container {
            return false;
        }
        self.container = container;
        self.refresh_frame()
    }

    /// Updates the target aspect ratio. Returns `true` if the frame changed.
    ///
    /// Non-positive or non-finite ratios are rejected.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> bool {
        if !(aspect_ratio.is_finite() && aspect_ratio > 0.0) {
            log::warn!("Ignoring invalid aspect ratio {aspect_ratio}");
            return false;
        }
        if aspect_ratio == self.aspect_ratio {
            return false;
        }
        self.aspect_ratio = aspect_ratio;
        self.refresh_frame()
    }

    /// Installs a newly decoded image and resets zoom and pan for it.
    pub fn set_image(&mut self, natural_size: Size) {
        self.image = Some(natural_size);
        self.phase = DragPhase::Idle;
        self.transform = None;
        self.ensure_transform();
    }

    /// Forgets the current image (load failure or source change).
    pub fn clear_image(&mut self) {
        self.image = None;
        self.transform = None;
        self.phase = DragPhase::Idle;
    }

    /// Feeds one pointer input through the drag state machine.
    ///
    /// Returns `true` if the offset changed. Input is ignored until an
    /// image is ready.
    pub fn apply_pointer(&mut self, input: PointerInput) -> bool {
        let (Some(transform), Some(image)) = (self.transform, self.image) else {
            return false;
        };
        let frame_rect = self.frame_rect();

        match self
            .phase
            .transition(input, frame_rect, transform.offset, transform.scale)
        {
            DragOutcome::Moved(proposed) => {
                let next = transform.with_offset(proposed, self.frame, image);
                self.transform = Some(next);
                log::trace!("drag offset {:?}", next.offset);
                next != transform
            }
            DragOutcome::Started | DragOutcome::Ended | DragOutcome::Ignored => false,
        }
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_by(self.settings.zoom_step)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_by(-self.settings.zoom_step)
    }

    /// Applies one wheel tick. A positive `delta` zooms in, a negative one
    /// zooms out, zero does nothing.
    pub fn wheel(&mut self, delta: f32) -> bool {
        if delta > 0.0 {
            self.zoom_by(self.settings.wheel_step)
        } else if delta < 0.0 {
            self.zoom_by(-self.settings.wheel_step)
        } else {
            false
        }
    }

    /// Restores the covering scale and centers the image.
    pub fn reset(&mut self) -> bool {
        let Some(image) = self.image else {
            return false;
        };
        if self.frame.width <= 0.0 || self.frame.height <= 0.0 {
            return false;
        }
        let previous = self.transform;
        // The covering scale may lie outside the zoom bounds (tiny or huge
        // images); coverage wins over the bounds here.
        self.transform = Some(TransformState::initial(
            self.frame,
            image,
            self.settings.coverage_margin,
        ));
        previous != self.transform
    }

    fn zoom_by(&mut self, step: f32) -> bool {
        let (Some(transform), Some(image)) = (self.transform, self.image) else {
            return false;
        };
        // Bounds widened to the current scale, so a step never moves the
        // scale against its direction.
        let limits = self.settings.scale_limits;
        let limits = ScaleLimits::new(
            limits.min().min(transform.scale),
            limits.max().max(transform.scale),
        );
        let next = transform.with_scale(transform.scale + step, limits, self.frame, image);
        self.transform = Some(next);
        next != transform
    }

    fn refresh_frame(&mut self) -> bool {
        let frame = compute_frame(
            self.aspect_ratio,
            self.container,
            self.settings.frame_limits,
        );
        if frame == self.frame {
            return false;
        }
        self.frame = frame;

        match (self.transform, self.image) {
            (Some(transform), Some(image)) => {
                self.transform = Some(transform.with_offset(transform.offset, frame, image));
            }
            _ => self.ensure_transform(),
        }
        true
    }

    fn ensure_transform(&mut self) {
        if self.transform.is_none() {
            let _ = self.reset();
        }
    }
}
