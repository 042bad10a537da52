// SPDX-License-Identifier: MPL-2.0
//! Fixed-aspect-ratio crop engine.
//!
//! Pure geometry ([`frame`], [`transform`]), the drag state machine
//! ([`interaction`]), the stateful [`controller`] that ties them together, and
//! the [`compositor`] with its tiny-skia backend ([`raster`]). Nothing here
//! depends on widgets; the dialog in `ui::crop_dialog` drives it.

pub mod compositor;
pub mod controller;
pub mod frame;
pub mod interaction;
pub mod raster;
pub mod settings;
pub mod transform;

pub use compositor::{
    commit_crop, export_size, paint_preview, ImageTransform, PreviewScene, PreviewStyle,
    StrokeStyle, Surface,
};
pub use controller::CropController;
pub use frame::{compute_frame, frame_rect};
pub use interaction::{DragPhase, DragSession, PointerInput};
pub use raster::PixmapSurface;
pub use settings::{CropSettings, FrameLimits, ScaleLimits};
pub use transform::{clamp_offset, initial_scale, TransformState};

use crate::error::Result;
use crate::media::export::CropResult;
use crate::media::SourceImage;

/// Renders the committed crop at `frame × export_upscale` and encodes it.
///
/// Returns `Ok(None)` when there is nothing to crop yet (no image, or the
/// frame has not been laid out).
///
/// # Errors
///
/// Returns [`crate::error::Error::Encode`] if the surface cannot be
/// allocated or JPEG encoding fails.
pub fn commit(
    controller: &CropController,
    image: Option<&SourceImage>,
) -> Result<Option<CropResult>> {
    let (Some(image), Some(transform)) = (image, controller.transform()) else {
        return Ok(None);
    };
    let frame = controller.frame();
    if frame.width <= 0.0 || frame.height <= 0.0 {
        return Ok(None);
    }

    let settings = controller.settings();
    let size = export_size(frame, settings.export_upscale);
    let mut surface = PixmapSurface::new(size.width, size.height)?;
    let result = commit_crop(
        &mut surface,
        image,
        frame,
        transform,
        settings.jpeg_quality,
    )?;
    log::debug!(
        "Rasterized crop {}x{} ({} bytes)",
        result.width,
        result.height,
        result.jpeg.len()
    );
    Ok(Some(result))
}
