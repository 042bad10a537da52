// SPDX-License-Identifier: MPL-2.0
//! Preview painting and commit rasterization.
//!
//! Drawing goes through the [`Surface`] trait so the same composition runs on
//! any backend. The tiny-skia implementation lives in [`super::raster`].

use super::transform::TransformState;
use crate::error::Result;
use crate::media::export::CropResult;
use crate::media::SourceImage;
use iced::{Color, Point, Rectangle, Size, Vector};

/// Uniform scale followed by a translation, mapping image pixels to surface
/// pixels: `p' = p * scale + translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageTransform {
    pub scale: f32,
    pub translation: Vector,
}

impl ImageTransform {
    /// Places the image so that its center lands at `anchor + offset`.
    #[must_use]
    pub fn centered(anchor: Point, image: Size, scale: f32, offset: Vector) -> Self {
        let image_center = Vector::new(image.width / 2.0, image.height / 2.0);
        Self {
            scale,
            translation: Vector::new(anchor.x, anchor.y) - image_center * scale + offset,
        }
    }

    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        Point::new(
            point.x * self.scale + self.translation.x,
            point.y * self.scale + self.translation.y,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

/// Minimal 2D drawing capability used by the compositor.
pub trait Surface {
    /// Size in device pixels.
    fn size(&self) -> Size<u32>;

    /// Resets every pixel to transparent.
    fn clear(&mut self);

    /// Fills the whole surface, honoring the current clip.
    fn fill(&mut self, color: Color);

    /// Restricts subsequent drawing to `rect`.
    fn clip_rect(&mut self, rect: Rectangle);

    fn reset_clip(&mut self);

    fn draw_image(&mut self, image: &SourceImage, transform: ImageTransform);

    fn stroke_rect(&mut self, rect: Rectangle, style: StrokeStyle);

    fn stroke_lines(&mut self, lines: &[(Point, Point)], style: StrokeStyle);

    /// Flattens the surface and encodes it as JPEG.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Encode`] if encoding fails.
    fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>>;
}

/// Colors and strokes of the preview chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewStyle {
    pub backdrop: Color,
    pub border: StrokeStyle,
    pub guides: StrokeStyle,
}

/// Everything the preview needs to draw one state.
#[derive(Debug, Clone, Copy)]
pub struct PreviewScene<'a> {
    pub image: Option<&'a SourceImage>,
    /// Frame rectangle in surface coordinates.
    pub frame: Rectangle,
    pub transform: Option<TransformState>,
}

/// Paints the interactive preview.
///
/// Repainting the same scene yields the same pixels.
pub fn paint_preview<S: Surface + ?Sized>(
    surface: &mut S,
    scene: &PreviewScene<'_>,
    style: &PreviewStyle,
) {
    surface.clear();
    surface.fill(style.backdrop);

    if let (Some(image), Some(transform)) = (scene.image, scene.transform) {
        surface.clip_rect(scene.frame);
        surface.draw_image(
            image,
            ImageTransform::centered(
                scene.frame.center(),
                image.size(),
                transform.scale,
                transform.offset,
            ),
        );
        surface.reset_clip();
    }

    surface.stroke_rect(scene.frame, style.border);
    surface.stroke_lines(&thirds_guides(scene.frame), style.guides);
}

/// Two vertical and two horizontal lines splitting `frame` into thirds.
#[must_use]
pub fn thirds_guides(frame: Rectangle) -> [(Point, Point); 4] {
    let third_w = frame.width / 3.0;
    let third_h = frame.height / 3.0;
    let right = frame.x + frame.width;
    let bottom = frame.y + frame.height;

    [
        (
            Point::new(frame.x + third_w, frame.y),
            Point::new(frame.x + third_w, bottom),
        ),
        (
            Point::new(frame.x + 2.0 * third_w, frame.y),
            Point::new(frame.x + 2.0 * third_w, bottom),
        ),
        (
            Point::new(frame.x, frame.y + third_h),
            Point::new(right, frame.y + third_h),
        ),
        (
            Point::new(frame.x, frame.y + 2.0 * third_h),
            Point::new(right, frame.y + 2.0 * third_h),
        ),
    ]
}

/// Pixel size of the exported crop: the frame times `upscale`, at least 1×1.
#[must_use]
pub fn export_size(frame: Size, upscale: f32) -> Size<u32> {
    let side = |v: f32| (v * upscale).round().max(1.0) as u32;
    Size::new(side(frame.width), side(frame.height))
}

/// Draws the crop onto an export surface sized [`export_size`].
///
/// The composition matches the preview inside the frame, scaled so that the
/// frame maps onto the whole surface.
pub fn rasterize_crop<S: Surface + ?Sized>(
    surface: &mut S,
    image: &SourceImage,
    frame: Size,
    transform: TransformState,
) {
    let out = surface.size();
    let out_w = out.width as f32;
    let upscale = if frame.width > 0.0 { out_w / frame.width } else { 1.0 };
    let center = Point::new(out_w / 2.0, out.height as f32 / 2.0);

    surface.clear();
    surface.draw_image(
        image,
        ImageTransform::centered(
            center,
            image.size(),
            transform.scale * upscale,
            transform.offset * upscale,
        ),
    );
}

/// Rasterizes, encodes and wraps the crop in a JPEG data URI.
///
/// # Errors
///
/// Propagates encoding failures from the surface.
pub fn commit_crop<S: Surface + ?Sized>(
    surface: &mut S,
    image: &SourceImage,
    frame: Size,
    transform: TransformState,
    quality: u8,
) -> Result<CropResult> {
    rasterize_crop(surface, image, frame, transform);
    let jpeg = surface.encode_jpeg(quality)?;
    let size = surface.size();
    Ok(CropResult::from_jpeg(size.width, size.height, jpeg))
}
