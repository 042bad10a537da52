// SPDX-License-Identifier: MPL-2.0
//! CPU [`Surface`] backed by a `tiny_skia::Pixmap`.
//!
//! Used for both the on-screen preview (handed to Iced as an image handle)
//! and the exported crop.

use super::compositor::{ImageTransform, StrokeStyle, Surface};
use crate::error::{Error, Result};
use crate::media::export::encode_jpeg;
use crate::media::SourceImage;
use iced::widget::image;
use iced::{Color, Point, Rectangle, Size};
use tiny_skia::{
    FillRule, FilterQuality, Mask, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke,
    Transform,
};

/// Premultiplied RGBA drawing surface.
pub struct PixmapSurface {
    pixmap: Pixmap,
    clip: Option<Mask>,
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("clipped", &self.clip.is_some())
            .finish()
    }
}

impl PixmapSurface {
    /// Allocates a transparent surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encode`] if a dimension is zero or too large.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Encode(format!("cannot allocate {width}x{height} surface")))?;
        Ok(Self { pixmap, clip: None })
    }

    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight (demultiplied) RGBA bytes.
    #[must_use]
    pub fn to_rgba(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }

    /// Iced image handle of the current contents.
    #[must_use]
    pub fn to_handle(&self) -> image::Handle {
        image::Handle::from_rgba(self.pixmap.width(), self.pixmap.height(), self.to_rgba())
    }

    /// Packed RGB bytes, composited over black.
    ///
    /// Premultiplied channels already equal the color over black, so alpha
    /// is simply dropped.
    fn flattened_rgb(&self) -> Vec<u8> {
        self.pixmap
            .data()
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()
    }
}

fn paint_for(color: Color) -> Paint<'static> {
    let [r, g, b, a] = color.into_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn skia_rect(rect: Rectangle) -> Option<Rect> {
    Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}

impl Surface for PixmapSurface {
    fn size(&self) -> Size<u32> {
        Size::new(self.pixmap.width(), self.pixmap.height())
    }

    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn fill(&mut self, color: Color) {
        let Some(rect) = Rect::from_xywh(
            0.0,
            0.0,
            self.pixmap.width() as f32,
            self.pixmap.height() as f32,
        ) else {
            return;
        };
        self.pixmap.fill_rect(
            rect,
            &paint_for(color),
            Transform::identity(),
            self.clip.as_ref(),
        );
    }

    fn clip_rect(&mut self, rect: Rectangle) {
        let Some(mut mask) = Mask::new(self.pixmap.width(), self.pixmap.height()) else {
            return;
        };
        if let Some(rect) = skia_rect(rect) {
            let path = PathBuilder::from_rect(rect);
            mask.fill_path(&path, FillRule::Winding, false, Transform::identity());
        }
        // An empty rectangle leaves an empty mask: nothing is drawn.
        self.clip = Some(mask);
    }

    fn reset_clip(&mut self) {
        self.clip = None;
    }

    fn draw_image(&mut self, image: &SourceImage, transform: ImageTransform) {
        let paint = PixmapPaint {
            quality: FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        let transform = Transform::from_row(
            transform.scale,
            0.0,
            0.0,
            transform.scale,
            transform.translation.x,
            transform.translation.y,
        );
        self.pixmap.draw_pixmap(
            0,
            0,
            image.pixmap().as_ref(),
            &paint,
            transform,
            self.clip.as_ref(),
        );
    }

    fn stroke_rect(&mut self, rect: Rectangle, style: StrokeStyle) {
        let Some(rect) = skia_rect(rect) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let stroke = Stroke {
            width: style.width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint_for(style.color),
            &stroke,
            Transform::identity(),
            self.clip.as_ref(),
        );
    }

    fn stroke_lines(&mut self, lines: &[(Point, Point)], style: StrokeStyle) {
        let mut builder = PathBuilder::new();
        for (from, to) in lines {
            builder.move_to(from.x, from.y);
            builder.line_to(to.x, to.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };
        let stroke = Stroke {
            width: style.width,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint_for(style.color),
            &stroke,
            Transform::identity(),
            self.clip.as_ref(),
        );
    }

    fn encode_jpeg(&self, quality: u8) -> Result<Vec<u8>> {
        encode_jpeg(
            self.pixmap.width(),
            self.pixmap.height(),
            &self.flattened_rgb(),
            quality,
        )
    }
}
