// SPDX-License-Identifier: MPL-2.0
//! Decoding of source images (PNG, JPEG, GIF, WebP, SVG, etc.) into a
//! premultiplied raster shared between preview and export.

use crate::error::{Error, Result};
use image_rs::GenericImageView;
use resvg::usvg;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::{ColorU8, Pixmap};

/// Decoded, immutable source image.
///
/// Pixels are premultiplied RGBA held in an `Arc`, so clones are cheap and
/// the compositor can draw from it without copying.
#[derive(Clone)]
pub struct SourceImage {
    pixmap: Arc<Pixmap>,
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl PartialEq for SourceImage {
    /// Two handles are equal when they share the same pixel buffer.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.pixmap, &other.pixmap)
    }
}

impl SourceImage {
    /// Creates a source image from straight (non-premultiplied) RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if a dimension is zero or the buffer length
    /// does not match `width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(Error::Decode(format!(
                "expected {expected} RGBA bytes for {width}x{height}, got {}",
                rgba.len()
            )));
        }
        let mut pixmap = Pixmap::new(width, height)
            .ok_or_else(|| Error::Decode(format!("invalid image size {width}x{height}")))?;

        for (dst, src) in pixmap.pixels_mut().iter_mut().zip(rgba.chunks_exact(4)) {
            *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
        }

        Ok(Self::from_pixmap(pixmap))
    }

    /// Wraps an already premultiplied pixmap.
    #[must_use]
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self {
            pixmap: Arc::new(pixmap),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Natural size as floating point, for geometry.
    #[must_use]
    pub fn size(&self) -> iced::Size {
        iced::Size::new(self.width() as f32, self.height() as f32)
    }

    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

/// Returns `true` if the bytes look like an SVG document.
#[must_use]
pub fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    text.starts_with("<svg") || (text.starts_with("<?xml") && text.contains("<svg"))
}

/// Decodes encoded image bytes.
///
/// `svg` forces the SVG path; otherwise the content is sniffed.
///
/// # Errors
///
/// Returns [`Error::Decode`] for unsupported or corrupt raster data and
/// [`Error::Svg`] for SVG parse failures or empty SVG dimensions.
pub fn decode_image(bytes: &[u8], svg: bool) -> Result<SourceImage> {
    if svg || looks_like_svg(bytes) {
        return rasterize_svg(bytes);
    }

    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    let rgba = img.to_rgba8();
    SourceImage::from_rgba(width, height, rgba.as_raw())
}

/// Load an image from a filesystem path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise the errors of
/// [`decode_image`].
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<SourceImage> {
    let path = path.as_ref();
    let is_svg = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    let bytes = fs::read(path)?;
    decode_image(&bytes, is_svg)
}

fn rasterize_svg(data: &[u8]) -> Result<SourceImage> {
    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Svg(e.to_string()))?;

    let pixmap_size = tree.size().to_int_size();
    let width = pixmap_size.width();
    let height = pixmap_size.height();
    if width == 0 || height == 0 {
        return Err(Error::Svg("SVG has empty dimensions".into()));
    }

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::Svg("Failed to allocate SVG pixmap".into()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    Ok(SourceImage::from_pixmap(pixmap))
}
