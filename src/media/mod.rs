// SPDX-License-Identifier: MPL-2.0
//! Source image loading and crop export.
//!
//! - [`source`] resolves a URL or path and fetches the bytes
//! - [`image`] decodes raster and SVG data into a [`SourceImage`]
//! - [`export`] encodes the committed crop as a JPEG data URI

pub mod export;
pub mod image;
pub mod source;

pub use export::CropResult;
pub use image::{decode_image, load_image, SourceImage};
pub use source::{load_source, ImageSource};
