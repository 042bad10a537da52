// SPDX-License-Identifier: MPL-2.0
//! JPEG encoding and data-URI serialization of the committed crop.

use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::ExtendedColorType;

/// Prefix of every crop payload.
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// Output of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropResult {
    pub width: u32,
    pub height: u32,
    /// Encoded JPEG bytes.
    pub jpeg: Vec<u8>,
    /// `data:image/jpeg;base64,...` payload handed to the host.
    pub data_uri: String,
}

impl CropResult {
    #[must_use]
    pub fn from_jpeg(width: u32, height: u32, jpeg: Vec<u8>) -> Self {
        let data_uri = jpeg_data_uri(&jpeg);
        Self {
            width,
            height,
            jpeg,
            data_uri,
        }
    }
}

/// Encodes packed RGB bytes as a baseline JPEG.
///
/// `quality` is clamped to `1..=100`.
///
/// # Errors
///
/// Returns [`Error::Encode`] if the buffer does not match the dimensions or
/// the encoder fails.
pub fn encode_jpeg(width: u32, height: u32, rgb: &[u8], quality: u8) -> Result<Vec<u8>> {
    let expected = width as usize * height as usize * 3;
    if rgb.len() != expected || width == 0 || height == 0 {
        return Err(Error::Encode(format!(
            "invalid RGB buffer for {width}x{height}: {} bytes",
            rgb.len()
        )));
    }

    let mut out = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
    encoder
        .encode(rgb, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(out)
}

/// Wraps JPEG bytes in a base64 data URI.
#[must_use]
pub fn jpeg_data_uri(jpeg: &[u8]) -> String {
    let mut uri = String::with_capacity(JPEG_DATA_URI_PREFIX.len() + jpeg.len() * 4 / 3 + 4);
    uri.push_str(JPEG_DATA_URI_PREFIX);
    STANDARD.encode_string(jpeg, &mut uri);
    uri
}

/// Extracts the JPEG bytes from a payload produced by [`jpeg_data_uri`].
///
/// # Errors
///
/// Returns [`Error::InvalidSource`] if the prefix is missing or the payload
/// is not valid base64.
pub fn decode_jpeg_data_uri(uri: &str) -> Result<Vec<u8>> {
    let payload = uri
        .strip_prefix(JPEG_DATA_URI_PREFIX)
        .ok_or_else(|| Error::InvalidSource("not a JPEG data URI".into()))?;
    Ok(STANDARD.decode(payload)?)
}
