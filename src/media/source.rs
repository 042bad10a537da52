// SPDX-License-Identifier: MPL-2.0
//! Resolution of an image URL into a decoded [`SourceImage`].
//!
//! Accepted forms: plain filesystem paths, `file://` URLs, `http(s)://` URLs
//! and `data:` URLs with a base64 payload. Each load is a single attempt.

use super::image::{decode_image, load_image, SourceImage};
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::PathBuf;

const USER_AGENT: &str = concat!("IcedCrop/", env!("CARGO_PKG_VERSION"));
const MAX_REDIRECTS: usize = 10;

/// Where the image bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    Http(String),
    /// Inline payload of a `data:` URL, already base64-decoded.
    Data { mime: String, bytes: Vec<u8> },
}

impl ImageSource {
    /// Interprets a URL or path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSource`] for empty input, unknown schemes and
    /// malformed `data:` URLs.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::InvalidSource("empty image URL".into()));
        }

        if let Some(rest) = strip_prefix_ignore_case(raw, "data:") {
            return parse_data_url(rest);
        }
        if let Some(path) = strip_prefix_ignore_case(raw, "file://") {
            return Ok(Self::File(PathBuf::from(path)));
        }
        if strip_prefix_ignore_case(raw, "http://").is_some()
            || strip_prefix_ignore_case(raw, "https://").is_some()
        {
            return Ok(Self::Http(raw.to_string()));
        }

        // Anything else with a scheme (`ftp:`, `blob:`) is unsupported. A
        // single letter before the colon is a Windows drive, not a scheme.
        if let Some((scheme, _)) = raw.split_once("://") {
            if scheme.len() > 1 && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '+') {
                return Err(Error::InvalidSource(format!("unsupported scheme '{scheme}'")));
            }
        }

        Ok(Self::File(PathBuf::from(raw)))
    }

    fn is_svg_hint(&self) -> bool {
        match self {
            Self::File(path) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg")),
            Self::Http(url) => url
                .split(['?', '#'])
                .next()
                .is_some_and(|path| path.to_ascii_lowercase().ends_with(".svg")),
            Self::Data { mime, .. } => mime.eq_ignore_ascii_case("image/svg+xml"),
        }
    }
}

fn strip_prefix_ignore_case<'a>(raw: &'a str, prefix: &str) -> Option<&'a str> {
    raw.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &raw[prefix.len()..])
}

fn parse_data_url(rest: &str) -> Result<ImageSource> {
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| Error::InvalidSource("data URL without payload".into()))?;

    let mut parts = meta.split(';');
    let mime = parts.next().unwrap_or_default().trim().to_string();
    if !parts.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
        return Err(Error::InvalidSource(
            "only base64 data URLs are supported".into(),
        ));
    }

    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(ImageSource::Data { mime, bytes })
}

/// Loads and decodes the image behind `url`.
///
/// Decoding runs on the blocking pool so the UI thread never stalls on a
/// large image.
///
/// # Errors
///
/// Any [`Error`] from parsing, fetching or decoding. There is no retry.
pub async fn load_source(url: String) -> Result<SourceImage> {
    let source = ImageSource::parse(&url)?;
    let svg = source.is_svg_hint();

    match source {
        ImageSource::File(path) => run_blocking(move || load_image(path)).await,
        ImageSource::Http(url) => {
            let (bytes, svg_mime) = fetch(&url).await?;
            run_blocking(move || decode_image(&bytes, svg || svg_mime)).await
        }
        ImageSource::Data { bytes, .. } => run_blocking(move || decode_image(&bytes, svg)).await,
    }
}

async fn fetch(url: &str) -> Result<(Vec<u8>, bool)> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP status: {}", response.status())));
    }

    let svg_mime = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("image/svg+xml"));

    let bytes = response.bytes().await?;
    Ok((bytes.to_vec(), svg_mime))
}

async fn run_blocking<F>(job: F) -> Result<SourceImage>
where
    F: FnOnce() -> Result<SourceImage> + Send + 'static,
{
    tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| Error::Decode(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    #[test]
    fn parse_recognizes_schemes() {
        assert_eq!(
            ImageSource::parse("/tmp/ring.png").expect("path"),
            ImageSource::File(PathBuf::from("/tmp/ring.png"))
        );
        assert_eq!(
            ImageSource::parse("file:///tmp/ring.png").expect("file url"),
            ImageSource::File(PathBuf::from("/tmp/ring.png"))
        );
        assert_eq!(
            ImageSource::parse("HTTPS://cdn.example.com/ring.jpg").expect("https"),
            ImageSource::Http("HTTPS://cdn.example.com/ring.jpg".into())
        );
        assert_eq!(
            ImageSource::parse("C:\\images\\ring.png").expect("windows path"),
            ImageSource::File(PathBuf::from("C:\\images\\ring.png"))
        );
    }

    #[test]
    fn parse_rejects_bad_input() {
        for raw in ["", "   ", "ftp://example.com/a.png", "data:image/png,raw", "data:nope"] {
            assert!(
                matches!(ImageSource::parse(raw), Err(Error::InvalidSource(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_decodes_base64_payload() {
        let source = ImageSource::parse("data:image/svg+xml;base64,PHN2Zy8+").expect("data url");
        assert_eq!(
            source,
            ImageSource::Data {
                mime: "image/svg+xml".into(),
                bytes: b"<svg/>".to_vec(),
            }
        );
        assert!(source.is_svg_hint());
    }

    #[test]
    fn svg_hint_ignores_query_string() {
        let source = ImageSource::Http("https://example.com/logo.SVG?v=2".into());
        assert!(source.is_svg_hint());
        let source = ImageSource::Http("https://example.com/photo.jpg?format=svg".into());
        assert!(!source.is_svg_hint());
    }

    #[tokio::test]
    async fn load_source_reads_file_path() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("ring.png");
        std::fs::write(&path, png_bytes(8, 4)).expect("write png");

        let image = load_source(path.to_string_lossy().into_owned())
            .await
            .expect("png should load");
        assert_eq!((image.width(), image.height()), (8, 4));
    }

    #[tokio::test]
    async fn load_source_decodes_data_url() {
        let url = format!("data:image/png;base64,{}", STANDARD.encode(png_bytes(3, 5)));
        let image = load_source(url).await.expect("data url should load");
        assert_eq!((image.width(), image.height()), (3, 5));
    }

    #[tokio::test]
    async fn load_source_rasterizes_svg_data_url() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="12" height="6"><rect width="12" height="6"/></svg>"#;
        let url = format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg));
        let image = load_source(url).await.expect("svg should load");
        assert_eq!((image.width(), image.height()), (12, 6));
    }

    #[tokio::test]
    async fn load_source_reports_missing_file() {
        let dir = tempdir().expect("temp dir");
        let url = format!("file://{}", dir.path().join("missing.png").display());
        assert!(matches!(load_source(url).await, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn load_source_reports_corrupt_payload() {
        let url = format!("data:image/png;base64,{}", STANDARD.encode(b"garbage"));
        assert!(matches!(load_source(url).await, Err(Error::Decode(_))));
    }
}
