// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Network(String),
    Decode(String),
    Svg(String),
    Encode(String),
    Config(String),
    /// The image URL could not be interpreted (unknown scheme, malformed data URI).
    InvalidSource(String),
}

impl Error {
    /// Returns the i18n message key shown in the crop surface placeholder.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-load-image-io",
            Error::Network(_) => "error-load-image-network",
            Error::Decode(_) | Error::Svg(_) => "error-load-image-decode",
            Error::Encode(_) => "error-export-encode",
            Error::Config(_) => "error-config",
            Error::InvalidSource(_) => "error-load-image-source",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Svg(e) => write!(f, "SVG Error: {}", e),
            Error::Encode(e) => write!(f, "Encode Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::InvalidSource(e) => write!(f, "Invalid Source: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        match err {
            image_rs::ImageError::IoError(io) => Error::Io(io.to_string()),
            other => Error::Decode(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::InvalidSource(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn image_io_error_maps_to_io_variant() {
        let image_error = image_rs::ImageError::IoError(std::io::Error::other("decode failed"));
        match Error::from(image_error) {
            Error::Io(message) => assert!(message.contains("decode failed")),
            other => panic!("expected Io variant, got {other:?}"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn decode_and_svg_share_placeholder_key() {
        assert_eq!(
            Error::Decode("x".into()).i18n_key(),
            Error::Svg("y".into()).i18n_key()
        );
        assert_eq!(
            Error::Network("timeout".into()).i18n_key(),
            "error-load-image-network"
        );
    }

    #[test]
    fn base64_error_is_invalid_source() {
        use base64::Engine;
        let err = base64::engine::general_purpose::STANDARD
            .decode("***")
            .expect_err("invalid base64");
        assert!(matches!(Error::from(err), Error::InvalidSource(_)));
    }
}
