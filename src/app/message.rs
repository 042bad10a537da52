// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags.

use crate::ui::crop_dialog;
use std::path::PathBuf;

/// Messages handled by [`super::App`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the crop dialog.
    Dialog(crop_dialog::Message),
}

impl From<crop_dialog::Message> for Message {
    fn from(message: crop_dialog::Message) -> Self {
        Message::Dialog(message)
    }
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Image to crop: a path, `file://`, `http(s)://` or `data:` URL.
    pub image_url: Option<String>,
    /// Target width / height of the cropped image.
    pub aspect_ratio: f32,
    /// Where to write the JPEG. The data URI goes to stdout when unset.
    pub output: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CROP_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            lang: None,
            image_url: None,
            aspect_ratio: 1.0,
            output: None,
            config_dir: None,
        }
    }
}
