// SPDX-License-Identifier: MPL-2.0
//! Crop dialog message/event types re-exported by the facade.

use crate::crop::PointerInput;
use crate::error::Error;
use crate::media::export::CropResult;
use crate::media::SourceImage;
use iced::Size;

/// Toolbar button messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarMessage {
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Apply,
    Cancel,
}

/// Crop surface interaction messages.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasMessage {
    /// The crop surface was laid out with a new size.
    Resized(Size),
    Pointer(PointerInput),
    /// One wheel tick; positive zooms in.
    Wheel(f32),
}

/// Messages emitted directly by the dialog widgets and tasks.
#[derive(Debug, Clone)]
pub enum Message {
    Toolbar(ToolbarMessage),
    Canvas(CanvasMessage),
    /// Result of an asynchronous image load.
    ImageLoaded {
        generation: u64,
        result: Result<SourceImage, Error>,
    },
}

impl From<ToolbarMessage> for Message {
    fn from(message: ToolbarMessage) -> Self {
        Message::Toolbar(message)
    }
}

impl From<CanvasMessage> for Message {
    fn from(message: CanvasMessage) -> Self {
        Message::Canvas(message)
    }
}

/// Events propagated to the host application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The user committed the crop.
    Cropped(CropResult),
    /// The user dismissed the dialog without cropping.
    Cancelled,
    /// Rendering or encoding the committed crop failed.
    CropFailed(Error),
}
