// SPDX-License-Identifier: MPL-2.0
//! Fixed-ratio crop dialog.
//!
//! This module follows a "state down, messages up" pattern: the host owns a
//! [`State`], forwards [`Message`]s to [`State::update`] and reacts to the
//! returned [`Event`]. `Event::Cropped` and `Event::Cancelled` are the only
//! ways the dialog talks back.

use crate::crop::{self, CropController, CropSettings, PixmapSurface, PreviewScene};
use crate::error::Error;
use crate::media::{load_source, SourceImage};
use crate::ui::theme;
use iced::widget::image;
use iced::Task;

mod messages;
mod overlay;
mod view;

pub use messages::{CanvasMessage, Event, Message, ToolbarMessage};
pub use overlay::CropOverlay;
pub use view::ViewContext;

/// Progress of the current image load.
#[derive(Debug, Clone)]
pub enum LoadStatus {
    /// No image requested yet.
    Empty,
    Loading,
    Ready,
    Failed(Error),
}

/// Local UI state for the crop dialog.
#[derive(Clone)]
pub struct State {
    controller: CropController,
    image: Option<SourceImage>,
    status: LoadStatus,
    /// Incremented on every load request; older results are discarded.
    generation: u64,
    /// Composited preview sized to the crop surface.
    preview: Option<image::Handle>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("controller", &self.controller)
            .field("image", &self.image)
            .field("status", &self.status)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl State {
    /// Creates an empty dialog for the given target aspect ratio.
    #[must_use]
    pub fn new(settings: CropSettings, aspect_ratio: f32) -> Self {
        Self {
            controller: CropController::new(settings, aspect_ratio),
            image: None,
            status: LoadStatus::Empty,
            generation: 0,
            preview: None,
        }
    }

    /// Starts loading `url`, replacing any current image.
    ///
    /// A result from an earlier call that arrives later is ignored.
    pub fn load(&mut self, url: String) -> Task<Message> {
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;

        self.image = None;
        self.controller.clear_image();
        self.status = LoadStatus::Loading;
        self.refresh_preview();

        log::info!("Loading crop source {}", redact(&url));
        Task::perform(load_source(url), move |result| Message::ImageLoaded {
            generation,
            result,
        })
    }

    /// Changes the target aspect ratio.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        if self.controller.set_aspect_ratio(aspect_ratio) {
            self.refresh_preview();
        }
    }

    #[must_use]
    pub fn controller(&self) -> &CropController {
        &self.controller
    }

    #[must_use]
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn preview(&self) -> Option<&image::Handle> {
        self.preview.as_ref()
    }

    /// Whether the commit button is enabled.
    #[must_use]
    pub fn can_commit(&self) -> bool {
        self.image.is_some() && self.controller.is_ready()
    }

    /// Update the state and emit an [`Event`] for the host when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ImageLoaded { generation, result } => {
                self.handle_image_loaded(generation, result);
                Event::None
            }
            Message::Canvas(msg) => {
                self.handle_canvas_message(msg);
                Event::None
            }
            Message::Toolbar(msg) => self.handle_toolbar_message(msg),
        }
    }

    fn handle_image_loaded(&mut self, generation: u64, result: Result<SourceImage, Error>) {
        if generation != self.generation {
            log::debug!(
                "Dropping stale load result (generation {generation}, current {})",
                self.generation
            );
            return;
        }

        match result {
            Ok(image) => {
                log::info!("Loaded {}x{} source image", image.width(), image.height());
                self.controller.set_image(image.size());
                self.image = Some(image);
                self.status = LoadStatus::Ready;
            }
            Err(err) => {
                log::warn!("Failed to load crop source: {err}");
                self.controller.clear_image();
                self.image = None;
                self.status = LoadStatus::Failed(err);
            }
        }
        self.refresh_preview();
    }

    fn handle_canvas_message(&mut self, message: CanvasMessage) {
        let changed = match message {
            CanvasMessage::Resized(size) => {
                let container_changed = self.controller.container() != size;
                let _ = self.controller.set_container(size);
                container_changed
            }
            CanvasMessage::Pointer(input) => self.controller.apply_pointer(input),
            CanvasMessage::Wheel(delta) => self.controller.wheel(delta),
        };
        if changed {
            self.refresh_preview();
        }
    }

    fn handle_toolbar_message(&mut self, message: ToolbarMessage) -> Event {
        let changed = match message {
            ToolbarMessage::ZoomIn => self.controller.zoom_in(),
            ToolbarMessage::ZoomOut => self.controller.zoom_out(),
            ToolbarMessage::ResetZoom => self.controller.reset(),
            ToolbarMessage::Apply => return self.commit(),
            ToolbarMessage::Cancel => {
                log::info!("Crop cancelled");
                return Event::Cancelled;
            }
        };
        if changed {
            self.refresh_preview();
        }
        Event::None
    }

    fn commit(&self) -> Event {
        match crop::commit(&self.controller, self.image.as_ref()) {
            Ok(Some(result)) => {
                log::info!("Crop committed at {}x{}", result.width, result.height);
                Event::Cropped(result)
            }
            Ok(None) => {
                log::debug!("Commit ignored: no image loaded");
                Event::None
            }
            Err(err) => {
                log::error!("Failed to export crop: {err}");
                Event::CropFailed(err)
            }
        }
    }

    /// Re-renders the preview for the current state.
    fn refresh_preview(&mut self) {
        let container = self.controller.container();
        let width = container.width.round();
        let height = container.height.round();
        if width < 1.0 || height < 1.0 {
            self.preview = None;
            return;
        }

        let mut surface = match PixmapSurface::new(width as u32, height as u32) {
            Ok(surface) => surface,
            Err(err) => {
                log::warn!("Cannot allocate crop preview: {err}");
                self.preview = None;
                return;
            }
        };
        let scene = PreviewScene {
            image: self.image.as_ref(),
            frame: self.controller.frame_rect(),
            transform: self.controller.transform(),
        };
        crop::paint_preview(&mut surface, &scene, &theme::crop_preview_style());
        self.preview = Some(surface.to_handle());
    }
}

/// Shortens `data:` URLs so logs do not fill up with base64.
fn redact(url: &str) -> &str {
    if url.len() > 64 && url.starts_with("data:") {
        url.split_once(',').map_or(url, |(meta, _)| meta)
    } else {
        url
    }
}

#[cfg(test)]
mod tests;
