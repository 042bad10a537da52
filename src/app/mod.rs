// SPDX-License-Identifier: MPL-2.0
//! Application root hosting the crop dialog.
//!
//! The `App` struct wires the dialog to localization and configuration, and
//! turns the dialog's events into side effects: writing the cropped JPEG
//! (or printing its data URI) and closing the window.

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::Result;
use crate::i18n::fluent::I18n;
use crate::media::CropResult;
use crate::ui::crop_dialog::{self, Event as DialogEvent, ViewContext};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::{styles, theme};
use iced::widget::{container, Column, Text};
use iced::{window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    dialog: crop_dialog::State,
    /// Destination for the committed JPEG; stdout receives the data URI when unset.
    output: Option<PathBuf>,
    /// i18n key of a message shown above the dialog.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("dialog", &self.dialog)
            .field("output", &self.output)
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 780;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 420;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_else(|| {
            log::warn!("Boot function called more than once, using default flags");
            Flags::default()
        });
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and starts loading the requested image.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        Self::with_config(flags, &config, config_warning)
    }

    /// Builds the application from an already loaded configuration.
    fn with_config(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), config);
        let settings = config.crop.resolve();
        log::debug!("Crop settings: {settings:?}");

        let mut dialog = crop_dialog::State::new(settings, flags.aspect_ratio);
        let task = match flags.image_url {
            Some(url) => dialog.load(url).map(Message::Dialog),
            None => {
                log::warn!("No image given, the crop dialog starts empty");
                Task::none()
            }
        };

        let app = App {
            i18n,
            dialog,
            output: flags.output,
            notice: config_warning,
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Dialog(msg) => match self.dialog.update(msg) {
                DialogEvent::None => Task::none(),
                DialogEvent::Cropped(result) => {
                    match deliver(&result, self.output.as_deref()) {
                        Ok(()) => iced::exit(),
                        Err(err) => {
                            log::error!("Failed to write cropped image: {err}");
                            self.notice = Some("error-write-output".to_string());
                            Task::none()
                        }
                    }
                }
                DialogEvent::Cancelled => iced::exit(),
                DialogEvent::CropFailed(err) => {
                    self.notice = Some(err.i18n_key().to_string());
                    Task::none()
                }
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let dialog = self
            .dialog
            .view(ViewContext { i18n: &self.i18n })
            .map(Message::Dialog);

        let mut content = Column::new().width(Length::Fill).height(Length::Fill);
        if let Some(key) = &self.notice {
            content = content.push(
                container(
                    Text::new(self.i18n.tr(key))
                        .size(typography::BODY)
                        .color(theme::error_text_color()),
                )
                .padding(spacing::XS),
            );
        }
        content = content.push(dialog);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::SM)
            .style(styles::container::panel)
            .into()
    }
}

/// Hands the committed crop to its destination.
///
/// With a path the raw JPEG bytes are written there; otherwise the data URI
/// is printed on stdout followed by a newline.
///
/// # Errors
///
/// Returns [`crate::error::Error::Io`] when the file or stdout cannot be written.
pub fn deliver(result: &CropResult, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, &result.jpeg)?;
            log::info!(
                "Wrote {}x{} crop to {}",
                result.width,
                result.height,
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", result.data_uri)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;
    use crate::media::export::encode_jpeg;
    use crate::ui::crop_dialog::LoadStatus;
    use tempfile::tempdir;

    fn sample_result() -> CropResult {
        let rgb = vec![200u8; 4 * 4 * 3];
        let jpeg = encode_jpeg(4, 4, &rgb, 90).expect("encodes");
        CropResult::from_jpeg(4, 4, jpeg)
    }

    #[test]
    fn deliver_writes_jpeg_bytes_to_output() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("crop.jpg");
        let result = sample_result();

        deliver(&result, Some(&path)).expect("written");
        assert_eq!(std::fs::read(&path).expect("readable"), result.jpeg);
    }

    #[test]
    fn deliver_into_missing_directory_fails() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("crop.jpg");
        assert!(deliver(&sample_result(), Some(&path)).is_err());
    }

    #[test]
    fn flags_reach_the_dialog() {
        let flags = Flags {
            aspect_ratio: 1.5,
            image_url: Some("ring.png".into()),
            output: Some(PathBuf::from("out.jpg")),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, &Config::default(), None);

        assert_eq!(app.dialog.controller().aspect_ratio(), 1.5);
        assert!(matches!(app.dialog.status(), LoadStatus::Loading));
        assert_eq!(app.output.as_deref(), Some(Path::new("out.jpg")));
        assert!(app.notice.is_none());
    }

    #[test]
    fn no_image_leaves_dialog_empty() {
        let (app, _task) = App::with_config(Flags::default(), &Config::default(), None);
        assert!(matches!(app.dialog.status(), LoadStatus::Empty));
    }

    #[test]
    fn config_warning_becomes_notice() {
        let (app, _task) = App::with_config(
            Flags::default(),
            &Config::default(),
            Some("notification-config-load-error".into()),
        );
        assert_eq!(app.notice.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn title_follows_language() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".into()),
            },
            ..Config::default()
        };
        let (app, _task) = App::with_config(Flags::default(), &config, None);
        assert_eq!(app.title(), app.i18n.tr("window-title"));
        assert_eq!(app.i18n.current_locale().to_string(), "fr");
    }
}
