// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::crop::{FrameLimits, PointerInput};
use crate::media::export::decode_jpeg_data_uri;
use crate::test_utils::assert_relative_eq;
use iced::{Point, Size};
use image_rs::GenericImageView;

fn settings() -> CropSettings {
    CropSettings {
        frame_limits: FrameLimits {
            inset: 0.0,
            ..FrameLimits::default()
        },
        ..CropSettings::default()
    }
}

fn test_image(width: u32, height: u32) -> SourceImage {
    let pixels = vec![180; (width * height * 4) as usize];
    SourceImage::from_rgba(width, height, &pixels).expect("valid buffer")
}

/// Dialog laid out at 800×600 with a 1000×500 image loaded.
fn loaded_state() -> State {
    let mut state = State::new(settings(), 1.0);
    let _ = state.update(Message::Canvas(CanvasMessage::Resized(Size::new(800.0, 600.0))));
    let _task = state.load("ring.png".into());
    let _ = state.update(Message::ImageLoaded {
        generation: 1,
        result: Ok(test_image(1000, 500)),
    });
    state
}

#[test]
fn new_dialog_is_empty_and_cannot_commit() {
    let state = State::new(settings(), 1.0);
    assert!(matches!(state.status(), LoadStatus::Empty));
    assert!(!state.can_commit());
    assert!(state.preview().is_none());
}

#[test]
fn commit_without_image_emits_nothing() {
    let mut state = State::new(settings(), 1.0);
    let _ = state.update(Message::Canvas(CanvasMessage::Resized(Size::new(800.0, 600.0))));

    let event = state.update(Message::Toolbar(ToolbarMessage::Apply));
    assert!(matches!(event, Event::None));
}

#[test]
fn commit_while_loading_emits_nothing() {
    let mut state = State::new(settings(), 1.0);
    let _ = state.update(Message::Canvas(CanvasMessage::Resized(Size::new(800.0, 600.0))));
    let _task = state.load("ring.png".into());

    assert!(matches!(state.status(), LoadStatus::Loading));
    assert!(matches!(
        state.update(Message::Toolbar(ToolbarMessage::Apply)),
        Event::None
    ));
}

#[test]
fn loaded_image_is_ready_with_covering_zoom() {
    let state = loaded_state();
    assert!(matches!(state.status(), LoadStatus::Ready));
    assert!(state.can_commit());
    assert!(state.preview().is_some());
    assert_eq!(state.controller().zoom_percent(), Some(132));
}

#[test]
fn stale_load_result_is_ignored() {
    let mut state = State::new(settings(), 1.0);
    let _ = state.update(Message::Canvas(CanvasMessage::Resized(Size::new(800.0, 600.0))));
    let _first = state.load("first.png".into());
    let _second = state.load("second.png".into());

    let _ = state.update(Message::ImageLoaded {
        generation: 1,
        result: Ok(test_image(40, 40)),
    });
    assert!(state.image().is_none());
    assert!(matches!(state.status(), LoadStatus::Loading));

    let _ = state.update(Message::ImageLoaded {
        generation: 2,
        result: Ok(test_image(60, 30)),
    });
    assert_eq!(state.image().map(SourceImage::width), Some(60));
}

#[test]
fn failed_load_shows_error_and_disables_commit() {
    let mut state = State::new(settings(), 1.0);
    let _task = state.load("missing.png".into());
    let _ = state.update(Message::ImageLoaded {
        generation: 1,
        result: Err(Error::Io("not found".into())),
    });

    assert!(matches!(state.status(), LoadStatus::Failed(Error::Io(_))));
    assert!(!state.can_commit());
    assert!(matches!(
        state.update(Message::Toolbar(ToolbarMessage::Apply)),
        Event::None
    ));
}

#[test]
fn drag_moves_offset() {
    let mut state = loaded_state();
    for input in [
        PointerInput::Press {
            position: Point::new(400.0, 300.0),
            contacts: 1,
        },
        PointerInput::Move {
            position: Point::new(450.0, 300.0),
            contacts: 1,
        },
        PointerInput::Release,
    ] {
        let _ = state.update(Message::Canvas(CanvasMessage::Pointer(input)));
    }

    let offset = state.controller().transform().expect("loaded").offset;
    assert_relative_eq!(offset.x, 50.0 / 1.32, epsilon = 1e-3);
}

#[test]
fn toolbar_and_wheel_zoom() {
    let mut state = loaded_state();
    let _ = state.update(Message::Toolbar(ToolbarMessage::ZoomIn));
    assert_eq!(state.controller().zoom_percent(), Some(142));

    let _ = state.update(Message::Canvas(CanvasMessage::Wheel(-1.0)));
    assert_eq!(state.controller().zoom_percent(), Some(137));

    let _ = state.update(Message::Toolbar(ToolbarMessage::ZoomOut));
    let _ = state.update(Message::Toolbar(ToolbarMessage::ResetZoom));
    assert_eq!(state.controller().zoom_percent(), Some(132));
}

#[test]
fn apply_emits_jpeg_at_twice_frame_size() {
    let mut state = loaded_state();
    let Event::Cropped(result) = state.update(Message::Toolbar(ToolbarMessage::Apply)) else {
        panic!("expected a cropped event");
    };

    assert_eq!((result.width, result.height), (1200, 1200));
    assert!(result.data_uri.starts_with("data:image/jpeg;base64,"));

    let jpeg = decode_jpeg_data_uri(&result.data_uri).expect("valid payload");
    let decoded = image_rs::load_from_memory(&jpeg).expect("valid jpeg");
    assert_eq!(decoded.dimensions(), (1200, 1200));
}

#[test]
fn cancel_emits_cancelled() {
    let mut state = loaded_state();
    assert!(matches!(
        state.update(Message::Toolbar(ToolbarMessage::Cancel)),
        Event::Cancelled
    ));
}

#[test]
fn resize_rerenders_preview_and_keeps_zoom() {
    let mut state = loaded_state();
    let _ = state.update(Message::Toolbar(ToolbarMessage::ZoomIn));
    let _ = state.update(Message::Canvas(CanvasMessage::Resized(Size::new(500.0, 400.0))));

    assert_eq!(state.controller().frame(), Size::new(400.0, 400.0));
    assert_eq!(state.controller().zoom_percent(), Some(142));
    assert!(state.preview().is_some());
}

#[test]
fn redact_shortens_long_data_urls() {
    let long = format!("data:image/png;base64,{}", "A".repeat(100));
    assert_eq!(redact(&long), "data:image/png;base64");
    assert_eq!(redact("https://example.com/a.png"), "https://example.com/a.png");
}
