// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard shortcuts are routed to the crop dialog toolbar. Pointer input is
//! handled by the dialog's own canvas and never goes through here.

use super::Message;
use crate::ui::crop_dialog::{self, ToolbarMessage};
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Subscription};

/// Creates the keyboard shortcut subscription.
///
/// Events already captured by a widget are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if matches!(status, event::Status::Captured) {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                shortcut(&key, modifiers)
                    .map(|msg| Message::Dialog(crop_dialog::Message::Toolbar(msg)))
            }
            _ => None,
        }
    })
}

/// Maps a key press to a toolbar action.
pub(crate) fn shortcut(key: &Key, modifiers: Modifiers) -> Option<ToolbarMessage> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }
    match key {
        Key::Named(Named::Escape) => Some(ToolbarMessage::Cancel),
        Key::Named(Named::Enter) => Some(ToolbarMessage::Apply),
        Key::Character(c) => match c.as_str() {
            "+" | "=" => Some(ToolbarMessage::ZoomIn),
            "-" => Some(ToolbarMessage::ZoomOut),
            "0" => Some(ToolbarMessage::ResetZoom),
            _ => None,
        },
        _ => None,
    }
}
