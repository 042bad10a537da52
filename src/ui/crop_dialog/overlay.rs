// SPDX-License-Identifier: MPL-2.0
//! Input layer stacked above the crop preview.
//!
//! The preview itself is a pre-rendered image; this canvas only turns mouse,
//! touch and wheel events into [`CanvasMessage`]s and reports its own size.

use super::CanvasMessage;
use crate::crop::PointerInput;
use iced::mouse::{self, ScrollDelta};
use iced::touch::{self, Finger};
use iced::widget::canvas::{self, Geometry};
use iced::widget::Action;
use iced::{Point, Rectangle, Renderer, Size, Theme};
use std::collections::HashSet;

/// Canvas program used to capture crop interactions.
pub struct CropOverlay {
    /// Crop frame in canvas coordinates.
    pub frame: Rectangle,
    pub dragging: bool,
    /// False while no image is loaded.
    pub interactive: bool,
}

/// Widget-local input bookkeeping.
#[derive(Debug, Default)]
pub struct OverlayState {
    size: Option<Size>,
    mouse_down: bool,
    fingers: HashSet<Finger>,
}

/// A message to publish and whether the event must stop propagating.
#[derive(Debug, Clone, PartialEq)]
struct Translated {
    message: CanvasMessage,
    capture: bool,
}

impl Translated {
    fn captured(message: CanvasMessage) -> Option<Self> {
        Some(Self {
            message,
            capture: true,
        })
    }

    fn passed(message: CanvasMessage) -> Option<Self> {
        Some(Self {
            message,
            capture: false,
        })
    }
}

fn wheel_direction(delta: ScrollDelta) -> f32 {
    let y = match delta {
        ScrollDelta::Lines { y, .. } | ScrollDelta::Pixels { y, .. } => y,
    };
    if y > 0.0 {
        1.0
    } else if y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl CropOverlay {
    fn translate(
        &self,
        state: &mut OverlayState,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Translated> {
        if state.size != Some(bounds.size()) {
            state.size = Some(bounds.size());
            return Translated::passed(CanvasMessage::Resized(bounds.size()));
        }

        let origin = bounds.position();
        let local = |p: Point| Point::new(p.x - origin.x, p.y - origin.y);

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_in(bounds)?;
                state.mouse_down = true;
                Translated::captured(CanvasMessage::Pointer(PointerInput::Press {
                    position,
                    contacts: 1,
                }))
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) if state.mouse_down => {
                match cursor.position_in(bounds) {
                    Some(position) => Translated::captured(CanvasMessage::Pointer(
                        PointerInput::Move {
                            position,
                            contacts: 1,
                        },
                    )),
                    None => {
                        state.mouse_down = false;
                        Translated::passed(CanvasMessage::Pointer(PointerInput::Leave))
                    }
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
                if state.mouse_down =>
            {
                state.mouse_down = false;
                Translated::captured(CanvasMessage::Pointer(PointerInput::Release))
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) if state.mouse_down => {
                state.mouse_down = false;
                Translated::passed(CanvasMessage::Pointer(PointerInput::Leave))
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                // Captured even at the zoom limits so nothing underneath scrolls.
                cursor.position_in(bounds)?;
                Translated::captured(CanvasMessage::Wheel(wheel_direction(*delta)))
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(*position) {
                    return None;
                }
                state.fingers.insert(*id);
                Translated::captured(CanvasMessage::Pointer(PointerInput::Press {
                    position: local(*position),
                    contacts: state.fingers.len(),
                }))
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if !state.fingers.contains(id) {
                    return None;
                }
                Translated::captured(CanvasMessage::Pointer(PointerInput::Move {
                    position: local(*position),
                    contacts: state.fingers.len(),
                }))
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                if !state.fingers.remove(id) {
                    return None;
                }
                if state.fingers.is_empty() {
                    Translated::captured(CanvasMessage::Pointer(PointerInput::Release))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

impl<Message> canvas::Program<Message> for CropOverlay
where
    Message: From<CanvasMessage>,
{
    type State = OverlayState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let translated = self.translate(state, event, bounds, cursor)?;
        let action = Action::publish(Message::from(translated.message));
        Some(if translated.capture {
            action.and_capture()
        } else {
            action
        })
    }

    fn draw(
        &self,
        _state: &Self::State,
        _renderer: &Renderer,
        _theme: &Theme,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        Vec::new()
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !self.interactive {
            return mouse::Interaction::default();
        }
        if self.dragging {
            return mouse::Interaction::Grabbing;
        }
        match cursor.position_in(bounds) {
            Some(position) if self.frame.contains(position) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}
