// SPDX-License-Identifier: MPL-2.0
//! Pointer drag state machine.
//!
//! Input arrives as framework-neutral [`PointerInput`] values so the same
//! transitions serve mouse and touch. The canvas overlay translates Iced
//! events into these before they reach the controller.

use iced::{Point, Rectangle, Vector};

/// Framework-neutral pointer input.
///
/// `contacts` is the number of simultaneous touch points (always 1 for a
/// mouse).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Press { position: Point, contacts: usize },
    Move { position: Point, contacts: usize },
    Release,
    Leave,
}

/// Snapshot taken when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub origin_offset: Vector,
    pub origin_pointer: Point,
}

impl DragSession {
    /// Proposed (unclamped) offset for the current pointer position.
    ///
    /// The pointer displacement is divided by `scale` so that dragging feels
    /// the same at every zoom level.
    #[must_use]
    pub fn proposed_offset(&self, pointer: Point, scale: f32) -> Vector {
        let delta = pointer - self.origin_pointer;
        self.origin_offset + delta * (1.0 / scale)
    }
}

/// Drag phase of the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// What the controller must do after a pointer input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Nothing changes.
    Ignored,
    /// A drag started; the offset is unchanged.
    Started,
    /// Apply this proposed offset (still to be clamped).
    Moved(Vector),
    /// The drag ended; the last applied offset stays.
    Ended,
}

impl DragPhase {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Advances the state machine.
    ///
    /// `frame` is the crop frame in the same coordinate space as the pointer
    /// positions. Presses outside it and any multi-contact input are ignored.
    pub fn transition(
        &mut self,
        input: PointerInput,
        frame: Rectangle,
        offset: Vector,
        scale: f32,
    ) -> DragOutcome {
        match (*self, input) {
            (Self::Idle, PointerInput::Press { position, contacts }) => {
                if contacts != 1 || !frame.contains(position) {
                    return DragOutcome::Ignored;
                }
                *self = Self::Dragging(DragSession {
                    origin_offset: offset,
                    origin_pointer: position,
                });
                DragOutcome::Started
            }
            (Self::Dragging(session), PointerInput::Move { position, contacts }) => {
                if contacts != 1 {
                    return DragOutcome::Ignored;
                }
                DragOutcome::Moved(session.proposed_offset(position, scale))
            }
            (Self::Dragging(_), PointerInput::Release | PointerInput::Leave) => {
                *self = Self::Idle;
                DragOutcome::Ended
            }
            // A second finger landing mid-drag does not restart the drag.
            (Self::Dragging(_), PointerInput::Press { .. })
            | (Self::Idle, PointerInput::Move { .. })
            | (Self::Idle, PointerInput::Release | PointerInput::Leave) => DragOutcome::Ignored,
        }
    }
}
