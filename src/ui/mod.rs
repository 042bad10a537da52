// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`crop_dialog`] - The crop dialog: preview, input overlay and toolbar
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers

pub mod crop_dialog;
pub mod design_tokens;
pub mod styles;
pub mod theme;
