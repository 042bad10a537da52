// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the dialog widgets.

pub mod button;
pub mod container;
