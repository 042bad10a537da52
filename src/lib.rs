// SPDX-License-Identifier: MPL-2.0
//! `iced_crop` is a fixed-aspect image crop dialog built with the Iced GUI framework.
//!
//! The user pans and zooms a source image behind a fixed crop frame; committing
//! renders the framed region at twice its on-screen size and hands it back as a
//! JPEG data URI. The geometry and interaction logic in [`crop`] is toolkit
//! agnostic; [`ui::crop_dialog`] wires it into an Iced widget tree.

#![doc(html_root_url = "https://docs.rs/iced_crop/0.1.0")]

pub mod app;
pub mod config;
pub mod crop;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
