// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the crop dialog.

use crate::crop::{PreviewStyle, StrokeStyle};
use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, GRAY_900, WHITE},
    sizing,
};
use iced::widget::container;
use iced::{Color, Theme};

/// Standard color for error text.
pub fn error_text_color() -> Color {
    palette::ERROR_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Color of the darkened backdrop around the crop frame.
pub fn crop_backdrop_color() -> Color {
    Color {
        a: opacity::BACKDROP,
        ..BLACK
    }
}

/// Color of the crop frame border.
pub fn crop_border_color() -> Color {
    WHITE
}

/// Color of the rule-of-thirds guides, kept faint so they do not compete
/// with the image.
pub fn crop_guide_color() -> Color {
    Color {
        a: opacity::GUIDE,
        ..WHITE
    }
}

/// Complete chrome style used by the preview compositor.
pub fn crop_preview_style() -> PreviewStyle {
    PreviewStyle {
        backdrop: crop_backdrop_color(),
        border: StrokeStyle {
            color: crop_border_color(),
            width: sizing::CROP_BORDER_WIDTH,
        },
        guides: StrokeStyle {
            color: crop_guide_color(),
            width: sizing::CROP_GUIDE_WIDTH,
        },
    }
}

/// Style for the crop surface behind the preview.
pub fn crop_surface_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(GRAY_900)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guides_are_fainter_than_border() {
        assert!(crop_guide_color().a < crop_border_color().a);
        assert_eq!(crop_guide_color().a, opacity::GUIDE);
        let style = crop_preview_style();
        assert!(style.guides.width < style.border.width);
        assert!(style.backdrop.a > 0.0 && style.backdrop.a < 1.0);
    }
}
