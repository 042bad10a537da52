// SPDX-License-Identifier: MPL-2.0
//! Crop dialog view composition.

use super::{CropOverlay, LoadStatus, Message, State, ToolbarMessage};
use crate::crop::DragPhase;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{styles, theme};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, Canvas, Column, Row, Space, Stack, Text};
use iced::{Alignment, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let title = Text::new(ctx.i18n.tr("crop-dialog-title")).size(typography::TITLE_SM);
        let hint = Text::new(ctx.i18n.tr("crop-dialog-hint"))
            .size(typography::CAPTION)
            .color(theme::muted_text_color());

        Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(title)
            .push(self.crop_surface(&ctx))
            .push(hint)
            .push(self.toolbar(&ctx))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn crop_surface<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

        if let Some(handle) = &self.preview {
            stack = stack.push(
                image(handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::None),
            );
        }

        if let Some(placeholder) = placeholder_text(&self.status, ctx.i18n) {
            stack = stack.push(
                container(placeholder)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(Horizontal::Center)
                    .align_y(Vertical::Center),
            );
        }

        let overlay = CropOverlay {
            frame: self.controller.frame_rect(),
            dragging: matches!(self.controller.phase(), DragPhase::Dragging(_)),
            interactive: self.controller.is_ready(),
        };
        stack = stack.push(Canvas::new(overlay).width(Length::Fill).height(Length::Fill));

        container(stack)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::crop_surface_style)
            .into()
    }

    fn toolbar<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let controller = &self.controller;

        let zoom_out = button(Text::new("−").size(typography::BODY))
            .width(Length::Fixed(sizing::ZOOM_BUTTON_WIDTH))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::secondary)
            .on_press_maybe(
                controller
                    .can_zoom_out()
                    .then_some(Message::Toolbar(ToolbarMessage::ZoomOut)),
            );
        let zoom_in = button(Text::new("+").size(typography::BODY))
            .width(Length::Fixed(sizing::ZOOM_BUTTON_WIDTH))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(styles::button::secondary)
            .on_press_maybe(
                controller
                    .can_zoom_in()
                    .then_some(Message::Toolbar(ToolbarMessage::ZoomIn)),
            );

        let zoom_label = controller.zoom_percent().map_or_else(String::new, |percent| {
            ctx.i18n
                .tr_with_args("crop-dialog-zoom-label", &[("percent", &percent.to_string())])
        });
        let zoom_label = Text::new(zoom_label)
            .size(typography::BODY)
            .width(Length::Fixed(sizing::ZOOM_LABEL_WIDTH))
            .center();

        let reset = button(Text::new(ctx.i18n.tr("crop-dialog-reset")).size(typography::BODY))
            .style(styles::button::secondary)
            .on_press_maybe(
                controller
                    .is_ready()
                    .then_some(Message::Toolbar(ToolbarMessage::ResetZoom)),
            );

        let cancel = button(Text::new(ctx.i18n.tr("crop-dialog-cancel")).size(typography::BODY))
            .style(styles::button::secondary)
            .on_press(Message::Toolbar(ToolbarMessage::Cancel));

        let apply = button(Text::new(ctx.i18n.tr("crop-dialog-apply")).size(typography::BODY))
            .style(styles::button::primary)
            .on_press_maybe(
                self.can_commit()
                    .then_some(Message::Toolbar(ToolbarMessage::Apply)),
            );

        let row = Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(zoom_out)
            .push(zoom_label)
            .push(zoom_in)
            .push(reset)
            .push(Space::new().width(Length::Fill))
            .push(cancel)
            .push(apply);

        container(row)
            .width(Length::Fill)
            .padding(spacing::XS)
            .style(styles::container::toolbar)
            .into()
    }
}

fn placeholder_text<'a>(status: &LoadStatus, i18n: &I18n) -> Option<Text<'a>> {
    let text = match status {
        LoadStatus::Ready => return None,
        LoadStatus::Empty => Text::new(i18n.tr("crop-dialog-empty")),
        LoadStatus::Loading => Text::new(i18n.tr("crop-dialog-loading")),
        LoadStatus::Failed(err) => {
            Text::new(i18n.tr(err.i18n_key())).color(theme::error_text_color())
        }
    };
    Some(text.size(typography::BODY))
}
