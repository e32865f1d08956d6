use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column, Space};
use iced::{Background, Border, Element, Length, Padding, Theme};

use crate::app::{App, Dialog, Message};
use crate::theme::colors;

impl App {
    pub fn view_dialog(&self, dialog: Dialog) -> Element<'_, Message> {
        let body = match dialog {
            Dialog::About => self.view_about(),
            Dialog::Shortcuts => self.view_shortcuts(),
        };

        let modal_content = column![
            body,
            Space::with_height(16),
            row![horizontal_space(), Self::close_button()],
        ]
        .padding(24)
        .width(Length::Fixed(380.0));

        container(container(modal_content).style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 8.0.into(),
            },
            ..Default::default()
        }))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn view_about(&self) -> Element<'_, Message> {
        column![
            text("Quill").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(4),
            text(format!("Version {}", env!("CARGO_PKG_VERSION")))
                .size(12)
                .color(colors::TEXT_MUTED),
            Space::with_height(12),
            text("A plain-text editor with line numbers, local save and open.")
                .size(13)
                .color(colors::TEXT_SECONDARY),
        ]
        .into()
    }

    fn view_shortcuts(&self) -> Element<'_, Message> {
        let rows: Vec<Element<'_, Message>> = self
            .keymap
            .bindings()
            .iter()
            .map(|binding| {
                row![
                    text(binding.command.display_name())
                        .size(13)
                        .color(colors::TEXT_PRIMARY),
                    horizontal_space(),
                    text(binding.key.to_string())
                        .size(12)
                        .color(colors::TEXT_MUTED),
                ]
                .into()
            })
            .collect();

        column![
            text("Keyboard Shortcuts").size(16).color(colors::TEXT_PRIMARY),
            Space::with_height(12),
            scrollable(Column::with_children(rows).spacing(6)).height(Length::Fixed(260.0)),
        ]
        .into()
    }

    fn close_button<'a>() -> Element<'a, Message> {
        button(text("Close").size(13).color(colors::TEXT_PRIMARY))
            .padding(Padding::from([8, 20]))
            .style(|_: &Theme, status: button::Status| {
                let bg = match status {
                    button::Status::Hovered => colors::BG_HOVER,
                    _ => colors::BG_LIGHT,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: colors::TEXT_PRIMARY,
                    border: Border {
                        color: colors::BORDER,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::CloseDialog)
            .into()
    }
}
