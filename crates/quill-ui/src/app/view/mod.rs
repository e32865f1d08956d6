pub mod code_input;
pub mod dialogs;
pub mod nav;
pub mod status;

use iced::widget::{column, container, mouse_area, stack, Column, Space};
use iced::{Background, Element, Length};

use crate::app::{App, Message};
use crate::theme::colors;

pub use code_input::{editor_scroll_id, gutter_scroll_id};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let mut layout = Column::new()
            .push(self.view_nav_bar())
            .push(self.view_code_input());
        if self.config.ui.show_status_bar {
            layout = layout.push(self.view_status_bar());
        }

        let main_view: Element<'_, Message> = container(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into();

        if let Some(dialog) = self.dialog {
            stack![
                main_view,
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .style(|_| container::Style {
                            background: Some(Background::Color(colors::BACKDROP)),
                            ..Default::default()
                        })
                )
                .on_press(Message::CloseDialog),
                self.view_dialog(dialog),
            ]
            .into()
        } else if let Some(kind) = self.menus.open_menu() {
            // The backdrop sits above the editor so any click outside the
            // dropdown closes it instead of reaching the widget below.
            stack![
                main_view,
                mouse_area(
                    container(Space::new(Length::Fill, Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fill)
                )
                .on_press(Message::CloseMenus),
                self.view_menu_dropdown(kind),
            ]
            .into()
        } else {
            main_view
        }
    }
}

/// A 1px horizontal rule.
pub fn separator<'a>() -> Element<'a, Message> {
    column![container(Space::new(Length::Fill, 1)).style(|_| container::Style {
        background: Some(Background::Color(colors::BORDER)),
        ..Default::default()
    })]
    .padding([4, 8])
    .into()
}
