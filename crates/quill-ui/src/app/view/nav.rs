//! The nav bar: menu buttons, their dropdowns and the filename field.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, horizontal_space, mouse_area, row, text, text_input, Column, Row, Space};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use quill_core::menu::{menu_items, MenuContext, MenuEntry, MenuItem};
use quill_core::MenuKind;

use super::separator;
use crate::app::{App, Message};
use crate::style::NavStyle;
use crate::theme::colors;

impl App {
    pub fn view_nav_bar(&self) -> Element<'_, Message> {
        let nav = NavStyle::default();

        let mut items: Vec<Element<'_, Message>> = MenuKind::ALL
            .iter()
            .map(|&kind| Self::menu_button(kind, self.menus.is_open(kind), &nav))
            .collect();

        items.push(horizontal_space().into());
        items.push(
            text_input(&self.config.files.default_file_name, self.document.file_name())
                .on_input(Message::FileNameChanged)
                .width(Length::Fixed(nav.file_name_width))
                .padding(Padding::from([4, 8]))
                .size(12)
                .into(),
        );

        let bar = Row::with_children(items)
            .spacing(nav.spacing)
            .padding(Padding::from([nav.padding_y, nav.padding_x]))
            .align_y(iced::Alignment::Center);

        container(bar)
            .width(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_MEDIUM)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn menu_button<'a>(kind: MenuKind, is_open: bool, nav: &NavStyle) -> Element<'a, Message> {
        button(
            text(kind.label())
                .size(12)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(Horizontal::Center)
                .align_y(Vertical::Center)
                .color(if is_open {
                    colors::TEXT_PRIMARY
                } else {
                    colors::TEXT_SECONDARY
                }),
        )
        .width(Length::Fixed(nav.button_width))
        .height(Length::Fixed(nav.button_height))
        .padding(0)
        .style(move |_: &Theme, status: button::Status| {
            let bg = if is_open {
                colors::BG_ACTIVE
            } else {
                match status {
                    button::Status::Hovered => colors::BG_HOVER,
                    _ => colors::BG_MEDIUM,
                }
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        })
        .on_press(Message::ToggleMenu(kind))
        .into()
    }

    /// Build a single dropdown row with label, shortcut and check mark.
    fn menu_item<'a>(entry: MenuEntry) -> Element<'a, Message> {
        let check = match entry.checked {
            Some(true) => "✓",
            _ => "",
        };

        button(
            row![
                text(check).size(12).width(Length::Fixed(16.0)).color(colors::ACCENT),
                text(entry.label).size(12).color(colors::TEXT_PRIMARY),
                horizontal_space(),
                text(entry.shortcut.unwrap_or_default())
                    .size(11)
                    .color(colors::TEXT_MUTED),
            ]
            .width(Length::Fill)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([6, 12]))
        .style(|_: &Theme, status: button::Status| {
            let bg = match status {
                button::Status::Hovered => colors::BG_HOVER,
                _ => Color::TRANSPARENT,
            };
            button::Style {
                background: Some(Background::Color(bg)),
                text_color: colors::TEXT_PRIMARY,
                border: Border::default(),
                ..Default::default()
            }
        })
        .on_press(Message::Command(entry.command))
        .into()
    }

    /// The open dropdown, drawn as an overlay under its button.
    ///
    /// The overlay repeats the button's footprint as a transparent hitbox
    /// so the button and the list form one hover region: leaving it closes
    /// the menu, and clicking the hitbox toggles it like the real button.
    pub fn view_menu_dropdown(&self, kind: MenuKind) -> Element<'_, Message> {
        let nav = NavStyle::default();
        let ctx = MenuContext {
            soft_tabs: self.soft_tabs,
        };

        let items: Vec<Element<'_, Message>> = menu_items(kind, &self.keymap, ctx)
            .into_iter()
            .map(|item| match item {
                MenuItem::Entry(entry) => Self::menu_item(entry),
                MenuItem::Separator => separator(),
            })
            .collect();

        let list = container(
            Column::with_children(items)
                .width(Length::Fixed(nav.dropdown_width))
                .padding(4),
        )
        .style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        });

        let hitbox = button(Space::new(
            Length::Fixed(nav.button_width),
            Length::Fixed(nav.button_height),
        ))
        .padding(0)
        .style(|_: &Theme, _| button::Style {
            background: None,
            ..Default::default()
        })
        .on_press(Message::ToggleMenu(kind));

        let region = mouse_area(column![hitbox, list]).on_exit(Message::MenuPointerLeft(kind));

        column![
            Space::with_height(Length::Fixed(nav.padding_y)),
            row![
                Space::with_width(Length::Fixed(nav.button_offset(kind.index()))),
                region,
            ],
        ]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
