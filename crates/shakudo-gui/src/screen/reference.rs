//! Token reference table with a printable report.
//!
//! Shows every spacing token across the three breakpoints plus a
//! typography summary. Print renders the standalone HTML report and
//! opens it in the system browser.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Element, Length};

use shakudo_core::model::{Breakpoint, SpacingField};
use shakudo_core::report;
use shakudo_core::store::SettingsStore;
use shakudo_core::typography::{font_stack, style_for, TextRole};

use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::styled_scrollable;

#[derive(Debug, Clone)]
pub enum Message {
    PrintPressed,
}

#[derive(Default)]
pub struct Reference;

impl Reference {
    pub fn update(&mut self, message: Message, store: &SettingsStore) -> Action {
        match message {
            Message::PrintPressed => match report::write_report(store) {
                Ok(path) => {
                    if let Err(e) = open::that(&path) {
                        tracing::warn!("Failed to open report: {e}");
                        return Action::SetStatus(format!("Report written to {}", path.display()));
                    }
                    Action::SetStatus("Opened printable report in browser".into())
                }
                Err(e) => Action::SetStatus(format!("Report failed: {e}")),
            },
        }
    }

    pub fn view<'a>(&'a self, cs: &ColorScheme, store: &SettingsStore) -> Element<'a, Message> {
        let header = row![
            text("Token Reference")
                .size(style::TEXT_XL)
                .line_height(style::LINE_HEIGHT_TIGHT)
                .color(cs.on_surface),
            Space::new().width(Length::Fill),
            button(text("Print").size(style::TEXT_SM))
                .padding([style::SPACE_SM, style::SPACE_XL])
                .on_press(Message::PrintPressed)
                .style(theme::primary_button(cs)),
        ]
        .align_y(iced::Alignment::Center);

        let table = column![
            self.header_row(cs),
            column(
                SpacingField::ALL
                    .iter()
                    .enumerate()
                    .map(|(i, &field)| self.spacing_row(cs, store, field, i % 2 == 0))
                    .collect::<Vec<_>>(),
            ),
        ];

        let content = column![
            header,
            container(table).style(theme::card(cs)).padding(style::SPACE_XS),
            self.typography_summary(cs, store),
        ]
        .spacing(style::SPACE_LG)
        .padding(style::SPACE_XL)
        .max_width(1100);

        styled_scrollable(
            container(content).width(Length::Fill).align_x(iced::Alignment::Center),
            cs,
        )
        .height(Length::Fill)
        .into()
    }

    fn header_row<'a>(&self, cs: &ColorScheme) -> Element<'a, Message> {
        let cell = |label: &'static str, width: f32| {
            text(label)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .width(Length::Fixed(width))
        };
        container(
            row![
                cell("Token", style::TABLE_TOKEN_WIDTH),
                text("Usage")
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_LOOSE)
                    .width(Length::Fill),
                cell("Desktop", style::TABLE_VALUE_WIDTH),
                cell("Tablet", style::TABLE_VALUE_WIDTH),
                cell("Mobile", style::TABLE_VALUE_WIDTH),
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::table_header(cs))
        .padding([style::SPACE_SM, style::SPACE_MD])
        .into()
    }

    fn spacing_row<'a>(
        &self,
        cs: &ColorScheme,
        store: &SettingsStore,
        field: SpacingField,
        even: bool,
    ) -> Element<'a, Message> {
        let value_cell = |bp: Breakpoint| {
            let value = field.get(store.spacing.get(bp));
            let color = if field.breaks_grid(value) {
                cs.warn
            } else {
                cs.on_surface
            };
            text(format!("{value}px"))
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_NORMAL)
                .color(color)
                .width(Length::Fixed(style::TABLE_VALUE_WIDTH))
        };

        container(
            row![
                text(field.label())
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL)
                    .color(cs.on_surface)
                    .width(Length::Fixed(style::TABLE_TOKEN_WIDTH)),
                text(field.usage())
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL)
                    .color(cs.on_surface_variant)
                    .width(Length::Fill),
                value_cell(Breakpoint::Desktop),
                value_cell(Breakpoint::Tablet),
                value_cell(Breakpoint::Mobile),
            ]
            .spacing(style::SPACE_SM),
        )
        .style(theme::table_row(even, cs))
        .padding([style::SPACE_XS, style::SPACE_MD])
        .into()
    }

    fn typography_summary<'a>(
        &self,
        cs: &ColorScheme,
        store: &SettingsStore,
    ) -> Element<'a, Message> {
        let breakpoint_card = |bp: Breakpoint| {
            let config = store.typography.get(bp);
            let mut lines = column![
                text(format!("{} ({}px)", bp.label(), bp.preview_width() as u32))
                    .size(style::TEXT_SM)
                    .color(cs.on_surface)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                text(font_stack(config.font_family))
                    .size(style::TEXT_XS)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            ]
            .spacing(style::SPACE_XXS);

            for &role in TextRole::ALL {
                let s = style_for(config, role);
                lines = lines.push(
                    text(format!(
                        "{}: {}px / {} / {}",
                        role.label(),
                        s.font_size,
                        s.line_height,
                        s.font_weight
                    ))
                    .size(style::TEXT_XS)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
                );
            }

            container(lines)
                .style(theme::card(cs))
                .padding(style::SPACE_LG)
                .width(Length::Fill)
        };

        row![
            breakpoint_card(Breakpoint::Desktop),
            breakpoint_card(Breakpoint::Tablet),
            breakpoint_card(Breakpoint::Mobile),
        ]
        .spacing(style::SPACE_MD)
        .into()
    }
}
