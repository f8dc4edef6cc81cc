//! Token editing panel: spacing, typography, and tool settings.
//!
//! Inputs bind straight to the settings store. Numeric fields parse on
//! every keystroke and fall back to zero on garbage, so the preview
//! always reflects something; values off the 8pt grid get a warning
//! border instead of being rejected.

use iced::widget::{button, column, container, pick_list, row, text, text_input, toggler};
use iced::{Alignment, Element, Length, Task};

use shakudo_core::model::{
    Breakpoint, FontFamily, PreviewHeight, SpacingField, TypographyConfig, TypographyUpdate,
};
use shakudo_core::store::SettingsStore;
use shakudo_core::typography::TextRole;

use crate::app;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets::{form_row, styled_scrollable};

/// Panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlTab {
    #[default]
    Spacing,
    Typography,
    Settings,
}

impl ControlTab {
    pub const ALL: &'static [ControlTab] =
        &[ControlTab::Spacing, ControlTab::Typography, ControlTab::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Spacing => "Spacing",
            Self::Typography => "Typography",
            Self::Settings => "Settings",
        }
    }
}

/// Heading-level vs body-level metric target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextGroup {
    Heading,
    Body,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(ControlTab),
    // Spacing
    SpacingInput(Breakpoint, SpacingField, String),
    // Typography
    FamilySelected(FontFamily),
    SizeInput(Breakpoint, TextRole, String),
    WeightInput(Breakpoint, TextGroup, String),
    LineHeightInput(TextGroup, String),
    LetterSpacingInput(TextGroup, String),
    // Settings
    HeightInput(String),
    HeightSubmitted,
    MeasureToggled(bool),
    ExportPressed,
    ExportTarget(Option<std::path::PathBuf>),
    ImportPressed,
    ImportPicked(Option<std::path::PathBuf>),
    ResetPressed,
}

/// Controls panel state. Everything except the height buffer lives in
/// the settings store.
pub struct Controls {
    pub active_tab: ControlTab,
    height_input: String,
}

impl Controls {
    pub fn new(store: &SettingsStore) -> Self {
        Self {
            active_tab: ControlTab::default(),
            height_input: height_text(store.layout.preview_height),
        }
    }

    pub fn update(&mut self, message: Message, store: &mut SettingsStore) -> Action {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                Action::None
            }
            Message::SpacingInput(breakpoint, field, value) => {
                store.set_spacing(breakpoint, field, value.trim().parse().unwrap_or(0));
                Action::None
            }
            Message::FamilySelected(family) => {
                // Global update; the breakpoint argument is moot.
                store.apply_typography(Breakpoint::Desktop, TypographyUpdate::FontFamily(family));
                Action::None
            }
            Message::SizeInput(breakpoint, role, value) => {
                let px = value.trim().parse().unwrap_or(0);
                let update = match role {
                    TextRole::H1 => TypographyUpdate::H1Size(px),
                    TextRole::H2 => TypographyUpdate::H2Size(px),
                    TextRole::H3 => TypographyUpdate::H3Size(px),
                    TextRole::P1 => TypographyUpdate::P1Size(px),
                    TextRole::P2 => TypographyUpdate::P2Size(px),
                };
                store.apply_typography(breakpoint, update);
                Action::None
            }
            Message::WeightInput(breakpoint, group, value) => {
                let weight = value.trim().parse().unwrap_or(0);
                let update = match group {
                    TextGroup::Heading => TypographyUpdate::HeadingFontWeight(weight),
                    TextGroup::Body => TypographyUpdate::BodyFontWeight(weight),
                };
                store.apply_typography(breakpoint, update);
                Action::None
            }
            Message::LineHeightInput(group, value) => {
                let ratio = value.trim().parse().unwrap_or(0.0);
                let update = match group {
                    TextGroup::Heading => TypographyUpdate::HeadingLineHeight(ratio),
                    TextGroup::Body => TypographyUpdate::BodyLineHeight(ratio),
                };
                store.apply_typography(Breakpoint::Desktop, update);
                Action::None
            }
            Message::LetterSpacingInput(group, value) => {
                let em = value.trim().parse().unwrap_or(0.0);
                let update = match group {
                    TextGroup::Heading => TypographyUpdate::HeadingLetterSpacing(em),
                    TextGroup::Body => TypographyUpdate::BodyLetterSpacing(em),
                };
                store.apply_typography(Breakpoint::Desktop, update);
                Action::None
            }
            Message::HeightInput(value) => {
                self.height_input = value;
                Action::None
            }
            Message::HeightSubmitted => {
                let trimmed = self.height_input.trim();
                let height = if trimmed.eq_ignore_ascii_case("auto") || trimmed.is_empty() {
                    PreviewHeight::Auto
                } else {
                    match trimmed.parse() {
                        Ok(px) => PreviewHeight::Px(px),
                        Err(_) => {
                            self.height_input = height_text(store.layout.preview_height);
                            return Action::SetStatus(
                                "Preview height must be a pixel value or \"auto\"".into(),
                            );
                        }
                    }
                };
                store.set_preview_height(height);
                self.height_input = height_text(height);
                Action::None
            }
            Message::MeasureToggled(show) => {
                store.set_show_measurements(show);
                Action::None
            }
            Message::ExportPressed => {
                let file_name = store.export_file_name();
                Action::RunTask(Task::perform(
                    async move {
                        rfd::AsyncFileDialog::new()
                            .add_filter("JSON", &["json"])
                            .set_title("Export Settings")
                            .set_file_name(&file_name)
                            .save_file()
                            .await
                            .map(|h| h.path().to_path_buf())
                    },
                    |path| app::Message::Controls(Message::ExportTarget(path)),
                ))
            }
            Message::ExportTarget(Some(path)) => match store.export_json() {
                Ok(json) => match std::fs::write(&path, json) {
                    Ok(()) => Action::SetStatus(format!("Exported to {}", path.display())),
                    Err(e) => Action::SetStatus(format!("Export failed: {e}")),
                },
                Err(e) => Action::SetStatus(format!("Export failed: {e}")),
            },
            Message::ExportTarget(None) => Action::None,
            Message::ImportPressed => Action::RunTask(Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("JSON", &["json"])
                        .set_title("Import Settings")
                        .pick_file()
                        .await
                        .map(|h| h.path().to_path_buf())
                },
                |path| app::Message::Controls(Message::ImportPicked(path)),
            )),
            Message::ImportPicked(Some(path)) => {
                let result = std::fs::read_to_string(&path)
                    .map_err(|e| e.to_string())
                    .and_then(|json| store.import_json(&json).map_err(|e| e.to_string()));
                match result {
                    Ok(()) => {
                        self.height_input = height_text(store.layout.preview_height);
                        Action::SetStatus(format!("Imported {}", path.display()))
                    }
                    Err(e) => Action::SetStatus(format!("Import failed: {e}")),
                }
            }
            Message::ImportPicked(None) => Action::None,
            Message::ResetPressed => {
                store.reset_to_defaults();
                self.height_input = height_text(store.layout.preview_height);
                Action::SetStatus("Settings reset to defaults".into())
            }
        }
    }

    pub fn view<'a>(
        &'a self,
        cs: &ColorScheme,
        store: &SettingsStore,
        breakpoint: Breakpoint,
    ) -> Element<'a, Message> {
        let tabs = row(ControlTab::ALL.iter().map(|&tab| {
            button(text(tab.label()).size(style::TEXT_SM))
                .padding([style::SPACE_XS, style::SPACE_MD])
                .on_press(Message::TabSelected(tab))
                .style(theme::tab_button(self.active_tab == tab, cs))
                .into()
        }))
        .spacing(style::SPACE_XS);

        let body: Element<'a, Message> = match self.active_tab {
            ControlTab::Spacing => self.spacing_tab(cs, store),
            ControlTab::Typography => self.typography_tab(cs, store),
            ControlTab::Settings => self.settings_tab(cs, store),
        };

        let panel = column![
            text(format!("{} · {}px", breakpoint.label(), breakpoint.preview_width() as u32))
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
            tabs,
            styled_scrollable(container(body).padding([0.0, style::SPACE_XS]), cs)
                .height(Length::Fill),
        ]
        .spacing(style::SPACE_MD);

        container(panel)
            .style(theme::card(cs))
            .padding(style::SPACE_LG)
            .width(Length::Fixed(style::CONTROLS_WIDTH))
            .height(Length::Fill)
            .into()
    }

    /// One column header per breakpoint, aligned over the input triples.
    fn breakpoint_header<'a>(&self, cs: &ColorScheme) -> Element<'a, Message> {
        row(Breakpoint::ALL.iter().map(|&bp| {
            text(bp.label())
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .width(Length::Fill)
                .center()
                .into()
        }))
        .spacing(style::SPACE_XS)
        .into()
    }

    fn spacing_tab<'a>(&'a self, cs: &ColorScheme, store: &SettingsStore) -> Element<'a, Message> {
        let mut content = column![self.breakpoint_header(cs)].spacing(style::SPACE_SM);

        for &field in SpacingField::ALL {
            let inputs = row(Breakpoint::ALL.iter().map(|&bp| {
                let value = field.get(store.spacing.get(bp));
                let mut input = text_input("0", &value.to_string())
                    .size(style::INPUT_FONT_SIZE)
                    .padding(style::INPUT_PADDING)
                    .width(Length::Fill);
                // The reading-measure cap is display-only.
                if field != SpacingField::SingleColumnMaxWidth {
                    input = input.on_input(move |s| Message::SpacingInput(bp, field, s));
                }
                let input = if field.breaks_grid(value) {
                    input.style(theme::text_input_warn(cs))
                } else {
                    input.style(theme::text_input_style(cs))
                };
                input.into()
            }))
            .spacing(style::SPACE_XS);

            content = content.push(
                column![
                    text(field.label())
                        .size(style::INPUT_FONT_SIZE)
                        .color(cs.on_surface)
                        .line_height(style::LINE_HEIGHT_NORMAL),
                    inputs,
                ]
                .spacing(style::SPACE_XXS),
            );
        }

        content = content.push(
            text("Highlighted values are off the 8pt grid")
                .size(style::TEXT_XS)
                .color(cs.warn)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
        content.into()
    }

    fn typography_tab<'a>(&'a self, cs: &ColorScheme, store: &SettingsStore) -> Element<'a, Message> {
        // Global fields read the desktop record; every breakpoint
        // holds the same values for them.
        let config = store.typography.get(Breakpoint::Desktop);

        let number_input = |value: String, on_input: fn(String) -> Message| {
            text_input("0", &value)
                .on_input(on_input)
                .size(style::INPUT_FONT_SIZE)
                .padding(style::INPUT_PADDING)
                .width(Length::Fixed(style::INPUT_VALUE_WIDTH))
                .style(theme::text_input_style(cs))
        };

        let triple = |label: &'static str,
                      value_of: fn(&TypographyConfig) -> String,
                      message: fn(Breakpoint, String) -> Message| {
            let inputs = row(Breakpoint::ALL.iter().map(move |&bp| {
                text_input("0", &value_of(store.typography.get(bp)))
                    .on_input(move |s| message(bp, s))
                    .size(style::INPUT_FONT_SIZE)
                    .padding(style::INPUT_PADDING)
                    .width(Length::Fill)
                    .style(theme::text_input_style(cs))
                    .into()
            }))
            .spacing(style::SPACE_XS);
            column![
                text(label)
                    .size(style::INPUT_FONT_SIZE)
                    .color(cs.on_surface)
                    .line_height(style::LINE_HEIGHT_NORMAL),
                inputs,
            ]
            .spacing(style::SPACE_XXS)
        };

        let section = |label: &'static str| {
            text(label)
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE)
        };

        column![
            section("Per breakpoint"),
            self.breakpoint_header(cs),
            triple("H1 size (px)", |c| c.h1_size.to_string(), |bp, s| {
                Message::SizeInput(bp, TextRole::H1, s)
            }),
            triple("H2 size (px)", |c| c.h2_size.to_string(), |bp, s| {
                Message::SizeInput(bp, TextRole::H2, s)
            }),
            triple("H3 size (px)", |c| c.h3_size.to_string(), |bp, s| {
                Message::SizeInput(bp, TextRole::H3, s)
            }),
            triple("P1 size (px)", |c| c.p1_size.to_string(), |bp, s| {
                Message::SizeInput(bp, TextRole::P1, s)
            }),
            triple("P2 size (px)", |c| c.p2_size.to_string(), |bp, s| {
                Message::SizeInput(bp, TextRole::P2, s)
            }),
            triple(
                "Heading weight",
                |c| c.heading_font_weight.to_string(),
                |bp, s| Message::WeightInput(bp, TextGroup::Heading, s)
            ),
            triple("Body weight", |c| c.body_font_weight.to_string(), |bp, s| {
                Message::WeightInput(bp, TextGroup::Body, s)
            }),
            section("All breakpoints"),
            form_row(
                cs,
                "Font family",
                pick_list(FontFamily::ALL, Some(config.font_family), Message::FamilySelected)
                    .text_size(style::INPUT_FONT_SIZE)
                    .padding(style::INPUT_PADDING)
                    .style(theme::pick_list_style(cs))
                    .menu_style(theme::pick_list_menu_style(cs))
                    .into(),
            ),
            form_row(
                cs,
                "Heading line height",
                number_input(config.heading_line_height.to_string(), |s| {
                    Message::LineHeightInput(TextGroup::Heading, s)
                })
                .into(),
            ),
            form_row(
                cs,
                "Body line height",
                number_input(config.body_line_height.to_string(), |s| {
                    Message::LineHeightInput(TextGroup::Body, s)
                })
                .into(),
            ),
            form_row(
                cs,
                "Heading letter spacing (em)",
                number_input(config.heading_letter_spacing.to_string(), |s| {
                    Message::LetterSpacingInput(TextGroup::Heading, s)
                })
                .into(),
            ),
            form_row(
                cs,
                "Body letter spacing (em)",
                number_input(config.body_letter_spacing.to_string(), |s| {
                    Message::LetterSpacingInput(TextGroup::Body, s)
                })
                .into(),
            ),
        ]
        .spacing(style::SPACE_SM)
        .into()
    }

    fn settings_tab<'a>(&'a self, cs: &ColorScheme, store: &SettingsStore) -> Element<'a, Message> {
        let height_input = text_input("auto", &self.height_input)
            .on_input(Message::HeightInput)
            .on_submit(Message::HeightSubmitted)
            .size(style::INPUT_FONT_SIZE)
            .padding(style::INPUT_PADDING)
            .width(Length::Fixed(style::INPUT_VALUE_WIDTH))
            .style(theme::text_input_style(cs));

        let action_button = |label: &'static str, message: Message| {
            button(text(label).size(style::TEXT_SM))
                .padding([style::SPACE_SM, style::SPACE_LG])
                .on_press(message)
                .style(theme::ghost_button(cs))
        };

        column![
            form_row(cs, "Preview height (px or \"auto\")", height_input.into()),
            toggler(store.layout.show_distance_measurement)
                .label("Show distance measurements")
                .text_size(style::INPUT_FONT_SIZE)
                .size(style::TOGGLER_SIZE)
                .on_toggle(Message::MeasureToggled)
                .style(theme::toggler_style(cs)),
            text("Hover any element in the preview to measure the gaps to its neighbors")
                .size(style::TEXT_XS)
                .color(cs.on_surface_variant)
                .line_height(style::LINE_HEIGHT_LOOSE),
            row![
                button(text("Export").size(style::TEXT_SM))
                    .padding([style::SPACE_SM, style::SPACE_LG])
                    .on_press(Message::ExportPressed)
                    .style(theme::primary_button(cs)),
                action_button("Import", Message::ImportPressed),
                action_button("Reset", Message::ResetPressed),
            ]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center),
        ]
        .spacing(style::SPACE_LG)
        .into()
    }
}

fn height_text(height: PreviewHeight) -> String {
    match height {
        PreviewHeight::Auto => "auto".into(),
        PreviewHeight::Px(px) => px.to_string(),
    }
}
