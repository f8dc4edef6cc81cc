//! Cool neutral theme with a blue accent, in dark and light variants.
//!
//! Style functions are parameterized by `ColorScheme` so every widget
//! reads from the same semantic tokens. The previewed mock page uses
//! its own fixed light `PagePalette` regardless of the app theme, so
//! measured distances are judged against the page as it would ship.

use iced::widget::{button, container, pick_list, scrollable, text_input, toggler};
use iced::widget::overlay::menu;
use iced::{color, Background, Border, Color, Shadow, Theme, Vector};
use serde::{Deserialize, Serialize};

use crate::style;

// ── Theme mode ──────────────────────────────────────────────────────

/// Appearance selection, persisted with the window state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Dark,
    Light,
}

impl ThemeMode {
    /// Next mode for the appearance toggle in the nav rail.
    pub fn cycle(self) -> Self {
        match self {
            Self::System => Self::Dark,
            Self::Dark => Self::Light,
            Self::Light => Self::System,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

/// Resolve `ThemeMode::System` to a concrete Dark or Light.
pub fn resolve_mode(mode: ThemeMode) -> ThemeMode {
    match mode {
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ThemeMode::Light,
            _ => ThemeMode::Dark,
        },
        other => other,
    }
}

// ── Color scheme ────────────────────────────────────────────────────

/// Semantic color tokens for the application chrome.
///
/// Construct via `ColorScheme::dark()` or `ColorScheme::light()`.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces (low → high elevation)
    pub surface_container_lowest: Color,
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    // Text hierarchy
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    // Primary accent (blue)
    pub primary: Color,
    pub primary_hover: Color,
    pub primary_dim: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    // Status
    pub success: Color,
    pub warn: Color,
    pub error: Color,
}

impl ColorScheme {
    /// Dark theme: cool-tinted neutrals with a lighter blue accent.
    pub fn dark() -> Self {
        Self {
            surface_container_lowest: color!(0x0B0E14),
            surface: color!(0x11151D),
            surface_container_low: color!(0x171C26),
            surface_container: color!(0x1D2330),
            surface_container_high: color!(0x252C3B),
            surface_bright: color!(0x2E3648),

            on_surface: color!(0xE2E8F0),
            on_surface_variant: color!(0xAEB8C9),
            outline: color!(0x7C8699),
            outline_variant: color!(0x3A4355),

            primary: color!(0x7CA9FF),
            primary_hover: color!(0x9BBDFF),
            primary_dim: color!(0x5D8BE8),
            on_primary: color!(0x0A2352),
            primary_container: color!(0x23406F),
            on_primary_container: color!(0xD7E3FF),

            success: color!(0x4AC78B),
            warn: color!(0xF0A35E),
            error: color!(0xFF8A80),
        }
    }

    /// Light theme: cool whites with a deeper blue accent.
    pub fn light() -> Self {
        Self {
            surface_container_lowest: color!(0xFFFFFF),
            surface: color!(0xF8FAFC),
            surface_container_low: color!(0xF1F5F9),
            surface_container: color!(0xE9EEF5),
            surface_container_high: color!(0xE1E7F0),
            surface_bright: color!(0xD5DCE8),

            on_surface: color!(0x1B2433),
            on_surface_variant: color!(0x475467),
            outline: color!(0x7C8699),
            outline_variant: color!(0xCBD4E1),

            primary: color!(0x2563EB),
            primary_hover: color!(0x1D4ED8),
            primary_dim: color!(0x3B74F0),
            on_primary: Color::WHITE,
            primary_container: color!(0xD7E3FF),
            on_primary_container: color!(0x102A56),

            success: color!(0x1B6E42),
            warn: color!(0xC2640C),
            error: color!(0xBA1A1A),
        }
    }

    /// Get the color scheme for a resolved theme mode.
    pub fn for_mode(mode: ThemeMode) -> Self {
        match resolve_mode(mode) {
            ThemeMode::Light => Self::light(),
            _ => Self::dark(),
        }
    }
}

// ── Theme constructor ───────────────────────────────────────────────

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Shakudo",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.success,
            warning: cs.warn,
            danger: cs.error,
        },
    )
}

// ── Mock page palette ───────────────────────────────────────────────

/// Fixed light colors for the previewed page and its overlay.
///
/// Independent of the app theme: the preview shows the page as a
/// visitor would see it.
#[derive(Debug, Clone)]
pub struct PagePalette {
    pub page: Color,
    pub text: Color,
    pub muted: Color,
    pub meta_fill: Color,
    pub hero_fill: Color,
    pub content_fill: Color,
    pub grid_fill: Color,
    pub single_fill: Color,
    pub box_fill: Color,
    pub box_text: Color,
    pub button_fill: Color,
    pub button_text: Color,
    pub note_text: Color,
    pub hover_fill: Color,
    pub hover_border: Color,
    pub measure: Color,
    pub label_text: Color,
}

impl PagePalette {
    pub fn new() -> Self {
        Self {
            page: Color::WHITE,
            text: color!(0x111827),
            muted: color!(0x4B5563),
            meta_fill: color!(0xF3F4F6),
            hero_fill: color!(0xEFF6FF),
            content_fill: color!(0xF0FDF4),
            grid_fill: color!(0xFAF5FF),
            single_fill: color!(0xF9FAFB),
            box_fill: color!(0xE5E7EB),
            box_text: color!(0x6B7280),
            button_fill: color!(0x2563EB),
            button_text: Color::WHITE,
            note_text: color!(0x6B7280),
            hover_fill: Color {
                a: 0.12,
                ..color!(0x3B82F6)
            },
            hover_border: color!(0x3B82F6),
            measure: color!(0xEF4444),
            label_text: Color::WHITE,
        }
    }
}

// ── Style functions (parameterized by ColorScheme) ──────────────────

/// A card container: surface background, rounded corners, subtle border.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Status bar container style.
pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let text = cs.on_surface_variant;
    let bg = cs.surface_container_lowest;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Navigation rail background.
pub fn nav_rail_bg(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Navigation rail item: icon and label with a pill indicator when active.
pub fn nav_rail_item(
    active: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary_container = cs.primary_container;
    let on_primary_container = cs.on_primary_container;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let (bg, fg) = if active {
            (Some(primary_container), on_primary_container)
        } else {
            match status {
                button::Status::Hovered => (Some(surface_bright), on_surface),
                _ => (None, on_surface_variant),
            }
        };
        button::Style {
            background: bg.map(Background::Color),
            text_color: fg,
            border: Border {
                radius: style::RADIUS_XL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Tab strip item for the controls panel.
pub fn tab_button(
    active: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let on_primary = cs.on_primary;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let (bg, fg) = if active {
            (Some(primary), on_primary)
        } else {
            match status {
                button::Status::Hovered => (Some(surface_bright), on_surface),
                _ => (None, on_surface_variant),
            }
        };
        button::Style {
            background: bg.map(Background::Color),
            text_color: fg,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let primary_dim = cs.primary_dim;
    let on_primary = cs.on_primary;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => primary_hover,
            button::Status::Pressed => primary_dim,
            _ => primary,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_primary,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Low-emphasis button: transparent until hovered.
pub fn ghost_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline_variant = cs.outline_variant;

    move |_theme, status| {
        let (bg, fg) = match status {
            button::Status::Hovered | button::Status::Pressed => {
                (Some(surface_bright), on_surface)
            }
            _ => (None, on_surface_variant),
        };
        button::Style {
            background: bg.map(Background::Color),
            text_color: fg,
            border: Border {
                color: outline_variant,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

pub fn text_input_style(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    input_style(cs, None)
}

/// Variant for values that break the 8pt grid: the border warns.
pub fn text_input_warn(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let warn = cs.warn;
    input_style(cs, Some(warn))
}

fn input_style(
    cs: &ColorScheme,
    warn: Option<Color>,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let primary = cs.primary;
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;
    let surface_container_low = cs.surface_container_low;
    let on_surface_variant = cs.on_surface_variant;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let border_color = warn.unwrap_or(match status {
            text_input::Status::Focused { .. } => primary,
            text_input::Status::Hovered => outline,
            _ => outline_variant,
        });
        text_input::Style {
            background: Background::Color(surface_container_low),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            icon: on_surface_variant,
            placeholder: outline,
            value: on_surface,
            selection: primary,
        }
    }
}

/// MD3-style toggler: primary track when on, outline track when off.
pub fn toggler_style(cs: &ColorScheme) -> impl Fn(&Theme, toggler::Status) -> toggler::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let on_primary = cs.on_primary;
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let (track, knob) = match status {
            toggler::Status::Hovered { is_toggled: true } => (primary_hover, on_primary),
            toggler::Status::Hovered { is_toggled: false } => (surface_bright, on_surface),
            toggler::Status::Active { is_toggled: true }
            | toggler::Status::Disabled { is_toggled: true } => (primary, on_primary),
            _ => (outline_variant, outline),
        };
        toggler::Style {
            background: Background::Color(track),
            foreground: Background::Color(knob),
            background_border_width: 1.0,
            background_border_color: outline_variant,
            foreground_border_width: 0.0,
            foreground_border_color: Color::TRANSPARENT,
            text_color: Some(on_surface),
            border_radius: None,
            padding_ratio: 0.25,
        }
    }
}

pub fn pick_list_style(cs: &ColorScheme) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    let primary = cs.primary;
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;
    let surface_container_low = cs.surface_container_low;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let (border_color, handle_color) = match status {
            pick_list::Status::Opened { .. } => (primary, primary),
            pick_list::Status::Hovered => (outline, on_surface),
            _ => (outline_variant, on_surface_variant),
        };
        pick_list::Style {
            text_color: on_surface,
            placeholder_color: on_surface_variant,
            handle_color,
            background: Background::Color(surface_container_low),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
        }
    }
}

/// Pick list dropdown menu: themed background with primary selection highlight.
pub fn pick_list_menu_style(cs: &ColorScheme) -> impl Fn(&Theme) -> menu::Style {
    let surface_container = cs.surface_container;
    let outline_variant = cs.outline_variant;
    let on_surface = cs.on_surface;
    let primary = cs.primary;
    let on_primary = cs.on_primary;

    move |_theme| menu::Style {
        background: Background::Color(surface_container),
        border: Border {
            color: outline_variant,
            width: 1.0,
            radius: style::RADIUS_MD.into(),
        },
        text_color: on_surface,
        selected_text_color: on_primary,
        selected_background: Background::Color(primary),
        shadow: Shadow {
            color: Color {
                a: 0.2,
                ..Color::BLACK
            },
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
    }
}

/// Minimal overlay-style scrollbar shared by every scrollable.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let on_surface = cs.on_surface;
    let primary = cs.primary;

    move |_theme, status| {
        let (scroller_color, scroller_alpha) = match status {
            scrollable::Status::Dragged { .. } => (primary, 0.7),
            scrollable::Status::Hovered {
                is_vertical_scrollbar_hovered: true,
                ..
            } => (on_surface, 0.5),
            scrollable::Status::Hovered { .. } => (on_surface, 0.25),
            _ => (on_surface, 0.15),
        };

        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(Color {
                    a: scroller_alpha,
                    ..scroller_color
                }),
                border: Border {
                    radius: style::RADIUS_XL.into(),
                    ..Border::default()
                },
            },
        };

        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::AutoScroll {
                background: Background::Color(Color::TRANSPARENT),
                border: Border::default(),
                shadow: Shadow::default(),
                icon: on_surface,
            },
        }
    }
}

/// Striped table row for the reference screen.
pub fn table_row(even: bool, cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = if even {
        cs.surface_container_low
    } else {
        cs.surface
    };
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Header row for the reference table.
pub fn table_header(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let fg = cs.on_surface;
    move |_theme| container::Style {
        text_color: Some(fg),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}
