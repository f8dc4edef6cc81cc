//! Pure mapping from a typography configuration to per-role text styles.

use crate::model::{FontFamily, TypographyConfig};

/// Text roles rendered by the mock page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    H1,
    H2,
    H3,
    P1,
    P2,
}

impl TextRole {
    pub const ALL: &'static [TextRole] = &[
        TextRole::H1,
        TextRole::H2,
        TextRole::H3,
        TextRole::P1,
        TextRole::P2,
    ];

    /// H1 through H3 use the heading metrics; P1 and P2 the body metrics.
    pub fn is_heading(self) -> bool {
        matches!(self, Self::H1 | Self::H2 | Self::H3)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::H3 => "H3",
            Self::P1 => "P1",
            Self::P2 => "P2",
        }
    }
}

/// Resolved style for one text role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// CSS-style font stack.
    pub font_family: &'static str,
    /// Pixels.
    pub font_size: f32,
    /// Unitless multiplier.
    pub line_height: f32,
    /// Em fraction.
    pub letter_spacing: f32,
    pub font_weight: u16,
}

impl TextStyle {
    /// Height in pixels of one rendered text line.
    pub fn line_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

/// Resolve the configured family to a concrete font stack.
pub fn font_stack(family: FontFamily) -> &'static str {
    match family {
        FontFamily::Raleway => "\"Raleway\", sans-serif",
        FontFamily::Default => "system-ui, -apple-system, sans-serif",
    }
}

/// Compute the style for `role` under `config`. Pure and deterministic.
pub fn style_for(config: &TypographyConfig, role: TextRole) -> TextStyle {
    let font_size = match role {
        TextRole::H1 => config.h1_size,
        TextRole::H2 => config.h2_size,
        TextRole::H3 => config.h3_size,
        TextRole::P1 => config.p1_size,
        TextRole::P2 => config.p2_size,
    } as f32;

    let (line_height, letter_spacing, font_weight) = if role.is_heading() {
        (
            config.heading_line_height,
            config.heading_letter_spacing,
            config.heading_font_weight,
        )
    } else {
        (
            config.body_line_height,
            config.body_letter_spacing,
            config.body_font_weight,
        )
    };

    TextStyle {
        font_family: font_stack(config.font_family),
        font_size,
        line_height,
        letter_spacing,
        font_weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TypographyConfig {
        TypographyConfig {
            heading_line_height: 1.1,
            body_line_height: 1.7,
            heading_letter_spacing: -0.02,
            body_letter_spacing: 0.01,
            heading_font_weight: 800,
            body_font_weight: 300,
            ..TypographyConfig::default()
        }
    }

    #[test]
    fn headings_use_heading_metrics() {
        let config = config();
        for role in [TextRole::H1, TextRole::H2, TextRole::H3] {
            let style = style_for(&config, role);
            assert_eq!(style.line_height, 1.1, "{role:?}");
            assert_eq!(style.letter_spacing, -0.02, "{role:?}");
            assert_eq!(style.font_weight, 800, "{role:?}");
        }
    }

    #[test]
    fn paragraphs_use_body_metrics() {
        let config = config();
        for role in [TextRole::P1, TextRole::P2] {
            let style = style_for(&config, role);
            assert_eq!(style.line_height, 1.7, "{role:?}");
            assert_eq!(style.letter_spacing, 0.01, "{role:?}");
            assert_eq!(style.font_weight, 300, "{role:?}");
        }
    }

    #[test]
    fn sizes_follow_role() {
        let config = config();
        assert_eq!(style_for(&config, TextRole::H1).font_size, 61.0);
        assert_eq!(style_for(&config, TextRole::H3).font_size, 25.0);
        assert_eq!(style_for(&config, TextRole::P2).font_size, 13.0);
    }

    #[test]
    fn family_lookup() {
        assert_eq!(font_stack(FontFamily::Raleway), "\"Raleway\", sans-serif");
        assert_eq!(
            font_stack(FontFamily::Default),
            "system-ui, -apple-system, sans-serif"
        );
    }
}
