//! Configuration data model: spacing, typography, and layout settings.
//!
//! Field names serialize as camelCase so previously exported settings
//! files import without conversion.

use serde::{Deserialize, Serialize};

// ── Breakpoints ─────────────────────────────────────────────────────

/// One of the three viewport presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Breakpoint {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl Breakpoint {
    pub const ALL: &'static [Breakpoint] =
        &[Breakpoint::Desktop, Breakpoint::Tablet, Breakpoint::Mobile];

    pub fn label(self) -> &'static str {
        match self {
            Self::Desktop => "Desktop",
            Self::Tablet => "Tablet",
            Self::Mobile => "Mobile",
        }
    }

    /// Outer width constraint of the rendered mock page.
    pub fn preview_width(self) -> f32 {
        match self {
            Self::Desktop => 1200.0,
            Self::Tablet => 768.0,
            Self::Mobile => 390.0,
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One value per breakpoint. The three entries are independent; no
/// breakpoint inherits from another at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakpointSet<T> {
    pub desktop: T,
    pub tablet: T,
    pub mobile: T,
}

impl<T> BreakpointSet<T> {
    pub fn get(&self, bp: Breakpoint) -> &T {
        match bp {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => &self.tablet,
            Breakpoint::Mobile => &self.mobile,
        }
    }

    pub fn get_mut(&mut self, bp: Breakpoint) -> &mut T {
        match bp {
            Breakpoint::Desktop => &mut self.desktop,
            Breakpoint::Tablet => &mut self.tablet,
            Breakpoint::Mobile => &mut self.mobile,
        }
    }

    pub fn for_each_mut(&mut self, mut f: impl FnMut(&mut T)) {
        f(&mut self.desktop);
        f(&mut self.tablet);
        f(&mut self.mobile);
    }
}

impl<T: Clone> BreakpointSet<T> {
    /// All three breakpoints set to the same value.
    pub fn uniform(value: T) -> Self {
        Self {
            desktop: value.clone(),
            tablet: value.clone(),
            mobile: value,
        }
    }
}

// ── Spacing ─────────────────────────────────────────────────────────

/// The nineteen pixel knobs of the 8pt spacing system, per breakpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingConfig {
    pub page_padding_top_bottom: u32,
    pub page_padding_left_right: u32,
    pub section_padding_top_bottom: u32,
    pub section_padding_left_right: u32,
    pub major_sections: u32,
    pub subsections: u32,
    pub h1_to_content: u32,
    pub h2_to_next: u32,
    pub h3_to_content: u32,
    pub subtitle_to_h2: u32,
    pub above_buttons: u32,
    pub paragraph_spacing: u32,
    pub bullet_points: u32,
    pub grid_gap2_col_horizontal: u32,
    pub grid_gap2_col_vertical: u32,
    pub grid_gap3_col_horizontal: u32,
    pub grid_gap3_col_vertical: u32,
    pub grid_gap4_col_horizontal: u32,
    pub grid_gap4_col_vertical: u32,
    pub single_column_max_width: u32,
}

/// Addressable spacing field, used by the control panel and the
/// reference table to iterate the full set in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpacingField {
    PagePaddingTopBottom,
    PagePaddingLeftRight,
    SectionPaddingTopBottom,
    SectionPaddingLeftRight,
    MajorSections,
    Subsections,
    H1ToContent,
    H2ToNext,
    H3ToContent,
    SubtitleToH2,
    AboveButtons,
    ParagraphSpacing,
    BulletPoints,
    GridGap2ColHorizontal,
    GridGap2ColVertical,
    GridGap3ColHorizontal,
    GridGap3ColVertical,
    GridGap4ColHorizontal,
    GridGap4ColVertical,
    SingleColumnMaxWidth,
}

impl SpacingField {
    pub const ALL: &'static [SpacingField] = &[
        Self::PagePaddingTopBottom,
        Self::PagePaddingLeftRight,
        Self::SectionPaddingTopBottom,
        Self::SectionPaddingLeftRight,
        Self::MajorSections,
        Self::Subsections,
        Self::H1ToContent,
        Self::H2ToNext,
        Self::H3ToContent,
        Self::SubtitleToH2,
        Self::ParagraphSpacing,
        Self::BulletPoints,
        Self::AboveButtons,
        Self::GridGap2ColHorizontal,
        Self::GridGap2ColVertical,
        Self::GridGap3ColHorizontal,
        Self::GridGap3ColVertical,
        Self::GridGap4ColHorizontal,
        Self::GridGap4ColVertical,
        Self::SingleColumnMaxWidth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::PagePaddingTopBottom => "Page Padding (Vertical)",
            Self::PagePaddingLeftRight => "Page Padding (Horizontal)",
            Self::SectionPaddingTopBottom => "Section Padding (Vertical)",
            Self::SectionPaddingLeftRight => "Section Padding (Horizontal)",
            Self::MajorSections => "Between Major Sections",
            Self::Subsections => "Between Subsections",
            Self::H1ToContent => "H1 → Next Element",
            Self::H2ToNext => "H2 → Next Element",
            Self::H3ToContent => "H3 → Next Element",
            Self::SubtitleToH2 => "Section Label → H2",
            Self::ParagraphSpacing => "Paragraph Spacing",
            Self::BulletPoints => "Bullet Point Spacing",
            Self::AboveButtons => "Above Buttons",
            Self::GridGap2ColHorizontal => "2-Column Gap (Horizontal)",
            Self::GridGap2ColVertical => "2-Column Gap (Vertical)",
            Self::GridGap3ColHorizontal => "3-Column Gap (Horizontal)",
            Self::GridGap3ColVertical => "3-Column Gap (Vertical)",
            Self::GridGap4ColHorizontal => "4-Column Gap (Horizontal)",
            Self::GridGap4ColVertical => "4-Column Gap (Vertical)",
            Self::SingleColumnMaxWidth => "Single Column Max Width",
        }
    }

    /// Usage description shown in the reference table and print report.
    pub fn usage(self) -> &'static str {
        match self {
            Self::PagePaddingTopBottom => "Global page padding for top and bottom margins",
            Self::PagePaddingLeftRight => "Global page padding for left and right margins",
            Self::SectionPaddingTopBottom => "Section-level top and bottom padding",
            Self::SectionPaddingLeftRight => "Section-level left and right padding",
            Self::MajorSections => "Separation for distinct content areas",
            Self::Subsections => "Section breaks within a section",
            Self::H1ToContent => "Strong hierarchy for H1 section titles",
            Self::H2ToNext => "H2 to content transition spacing",
            Self::H3ToContent => "H3 to content transition spacing",
            Self::SubtitleToH2 => "Section label to H2 header relationship",
            Self::ParagraphSpacing => "Natural text flow (breaks 8pt grid intentionally)",
            Self::BulletPoints => "List item separation",
            Self::AboveButtons => "Breathing room before CTAs",
            Self::GridGap2ColHorizontal => "Horizontal spacing in 2-column layouts",
            Self::GridGap2ColVertical => "Vertical spacing in 2-column layouts",
            Self::GridGap3ColHorizontal => "Horizontal spacing in 3-column layouts",
            Self::GridGap3ColVertical => "Vertical spacing in 3-column layouts",
            Self::GridGap4ColHorizontal => "Horizontal spacing in 4-column layouts",
            Self::GridGap4ColVertical => "Vertical spacing in 4-column layouts",
            Self::SingleColumnMaxWidth => "Max width for single-column content",
        }
    }

    pub fn get(self, config: &SpacingConfig) -> u32 {
        match self {
            Self::PagePaddingTopBottom => config.page_padding_top_bottom,
            Self::PagePaddingLeftRight => config.page_padding_left_right,
            Self::SectionPaddingTopBottom => config.section_padding_top_bottom,
            Self::SectionPaddingLeftRight => config.section_padding_left_right,
            Self::MajorSections => config.major_sections,
            Self::Subsections => config.subsections,
            Self::H1ToContent => config.h1_to_content,
            Self::H2ToNext => config.h2_to_next,
            Self::H3ToContent => config.h3_to_content,
            Self::SubtitleToH2 => config.subtitle_to_h2,
            Self::ParagraphSpacing => config.paragraph_spacing,
            Self::BulletPoints => config.bullet_points,
            Self::AboveButtons => config.above_buttons,
            Self::GridGap2ColHorizontal => config.grid_gap2_col_horizontal,
            Self::GridGap2ColVertical => config.grid_gap2_col_vertical,
            Self::GridGap3ColHorizontal => config.grid_gap3_col_horizontal,
            Self::GridGap3ColVertical => config.grid_gap3_col_vertical,
            Self::GridGap4ColHorizontal => config.grid_gap4_col_horizontal,
            Self::GridGap4ColVertical => config.grid_gap4_col_vertical,
            Self::SingleColumnMaxWidth => config.single_column_max_width,
        }
    }

    pub fn set(self, config: &mut SpacingConfig, value: u32) {
        match self {
            Self::PagePaddingTopBottom => config.page_padding_top_bottom = value,
            Self::PagePaddingLeftRight => config.page_padding_left_right = value,
            Self::SectionPaddingTopBottom => config.section_padding_top_bottom = value,
            Self::SectionPaddingLeftRight => config.section_padding_left_right = value,
            Self::MajorSections => config.major_sections = value,
            Self::Subsections => config.subsections = value,
            Self::H1ToContent => config.h1_to_content = value,
            Self::H2ToNext => config.h2_to_next = value,
            Self::H3ToContent => config.h3_to_content = value,
            Self::SubtitleToH2 => config.subtitle_to_h2 = value,
            Self::ParagraphSpacing => config.paragraph_spacing = value,
            Self::BulletPoints => config.bullet_points = value,
            Self::AboveButtons => config.above_buttons = value,
            Self::GridGap2ColHorizontal => config.grid_gap2_col_horizontal = value,
            Self::GridGap2ColVertical => config.grid_gap2_col_vertical = value,
            Self::GridGap3ColHorizontal => config.grid_gap3_col_horizontal = value,
            Self::GridGap3ColVertical => config.grid_gap3_col_vertical = value,
            Self::GridGap4ColHorizontal => config.grid_gap4_col_horizontal = value,
            Self::GridGap4ColVertical => config.grid_gap4_col_vertical = value,
            Self::SingleColumnMaxWidth => config.single_column_max_width = value,
        }
    }

    /// Whether `value` violates the 8pt grid convention for this field.
    ///
    /// Violations are flagged in the UI, never rejected. The single-column
    /// max width is a reading measure rather than a rhythm value and is
    /// not checked.
    pub fn breaks_grid(self, value: u32) -> bool {
        self != Self::SingleColumnMaxWidth && value % 8 != 0
    }
}

// ── Typography ──────────────────────────────────────────────────────

/// Font family selector for the mock page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Default,
    Raleway,
}

impl FontFamily {
    pub const ALL: &'static [FontFamily] = &[FontFamily::Default, FontFamily::Raleway];

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default (System)",
            Self::Raleway => "Raleway",
        }
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Typography settings for one breakpoint.
///
/// Sizes are pixels; line heights are unitless multipliers; letter
/// spacings are em fractions; weights are CSS weight numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyConfig {
    pub font_family: FontFamily,
    pub h1_size: u32,
    pub h2_size: u32,
    pub h3_size: u32,
    pub p1_size: u32,
    pub p2_size: u32,
    pub heading_line_height: f32,
    pub body_line_height: f32,
    pub heading_letter_spacing: f32,
    pub body_letter_spacing: f32,
    pub heading_font_weight: u16,
    pub body_font_weight: u16,
}

/// A single typography mutation.
///
/// Global fields apply to all three breakpoints in one operation; the
/// rest target exactly one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypographyUpdate {
    FontFamily(FontFamily),
    HeadingLineHeight(f32),
    BodyLineHeight(f32),
    HeadingLetterSpacing(f32),
    BodyLetterSpacing(f32),
    H1Size(u32),
    H2Size(u32),
    H3Size(u32),
    P1Size(u32),
    P2Size(u32),
    HeadingFontWeight(u16),
    BodyFontWeight(u16),
}

impl TypographyUpdate {
    /// Global fields broadcast across breakpoints; sizes and weights
    /// stay breakpoint-specific.
    pub fn is_global(self) -> bool {
        matches!(
            self,
            Self::FontFamily(_)
                | Self::HeadingLineHeight(_)
                | Self::BodyLineHeight(_)
                | Self::HeadingLetterSpacing(_)
                | Self::BodyLetterSpacing(_)
        )
    }

    pub fn apply(self, config: &mut TypographyConfig) {
        match self {
            Self::FontFamily(v) => config.font_family = v,
            Self::HeadingLineHeight(v) => config.heading_line_height = v,
            Self::BodyLineHeight(v) => config.body_line_height = v,
            Self::HeadingLetterSpacing(v) => config.heading_letter_spacing = v,
            Self::BodyLetterSpacing(v) => config.body_letter_spacing = v,
            Self::H1Size(v) => config.h1_size = v,
            Self::H2Size(v) => config.h2_size = v,
            Self::H3Size(v) => config.h3_size = v,
            Self::P1Size(v) => config.p1_size = v,
            Self::P2Size(v) => config.p2_size = v,
            Self::HeadingFontWeight(v) => config.heading_font_weight = v,
            Self::BodyFontWeight(v) => config.body_font_weight = v,
        }
    }
}

// ── Layout ──────────────────────────────────────────────────────────

/// Pane height: a fixed pixel count, or auto to match the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "PreviewHeightRepr", into = "PreviewHeightRepr")]
pub enum PreviewHeight {
    #[default]
    Auto,
    Px(u32),
}

/// Wire shape: either the string `"auto"` or a bare pixel number.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PreviewHeightRepr {
    Px(u32),
    Tag(String),
}

impl From<PreviewHeightRepr> for PreviewHeight {
    fn from(repr: PreviewHeightRepr) -> Self {
        match repr {
            PreviewHeightRepr::Px(px) => PreviewHeight::Px(px),
            PreviewHeightRepr::Tag(_) => PreviewHeight::Auto,
        }
    }
}

impl From<PreviewHeight> for PreviewHeightRepr {
    fn from(height: PreviewHeight) -> Self {
        match height {
            PreviewHeight::Px(px) => PreviewHeightRepr::Px(px),
            PreviewHeight::Auto => PreviewHeightRepr::Tag("auto".into()),
        }
    }
}

/// Preview pane options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    pub preview_height: PreviewHeight,
    pub show_distance_measurement: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            preview_height: PreviewHeight::Auto,
            show_distance_measurement: false,
        }
    }
}

// ── Built-in defaults ───────────────────────────────────────────────

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Raleway,
            h1_size: 61,
            h2_size: 49,
            h3_size: 25,
            p1_size: 16,
            p2_size: 13,
            heading_line_height: 1.15,
            body_line_height: 1.6,
            heading_letter_spacing: -0.022,
            body_letter_spacing: 0.0,
            heading_font_weight: 700,
            body_font_weight: 400,
        }
    }
}

/// Default typography is identical for every breakpoint.
pub fn default_typography() -> BreakpointSet<TypographyConfig> {
    BreakpointSet::uniform(TypographyConfig::default())
}

pub fn default_spacing() -> BreakpointSet<SpacingConfig> {
    BreakpointSet {
        desktop: SpacingConfig {
            page_padding_top_bottom: 0,
            page_padding_left_right: 0,
            section_padding_top_bottom: 96,
            section_padding_left_right: 64,
            major_sections: 48,
            subsections: 24,
            h1_to_content: 32,
            h2_to_next: 32,
            h3_to_content: 24,
            subtitle_to_h2: 24,
            above_buttons: 24,
            paragraph_spacing: 26,
            bullet_points: 16,
            grid_gap2_col_horizontal: 40,
            grid_gap2_col_vertical: 40,
            grid_gap3_col_horizontal: 32,
            grid_gap3_col_vertical: 32,
            grid_gap4_col_horizontal: 24,
            grid_gap4_col_vertical: 24,
            single_column_max_width: 720,
        },
        tablet: SpacingConfig {
            page_padding_top_bottom: 0,
            page_padding_left_right: 0,
            section_padding_top_bottom: 72,
            section_padding_left_right: 48,
            major_sections: 40,
            subsections: 20,
            h1_to_content: 24,
            h2_to_next: 24,
            h3_to_content: 12,
            subtitle_to_h2: 20,
            above_buttons: 20,
            paragraph_spacing: 22,
            bullet_points: 12,
            grid_gap2_col_horizontal: 32,
            grid_gap2_col_vertical: 32,
            grid_gap3_col_horizontal: 24,
            grid_gap3_col_vertical: 24,
            grid_gap4_col_horizontal: 16,
            grid_gap4_col_vertical: 16,
            single_column_max_width: 640,
        },
        mobile: SpacingConfig {
            page_padding_top_bottom: 0,
            page_padding_left_right: 0,
            section_padding_top_bottom: 56,
            section_padding_left_right: 24,
            major_sections: 32,
            subsections: 16,
            h1_to_content: 24,
            h2_to_next: 24,
            h3_to_content: 24,
            subtitle_to_h2: 16,
            above_buttons: 16,
            paragraph_spacing: 20,
            bullet_points: 12,
            grid_gap2_col_horizontal: 24,
            grid_gap2_col_vertical: 24,
            grid_gap3_col_horizontal: 16,
            grid_gap3_col_vertical: 16,
            grid_gap4_col_horizontal: 12,
            grid_gap4_col_vertical: 12,
            // Full width on mobile.
            single_column_max_width: 0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_serializes_camel_case() {
        let json = serde_json::to_value(default_spacing()).unwrap();
        let desktop = &json["desktop"];
        assert_eq!(desktop["sectionPaddingTopBottom"], 96);
        assert_eq!(desktop["gridGap2ColHorizontal"], 40);
        assert_eq!(desktop["singleColumnMaxWidth"], 720);
    }

    #[test]
    fn typography_round_trips() {
        let set = default_typography();
        let json = serde_json::to_string(&set).unwrap();
        let back: BreakpointSet<TypographyConfig> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
        assert_eq!(
            serde_json::to_value(&set).unwrap()["mobile"]["fontFamily"],
            "raleway"
        );
    }

    #[test]
    fn preview_height_wire_shape() {
        let auto = serde_json::to_value(PreviewHeight::Auto).unwrap();
        assert_eq!(auto, serde_json::json!("auto"));
        let fixed: PreviewHeight = serde_json::from_value(serde_json::json!(800)).unwrap();
        assert_eq!(fixed, PreviewHeight::Px(800));
    }

    #[test]
    fn grid_flag_exempts_max_width() {
        assert!(SpacingField::ParagraphSpacing.breaks_grid(26));
        assert!(!SpacingField::ParagraphSpacing.breaks_grid(24));
        assert!(!SpacingField::SingleColumnMaxWidth.breaks_grid(721));
    }

    #[test]
    fn global_update_classification() {
        assert!(TypographyUpdate::FontFamily(FontFamily::Default).is_global());
        assert!(TypographyUpdate::BodyLetterSpacing(0.01).is_global());
        assert!(!TypographyUpdate::H1Size(60).is_global());
        assert!(!TypographyUpdate::HeadingFontWeight(600).is_global());
    }

    #[test]
    fn field_accessors_cover_all_fields() {
        let mut config = default_spacing().desktop;
        for &field in SpacingField::ALL {
            let before = field.get(&config);
            field.set(&mut config, before + 8);
            assert_eq!(field.get(&config), before + 8, "{field:?}");
        }
    }
}
