//! Mock page layout: turns one breakpoint's spacing + typography
//! configuration into positioned rectangles for a fixed template.
//!
//! There is no general layout engine here, only the vertical flow and
//! simple grids the template needs. Every inter-element gap comes from
//! a [`SpacingConfig`] field, so the rendered page is a live preview of
//! the token values. The produced geometry doubles as the
//! [`LayoutGeometry`] the measurement overlay reads.

use crate::measure::{ElementId, LayoutGeometry, Point, Rect, ScopeId};
use crate::model::{Breakpoint, SpacingConfig, TypographyConfig};
use crate::typography::{style_for, TextRole, TextStyle};

// Fixed template chrome, independent of the configurable tokens.
const TITLE_GAP: f32 = 16.0;
const CAPTION_GAP: f32 = 12.0;
const GROUP_GAP: f32 = 16.0;
const HEADING_GAP: f32 = 8.0;
const META_GAP: f32 = 24.0;
const NOTE_PAD: f32 = 8.0;
const BOX_PAD: f32 = 16.0;
const GRID_ITEM_PAD: f32 = 12.0;
const BUTTON_PAD_X: f32 = 16.0;
const BUTTON_PAD_Y: f32 = 8.0;
const PLACEHOLDER_MIN_HEIGHT: f32 = 120.0;
const MOBILE_STACK_GAP: f32 = 16.0;
const NOTE_SIZE: f32 = 12.0;
const NOTE_LINE: f32 = 1.4;

// Average glyph advance as a fraction of the font size; tuned for the
// sans-serif faces the tool previews.
const GLYPH_FRACTION: f32 = 0.52;

// ── Page model ──────────────────────────────────────────────────────

/// The five section scope categories recognized by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Page-variables info box (not part of the rendered design).
    Meta,
    Hero,
    Content,
    Grid,
    SingleColumn,
}

/// Drawable payload of a measurable element.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Wrapped text lines in a template role.
    Text { lines: Vec<String>, role: TextRole },
    /// A call-to-action button (P1-styled label).
    Button { label: String },
    /// A filled box with a centered label (image placeholders, grid cells).
    Box { label: String, role: TextRole },
    /// Small annotation text outside the design's type scale.
    Note { text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageElement {
    pub id: ElementId,
    pub section: ScopeId,
    pub rect: Rect,
    pub kind: ElementKind,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSection {
    pub kind: SectionKind,
    pub rect: Rect,
}

/// A fully laid out mock page for one breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct MockPage {
    pub breakpoint: Breakpoint,
    pub width: f32,
    pub height: f32,
    pub sections: Vec<PageSection>,
    pub elements: Vec<PageElement>,
}

impl MockPage {
    /// Innermost element under `point`, matching DOM-style hit testing
    /// where the most specific target wins.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.rect.contains(point))
            .min_by(|a, b| a.rect.area().total_cmp(&b.rect.area()))
            .map(|e| e.id)
    }

    pub fn element(&self, id: ElementId) -> Option<&PageElement> {
        self.elements.get(id.0)
    }

    pub fn section(&self, id: ScopeId) -> Option<&PageSection> {
        self.sections.get(id.0)
    }
}

impl LayoutGeometry for MockPage {
    fn bounds_of(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(id.0).map(|e| e.rect)
    }

    fn scope_of(&self, id: ElementId) -> Option<ScopeId> {
        self.elements.get(id.0).map(|e| e.section)
    }

    fn children_of(&self, scope: ScopeId) -> Vec<ElementId> {
        self.elements
            .iter()
            .filter(|e| e.section == scope)
            .map(|e| e.id)
            .collect()
    }
}

// ── Text estimation ─────────────────────────────────────────────────

/// Greedy word wrap against a character budget derived from the font
/// size. Deterministic, so layout and drawing always agree.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let glyph = style.font_size * GLYPH_FRACTION;
    let budget = ((max_width / glyph).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= budget {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn text_width(text: &str, style: &TextStyle) -> f32 {
    text.chars().count() as f32 * style.font_size * GLYPH_FRACTION
}

// ── Builder ─────────────────────────────────────────────────────────

struct PageBuilder<'a> {
    spacing: &'a SpacingConfig,
    typography: &'a TypographyConfig,
    breakpoint: Breakpoint,
    sections: Vec<PageSection>,
    elements: Vec<PageElement>,
}

impl<'a> PageBuilder<'a> {
    fn style(&self, role: TextRole) -> TextStyle {
        style_for(self.typography, role)
    }

    fn note_style(&self) -> TextStyle {
        TextStyle {
            font_family: "system-ui, -apple-system, sans-serif",
            font_size: NOTE_SIZE,
            line_height: NOTE_LINE,
            letter_spacing: 0.0,
            font_weight: 500,
        }
    }

    fn push(&mut self, section: ScopeId, rect: Rect, kind: ElementKind) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(PageElement {
            id,
            section,
            rect,
            kind,
        });
        id
    }

    /// Lay out a text block at (x, y) constrained to `width`; returns
    /// the block height.
    fn text_block(
        &mut self,
        section: ScopeId,
        role: TextRole,
        text: &str,
        x: f32,
        y: f32,
        width: f32,
    ) -> f32 {
        let style = self.style(role);
        let lines = wrap_text(text, &style, width);
        let height = lines.len() as f32 * style.line_px();
        self.push(
            section,
            Rect::new(x, y, width, height),
            ElementKind::Text { lines, role },
        );
        height
    }

    fn note(&mut self, section: ScopeId, text: &str, x: f32, y: f32, width: f32) -> f32 {
        let style = self.note_style();
        let lines = wrap_text(text, &style, width - 2.0 * NOTE_PAD);
        let height = lines.len() as f32 * style.line_px() + 2.0 * NOTE_PAD;
        self.push(
            section,
            Rect::new(x, y, width, height),
            ElementKind::Note {
                text: text.to_string(),
            },
        );
        height
    }

    fn button(&mut self, section: ScopeId, label: &str, x: f32, y: f32) -> f32 {
        let style = self.style(TextRole::P1);
        let width = text_width(label, &style) + 2.0 * BUTTON_PAD_X;
        let height = style.line_px() + 2.0 * BUTTON_PAD_Y;
        self.push(
            section,
            Rect::new(x, y, width, height),
            ElementKind::Button {
                label: label.to_string(),
            },
        );
        height
    }
}

/// Lay out the fixed template for one breakpoint.
pub fn build_mock_page(
    spacing: &SpacingConfig,
    typography: &TypographyConfig,
    breakpoint: Breakpoint,
) -> MockPage {
    let width = breakpoint.preview_width();
    let mut b = PageBuilder {
        spacing,
        typography,
        breakpoint,
        sections: Vec::new(),
        elements: Vec::new(),
    };

    let page_pad_x = spacing.page_padding_left_right as f32;
    let page_pad_y = spacing.page_padding_top_bottom as f32;
    let content_x = page_pad_x;
    let content_w = width - 2.0 * page_pad_x;

    let mut y = page_pad_y;

    y += meta_section(&mut b, content_x, y, content_w);
    y += META_GAP;

    y += hero_section(&mut b, content_x, y, content_w);
    y += spacing.major_sections as f32;

    y += subsection(&mut b, content_x, y, content_w);
    y += spacing.subsections as f32;

    y += two_column_section(
        &mut b,
        content_x,
        y,
        content_w,
        "Content + Image Layout",
        TwoColumnBody::ContentAndImage,
    );
    y += spacing.subsections as f32;

    y += two_column_section(
        &mut b,
        content_x,
        y,
        content_w,
        "Text + Text Layout",
        TwoColumnBody::TextAndText,
    );
    y += spacing.subsections as f32;

    y += grid_section(&mut b, content_x, y, content_w);
    y += spacing.subsections as f32;

    y += single_column_section(&mut b, content_x, y, content_w);
    y += page_pad_y;

    MockPage {
        breakpoint,
        width,
        height: y,
        sections: b.sections,
        elements: b.elements,
    }
}

/// Open a section, run `body` against its inner box, and close the
/// section rect around the content plus padding. Returns the section's
/// outer height.
fn section_with(
    b: &mut PageBuilder,
    kind: SectionKind,
    x: f32,
    y: f32,
    width: f32,
    body: impl FnOnce(&mut PageBuilder, ScopeId, f32, f32, f32) -> f32,
) -> f32 {
    let pad_y = b.spacing.section_padding_top_bottom as f32;
    let pad_x = b.spacing.section_padding_left_right as f32;
    let scope = ScopeId(b.sections.len());
    // Placeholder; the rect is fixed up after the body runs.
    b.sections.push(PageSection {
        kind,
        rect: Rect::new(x, y, width, 0.0),
    });

    let inner_x = x + pad_x;
    let inner_w = (width - 2.0 * pad_x).max(1.0);
    let mut inner_y = y + pad_y;

    // Padding indicator shown at the top of every rendered section.
    let note = format!(
        "Section padding applied: {}px top/bottom, {}px left/right",
        b.spacing.section_padding_top_bottom, b.spacing.section_padding_left_right
    );
    inner_y += b.note(scope, &note, inner_x, inner_y, inner_w);
    inner_y += GROUP_GAP;

    let body_height = body(b, scope, inner_x, inner_y, inner_w);
    let height = (inner_y + body_height + pad_y) - y;
    b.sections[scope.0].rect = Rect::new(x, y, width, height);
    height
}

fn meta_section(b: &mut PageBuilder, x: f32, y: f32, width: f32) -> f32 {
    let scope = ScopeId(b.sections.len());
    b.sections.push(PageSection {
        kind: SectionKind::Meta,
        rect: Rect::new(x, y, width, 0.0),
    });

    let inner_x = x + BOX_PAD;
    let inner_w = width - 2.0 * BOX_PAD;
    let mut inner_y = y + BOX_PAD;

    inner_y += b.text_block(
        scope,
        TextRole::P2,
        "Page Variables (Not Rendered)",
        inner_x,
        inner_y,
        inner_w,
    );
    inner_y += HEADING_GAP;
    inner_y += b.note(
        scope,
        &format!(
            "Page Padding (Top/Bottom): {}px",
            b.spacing.page_padding_top_bottom
        ),
        inner_x,
        inner_y,
        inner_w,
    );
    inner_y += HEADING_GAP;
    inner_y += b.note(
        scope,
        &format!(
            "Page Padding (Left/Right): {}px",
            b.spacing.page_padding_left_right
        ),
        inner_x,
        inner_y,
        inner_w,
    );

    let height = (inner_y + BOX_PAD) - y;
    b.sections[scope.0].rect = Rect::new(x, y, width, height);
    height
}

fn hero_section(b: &mut PageBuilder, x: f32, y: f32, width: f32) -> f32 {
    let h1_gap = b.spacing.h1_to_content as f32;
    let para_gap = b.spacing.paragraph_spacing as f32;
    section_with(b, SectionKind::Hero, x, y, width, |b, scope, x, y, w| {
        let mut cursor = y;
        cursor += b.text_block(scope, TextRole::H1, "H1 Section Title", x, cursor, w);
        cursor += h1_gap;
        cursor += b.text_block(
            scope,
            TextRole::P1,
            "This content follows the H1 with proper hierarchical spacing \
             to establish clear visual relationships.",
            x,
            cursor,
            w,
        );
        cursor += para_gap;
        cursor += b.text_block(
            scope,
            TextRole::P1,
            "Natural paragraph spacing maintains reading flow while \
             respecting the overall design system.",
            x,
            cursor,
            w,
        );
        cursor - y
    })
}

fn subsection(b: &mut PageBuilder, x: f32, y: f32, width: f32) -> f32 {
    let s = b.spacing;
    let (subtitle_gap, h2_gap, h3_gap, bullet_gap, button_gap) = (
        s.subtitle_to_h2 as f32,
        s.h2_to_next as f32,
        s.h3_to_content as f32,
        s.bullet_points as f32,
        s.above_buttons as f32,
    );
    section_with(b, SectionKind::Content, x, y, width, |b, scope, x, y, w| {
        let mut cursor = y;
        cursor += b.text_block(scope, TextRole::P2, "Section Label", x, cursor, w);
        cursor += subtitle_gap;
        cursor += b.text_block(scope, TextRole::H2, "H2 Subsection Header", x, cursor, w);
        cursor += h2_gap;
        cursor += b.text_block(
            scope,
            TextRole::P1,
            "Content that follows an H2 uses transition spacing to create clear separation.",
            x,
            cursor,
            w,
        );
        cursor += h3_gap;
        cursor += b.text_block(scope, TextRole::H3, "H3 Subsection", x, cursor, w);
        cursor += h3_gap;
        for (i, bullet) in [
            "• First bullet point with proper spacing",
            "• Second bullet point",
            "• Third bullet point",
        ]
        .iter()
        .enumerate()
        {
            if i > 0 {
                cursor += bullet_gap;
            }
            cursor += b.text_block(scope, TextRole::P1, bullet, x, cursor, w);
        }
        cursor += button_gap;
        cursor += b.button(scope, "Action Button", x, cursor);
        cursor - y
    })
}

enum TwoColumnBody {
    ContentAndImage,
    TextAndText,
}

fn two_column_section(
    b: &mut PageBuilder,
    x: f32,
    y: f32,
    width: f32,
    title: &str,
    body: TwoColumnBody,
) -> f32 {
    let s = b.spacing;
    let gap_h = s.grid_gap2_col_horizontal as f32;
    let button_gap = s.above_buttons as f32;
    let stacked = b.breakpoint == Breakpoint::Mobile;
    let title = title.to_string();
    let caption = format!(
        "Gap: {}px × {}px",
        s.grid_gap2_col_horizontal, s.grid_gap2_col_vertical
    );

    section_with(b, SectionKind::Content, x, y, width, |b, scope, x, y, w| {
        let mut cursor = y;
        cursor += b.text_block(scope, TextRole::H2, &title, x, cursor, w);
        cursor += TITLE_GAP;
        cursor += b.text_block(scope, TextRole::P2, &caption, x, cursor, w);
        cursor += CAPTION_GAP;

        let col_w = if stacked { w } else { (w - gap_h) / 2.0 };
        let right_x = if stacked { x } else { x + col_w + gap_h };

        match body {
            TwoColumnBody::ContentAndImage => {
                // Left column: heading, copy, CTA.
                let mut left = cursor;
                left += b.text_block(scope, TextRole::H2, "About Our Service", x, left, col_w);
                left += CAPTION_GAP;
                left += b.text_block(
                    scope,
                    TextRole::P1,
                    "We provide comprehensive solutions that help businesses \
                     grow and succeed in today's competitive market.",
                    x,
                    left,
                    col_w,
                );
                left += button_gap;
                left += b.button(scope, "Learn More", x, left);
                let left_h = left - cursor;

                let right_y = if stacked { left + MOBILE_STACK_GAP } else { cursor };
                let right_h = if stacked {
                    PLACEHOLDER_MIN_HEIGHT
                } else {
                    left_h.max(PLACEHOLDER_MIN_HEIGHT)
                };
                b.push(
                    scope,
                    Rect::new(right_x, right_y, col_w, right_h),
                    ElementKind::Box {
                        label: "Image Placeholder".into(),
                        role: TextRole::P2,
                    },
                );

                if stacked {
                    (right_y + right_h) - cursor
                } else {
                    left_h.max(right_h)
                }
            }
            TwoColumnBody::TextAndText => {
                let mut column = |b: &mut PageBuilder, cx: f32, cy: f32, head: &str, copy: &str| {
                    let mut col = cy;
                    col += b.text_block(scope, TextRole::H2, head, cx, col, col_w);
                    col += CAPTION_GAP;
                    col += b.text_block(scope, TextRole::P1, copy, cx, col, col_w);
                    col - cy
                };
                let left_h = column(
                    b,
                    x,
                    cursor,
                    "Our Mission",
                    "To deliver exceptional value through innovative solutions \
                     and outstanding customer service.",
                );
                if stacked {
                    let right_y = cursor + left_h + MOBILE_STACK_GAP;
                    let right_h = column(
                        b,
                        x,
                        right_y,
                        "Our Vision",
                        "To be the leading provider of transformative business \
                         solutions that empower organizations worldwide.",
                    );
                    (right_y + right_h) - cursor
                } else {
                    let right_h = column(
                        b,
                        right_x,
                        cursor,
                        "Our Vision",
                        "To be the leading provider of transformative business \
                         solutions that empower organizations worldwide.",
                    );
                    left_h.max(right_h)
                }
            }
        }
    })
}

fn grid_section(b: &mut PageBuilder, x: f32, y: f32, width: f32) -> f32 {
    let s = b.spacing;
    let grids: [(usize, usize, u32, u32, TextRole); 3] = [
        (2, 4, s.grid_gap2_col_horizontal, s.grid_gap2_col_vertical, TextRole::P1),
        (3, 6, s.grid_gap3_col_horizontal, s.grid_gap3_col_vertical, TextRole::P2),
        (4, 8, s.grid_gap4_col_horizontal, s.grid_gap4_col_vertical, TextRole::P2),
    ];

    section_with(b, SectionKind::Grid, x, y, width, |b, scope, x, y, w| {
        let mut cursor = y;
        cursor += b.text_block(scope, TextRole::H2, "Grid Examples", x, cursor, w);
        cursor += TITLE_GAP;

        for (i, (cols, items, gap_h, gap_v, role)) in grids.into_iter().enumerate() {
            if i > 0 {
                cursor += GROUP_GAP;
            }
            let heading = format!("{cols}-Column Grid ({gap_h}px × {gap_v}px gap)");
            cursor += b.text_block(scope, TextRole::H3, &heading, x, cursor, w);
            cursor += HEADING_GAP;

            let gap_h = gap_h as f32;
            let gap_v = gap_v as f32;
            let cell_w = (w - (cols as f32 - 1.0) * gap_h) / cols as f32;
            let style = b.style(role);
            let cell_h = style.line_px() + 2.0 * GRID_ITEM_PAD;

            let rows = items.div_ceil(cols);
            for item in 0..items {
                let row = item / cols;
                let col = item % cols;
                let label = if cols == 4 {
                    format!("{}", item + 1)
                } else {
                    format!("Item {}", item + 1)
                };
                b.push(
                    scope,
                    Rect::new(
                        x + col as f32 * (cell_w + gap_h),
                        cursor + row as f32 * (cell_h + gap_v),
                        cell_w,
                        cell_h,
                    ),
                    ElementKind::Box { label, role },
                );
            }
            cursor += rows as f32 * cell_h + (rows as f32 - 1.0) * gap_v;
        }
        cursor - y
    })
}

fn single_column_section(b: &mut PageBuilder, x: f32, y: f32, width: f32) -> f32 {
    let max_w = b.spacing.single_column_max_width as f32;
    let mobile = b.breakpoint == Breakpoint::Mobile;
    let caption = if mobile || max_w == 0.0 {
        "Max width: 100% (no limit)".to_string()
    } else {
        format!("Max width: {}px", b.spacing.single_column_max_width)
    };

    section_with(
        b,
        SectionKind::SingleColumn,
        x,
        y,
        width,
        |b, scope, x, y, w| {
            let mut cursor = y;
            cursor += b.text_block(scope, TextRole::H2, "Single Column Content", x, cursor, w);
            cursor += TITLE_GAP;

            // Centered reading column, uncapped on mobile.
            let column_w = if mobile || max_w == 0.0 {
                w
            } else {
                max_w.min(w)
            };
            let column_x = x + (w - column_w) / 2.0;
            let inner_x = column_x + BOX_PAD;
            let inner_w = column_w - 2.0 * BOX_PAD;
            let box_top = cursor;
            let mut inner_y = cursor + BOX_PAD;

            let box_id = b.push(
                scope,
                Rect::new(column_x, box_top, column_w, 0.0),
                ElementKind::Box {
                    label: String::new(),
                    role: TextRole::P1,
                },
            );

            inner_y += b.text_block(scope, TextRole::P2, &caption, inner_x, inner_y, inner_w);
            inner_y += HEADING_GAP;
            inner_y += b.text_block(
                scope,
                TextRole::P1,
                "This represents single-column content like blog posts, articles, \
                 or long-form text. The max-width constraint ensures optimal \
                 reading line length for better readability.",
                inner_x,
                inner_y,
                inner_w,
            );
            inner_y += TITLE_GAP;
            inner_y += b.text_block(
                scope,
                TextRole::P1,
                "On desktop and tablet, content is constrained to prevent overly \
                 long lines that become difficult to read. Mobile uses full width \
                 to maximize screen real estate.",
                inner_x,
                inner_y,
                inner_w,
            );

            let box_h = (inner_y + BOX_PAD) - box_top;
            b.elements[box_id.0].rect = Rect::new(column_x, box_top, column_w, box_h);
            (box_top + box_h) - y
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{self, MeasureOptions};
    use crate::model::{default_spacing, TypographyConfig};

    fn page(bp: Breakpoint) -> MockPage {
        let spacing = default_spacing();
        build_mock_page(spacing.get(bp), &TypographyConfig::default(), bp)
    }

    fn find_text(page: &MockPage, needle: &str) -> ElementId {
        page.elements
            .iter()
            .find(|e| match &e.kind {
                ElementKind::Text { lines, .. } => lines.join(" ").starts_with(needle),
                ElementKind::Button { label } | ElementKind::Box { label, .. } => label == needle,
                ElementKind::Note { text } => text.starts_with(needle),
            })
            .map(|e| e.id)
            .unwrap_or_else(|| panic!("element {needle:?} not found"))
    }

    #[test]
    fn template_has_all_section_categories() {
        let page = page(Breakpoint::Desktop);
        let kinds: Vec<SectionKind> = page.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Meta,
                SectionKind::Hero,
                SectionKind::Content,
                SectionKind::Content,
                SectionKind::Content,
                SectionKind::Grid,
                SectionKind::SingleColumn,
            ]
        );
    }

    #[test]
    fn hero_gap_follows_h1_to_content() {
        let page = page(Breakpoint::Desktop);
        let h1 = page.element(find_text(&page, "H1 Section Title")).unwrap();
        let p1 = page
            .element(find_text(&page, "This content follows the H1"))
            .unwrap();
        assert_eq!(p1.rect.top() - h1.rect.bottom(), 32.0);
    }

    #[test]
    fn section_gaps_follow_config() {
        let page = page(Breakpoint::Desktop);
        // Hero → subsection uses majorSections, later gaps use subsections.
        assert_eq!(
            page.sections[2].rect.top() - page.sections[1].rect.bottom(),
            48.0
        );
        assert_eq!(
            page.sections[3].rect.top() - page.sections[2].rect.bottom(),
            24.0
        );
    }

    #[test]
    fn elements_stay_inside_their_section() {
        let page = page(Breakpoint::Tablet);
        for element in &page.elements {
            let section = page.section(element.section).unwrap();
            assert!(
                element.rect.top() >= section.rect.top() - 0.5
                    && element.rect.bottom() <= section.rect.bottom() + 0.5,
                "{:?} escapes its section",
                element.kind
            );
        }
    }

    #[test]
    fn grid_cells_use_configured_gaps() {
        let page = page(Breakpoint::Desktop);
        let item1 = page.element(find_text(&page, "Item 1")).unwrap();
        let item2 = page.element(find_text(&page, "Item 2")).unwrap();
        let item3 = page.element(find_text(&page, "Item 3")).unwrap();
        // 2-column grid: 1|2 on the first row, 3 below 1.
        assert_eq!(item2.rect.left() - item1.rect.right(), 40.0);
        assert_eq!(item3.rect.top() - item1.rect.bottom(), 40.0);
    }

    #[test]
    fn mobile_stacks_two_column_layouts() {
        let page = page(Breakpoint::Mobile);
        let mission = page.element(find_text(&page, "Our Mission")).unwrap();
        let vision = page.element(find_text(&page, "Our Vision")).unwrap();
        assert_eq!(mission.rect.left(), vision.rect.left());
        assert!(vision.rect.top() > mission.rect.bottom());

        let desktop = self::page(Breakpoint::Desktop);
        let mission = desktop.element(find_text(&desktop, "Our Mission")).unwrap();
        let vision = desktop.element(find_text(&desktop, "Our Vision")).unwrap();
        assert!(vision.rect.left() > mission.rect.right());
    }

    #[test]
    fn single_column_respects_max_width() {
        let desktop = page(Breakpoint::Desktop);
        let card = desktop
            .elements
            .iter()
            .find(|e| matches!(&e.kind, ElementKind::Box { label, .. } if label.is_empty()))
            .unwrap();
        assert_eq!(card.rect.width, 720.0);

        let mobile = page(Breakpoint::Mobile);
        let section = mobile
            .sections
            .iter()
            .find(|s| s.kind == SectionKind::SingleColumn)
            .unwrap();
        let card = mobile
            .elements
            .iter()
            .find(|e| matches!(&e.kind, ElementKind::Box { label, .. } if label.is_empty()))
            .unwrap();
        let pad = mobile.breakpoint.preview_width()
            - section.rect.width
            + 2.0 * default_spacing().mobile.section_padding_left_right as f32;
        assert_eq!(card.rect.width, mobile.width - pad);
    }

    #[test]
    fn hit_testing_returns_innermost() {
        let page = page(Breakpoint::Desktop);
        let h1 = page.element(find_text(&page, "H1 Section Title")).unwrap();
        let center = Point::new(h1.rect.center_x(), h1.rect.center_y());
        assert_eq!(page.element_at(center), Some(h1.id));
    }

    #[test]
    fn measurement_over_real_page_reports_h1_gap() {
        let page = page(Breakpoint::Desktop);
        let h1 = find_text(&page, "H1 Section Title");
        let lines = measure::measure(&page, h1, &MeasureOptions::default());
        // The paragraph below sits h1ToContent away.
        assert!(lines
            .iter()
            .any(|l| l.orientation == measure::Orientation::Vertical && l.label == "32px"));
    }

    #[test]
    fn wrap_is_stable_and_nonempty() {
        let style = style_for(&TypographyConfig::default(), TextRole::P1);
        let lines = wrap_text("one two three four five six seven", &style, 120.0);
        assert!(!lines.is_empty());
        assert_eq!(
            lines,
            wrap_text("one two three four five six seven", &style, 120.0)
        );
        assert_eq!(wrap_text("", &style, 120.0), vec![String::new()]);
    }
}
