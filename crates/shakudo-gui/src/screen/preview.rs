//! Live mock page preview with the distance measurement overlay.
//!
//! The page geometry comes precomputed from `shakudo_core::layout`;
//! this module only rasterizes it onto a canvas and runs the overlay.
//! The static page is cached; hover state and measurement lines live
//! in the canvas `State` and are redrawn on top.

use iced::alignment::Vertical;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::widget::{container, text};
use iced::{mouse, Element, Length, Pixels, Rectangle, Renderer, Size, Theme};

use shakudo_core::layout::{build_mock_page, ElementKind, MockPage, SectionKind};
use shakudo_core::measure::{
    self, ElementId, MeasureOptions, MeasurementLine, Orientation, Point,
};
use shakudo_core::model::{Breakpoint, FontFamily, PreviewHeight, TypographyConfig};
use shakudo_core::store::SettingsStore;
use shakudo_core::typography::{style_for, TextRole};

use crate::style;
use crate::theme::{ColorScheme, PagePalette};
use crate::widgets::styled_scrollable;

const BUTTON_RADIUS: f32 = 6.0;
const BOX_RADIUS: f32 = 8.0;
const MARKER_HALF: f32 = 3.0;
const LABEL_SIZE: f32 = 11.0;
const LABEL_STEP: f32 = 30.0;
const NOTE_SIZE: f32 = 12.0;

/// Preview screen state: the laid-out page for the active breakpoint.
pub struct Preview {
    page: MockPage,
    typography: TypographyConfig,
    palette: PagePalette,
    cache: canvas::Cache,
    generation: u64,
}

impl Preview {
    pub fn new(store: &SettingsStore, breakpoint: Breakpoint) -> Self {
        Self {
            page: build_mock_page(
                store.spacing.get(breakpoint),
                store.typography.get(breakpoint),
                breakpoint,
            ),
            typography: *store.typography.get(breakpoint),
            palette: PagePalette::new(),
            cache: canvas::Cache::new(),
            generation: 0,
        }
    }

    /// Relayout after any settings or breakpoint change.
    pub fn refresh(&mut self, store: &SettingsStore, breakpoint: Breakpoint) {
        self.page = build_mock_page(
            store.spacing.get(breakpoint),
            store.typography.get(breakpoint),
            breakpoint,
        );
        self.typography = *store.typography.get(breakpoint);
        self.generation += 1;
        self.cache.clear();
    }

    pub fn view<'a, Message: 'a>(
        &'a self,
        cs: &ColorScheme,
        store: &SettingsStore,
    ) -> Element<'a, Message> {
        let canvas = Canvas::new(PageCanvas {
            page: &self.page,
            typography: &self.typography,
            palette: &self.palette,
            show_measurements: store.layout.show_distance_measurement,
            options: MeasureOptions::default(),
            cache: &self.cache,
            generation: self.generation,
        })
        .width(Length::Fixed(self.page.width))
        .height(Length::Fixed(self.page.height));

        let sheet = container(canvas)
            .width(Length::Fill)
            .align_x(iced::Alignment::Center)
            .padding(style::SPACE_XL);

        let viewport = styled_scrollable(sheet, cs).width(Length::Fill);
        let viewport: Element<'a, Message> = match store.layout.preview_height {
            PreviewHeight::Auto => viewport.height(Length::Fill).into(),
            PreviewHeight::Px(px) => viewport.height(Length::Fixed(px as f32)).into(),
        };

        container(viewport)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

// ── Canvas program ──────────────────────────────────────────────────

struct PageCanvas<'a> {
    page: &'a MockPage,
    typography: &'a TypographyConfig,
    palette: &'a PagePalette,
    show_measurements: bool,
    options: MeasureOptions,
    cache: &'a canvas::Cache,
    generation: u64,
}

#[derive(Default)]
struct Hover {
    element: Option<ElementId>,
    lines: Vec<MeasurementLine>,
    generation: u64,
}

impl<'a, Message> canvas::Program<Message> for PageCanvas<'a> {
    type State = Hover;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        // Hover state computed against an older layout is stale;
        // rebuild it against the current geometry first.
        if state.generation != self.generation {
            state.generation = self.generation;
            state.element = self.element_under(bounds, cursor);
            state.lines = self.lines_for(state.element);
            return Some(canvas::Action::request_redraw());
        }

        match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let hovered = self.element_under(bounds, cursor);
                if hovered == state.element {
                    return None;
                }
                state.element = hovered;
                state.lines = self.lines_for(hovered);
                Some(canvas::Action::request_redraw())
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                if state.element.is_none() {
                    return None;
                }
                state.element = None;
                state.lines.clear();
                Some(canvas::Action::request_redraw())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let page = self.cache.draw(renderer, bounds.size(), |frame| {
            self.draw_page(frame);
        });

        let mut overlay = Frame::new(renderer, bounds.size());
        if self.show_measurements && state.generation == self.generation {
            self.draw_overlay(&mut overlay, state);
        }

        vec![page, overlay.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if self.show_measurements && state.element.is_some() {
            mouse::Interaction::Crosshair
        } else {
            mouse::Interaction::default()
        }
    }
}

impl PageCanvas<'_> {
    fn element_under(&self, bounds: Rectangle, cursor: mouse::Cursor) -> Option<ElementId> {
        cursor
            .position_in(bounds)
            .and_then(|p| self.page.element_at(Point::new(p.x, p.y)))
    }

    fn lines_for(&self, hovered: Option<ElementId>) -> Vec<MeasurementLine> {
        match hovered {
            Some(id) if self.show_measurements => measure::measure(self.page, id, &self.options),
            _ => Vec::new(),
        }
    }

    fn draw_page(&self, frame: &mut Frame) {
        let palette = self.palette;
        frame.fill_rectangle(
            iced::Point::ORIGIN,
            Size::new(self.page.width, self.page.height),
            palette.page,
        );

        for section in &self.page.sections {
            let fill = match section.kind {
                SectionKind::Meta => palette.meta_fill,
                SectionKind::Hero => palette.hero_fill,
                SectionKind::Content => palette.content_fill,
                SectionKind::Grid => palette.grid_fill,
                SectionKind::SingleColumn => palette.single_fill,
            };
            frame.fill(
                &Path::rounded_rectangle(
                    iced::Point::new(section.rect.x, section.rect.y),
                    Size::new(section.rect.width, section.rect.height),
                    BOX_RADIUS.into(),
                ),
                fill,
            );
        }

        for element in &self.page.elements {
            let rect = element.rect;
            match &element.kind {
                ElementKind::Text { lines, role } => {
                    let color = if role.is_heading() {
                        palette.text
                    } else {
                        palette.muted
                    };
                    self.draw_lines(frame, lines, *role, rect.x, rect.y, color);
                }
                ElementKind::Button { label } => {
                    frame.fill(
                        &Path::rounded_rectangle(
                            iced::Point::new(rect.x, rect.y),
                            Size::new(rect.width, rect.height),
                            BUTTON_RADIUS.into(),
                        ),
                        palette.button_fill,
                    );
                    let body = style_for(self.typography, TextRole::P1);
                    frame.fill_text(canvas::Text {
                        content: label.clone(),
                        position: iced::Point::new(rect.center_x(), rect.center_y()),
                        color: palette.button_text,
                        size: Pixels(body.font_size),
                        font: page_font(self.typography.font_family, body.font_weight),
                        align_x: text::Alignment::Center,
                        align_y: Vertical::Center,
                        ..canvas::Text::default()
                    });
                }
                ElementKind::Box { label, role } => {
                    frame.fill(
                        &Path::rounded_rectangle(
                            iced::Point::new(rect.x, rect.y),
                            Size::new(rect.width, rect.height),
                            BOX_RADIUS.into(),
                        ),
                        palette.box_fill,
                    );
                    if !label.is_empty() {
                        let caption = style_for(self.typography, *role);
                        frame.fill_text(canvas::Text {
                            content: label.clone(),
                            position: iced::Point::new(rect.center_x(), rect.center_y()),
                            color: palette.box_text,
                            size: Pixels(caption.font_size),
                            font: page_font(self.typography.font_family, caption.font_weight),
                            align_x: text::Alignment::Center,
                            align_y: Vertical::Center,
                            ..canvas::Text::default()
                        });
                    }
                }
                ElementKind::Note { text: note } => {
                    frame.fill_text(canvas::Text {
                        content: note.clone(),
                        position: iced::Point::new(rect.center_x(), rect.center_y()),
                        color: palette.note_text,
                        size: Pixels(NOTE_SIZE),
                        font: iced::Font::default(),
                        align_x: text::Alignment::Center,
                        align_y: Vertical::Center,
                        ..canvas::Text::default()
                    });
                }
            }
        }
    }

    fn draw_lines(
        &self,
        frame: &mut Frame,
        lines: &[String],
        role: TextRole,
        x: f32,
        y: f32,
        color: iced::Color,
    ) {
        let text_style = style_for(self.typography, role);
        let line_px = text_style.line_px();
        let font = page_font(self.typography.font_family, text_style.font_weight);
        for (i, line) in lines.iter().enumerate() {
            frame.fill_text(canvas::Text {
                content: line.clone(),
                position: iced::Point::new(x, y + i as f32 * line_px + line_px / 2.0),
                color,
                size: Pixels(text_style.font_size),
                font,
                align_x: text::Alignment::Left,
                align_y: Vertical::Center,
                ..canvas::Text::default()
            });
        }
    }

    fn draw_overlay(&self, frame: &mut Frame, state: &Hover) {
        let palette = self.palette;
        let Some(id) = state.element else {
            return;
        };
        let Some(element) = self.page.element(id) else {
            return;
        };

        // Hovered element highlight.
        let rect = element.rect;
        frame.fill_rectangle(
            iced::Point::new(rect.x, rect.y),
            Size::new(rect.width, rect.height),
            palette.hover_fill,
        );
        frame.stroke(
            &Path::rectangle(
                iced::Point::new(rect.x, rect.y),
                Size::new(rect.width, rect.height),
            ),
            Stroke::default()
                .with_width(1.5)
                .with_color(palette.hover_border),
        );

        for (index, line) in state.lines.iter().enumerate() {
            let start = iced::Point::new(line.start.x, line.start.y);
            let end = iced::Point::new(line.end.x, line.end.y);
            frame.stroke(
                &Path::line(start, end),
                Stroke::default().with_width(1.5).with_color(palette.measure),
            );

            // Square end markers.
            for point in [start, end] {
                frame.fill_rectangle(
                    iced::Point::new(point.x - MARKER_HALF, point.y - MARKER_HALF),
                    Size::new(2.0 * MARKER_HALF, 2.0 * MARKER_HALF),
                    palette.measure,
                );
            }

            self.draw_label(frame, line, index);
        }
    }

    /// Pixel label beside a measurement line. Labels stack outward by a
    /// fixed step per line index so adjacent ones stay legible.
    fn draw_label(&self, frame: &mut Frame, line: &MeasurementLine, index: usize) {
        let palette = self.palette;
        let stagger = index as f32 * LABEL_STEP;
        let mid_x = (line.start.x + line.end.x) / 2.0;
        let mid_y = (line.start.y + line.end.y) / 2.0;
        let (label_x, label_y) = match line.orientation {
            Orientation::Vertical => (mid_x + 10.0 + stagger, mid_y),
            Orientation::Horizontal => (mid_x, mid_y - 16.0 - stagger),
        };

        let width = line.label.chars().count() as f32 * LABEL_SIZE * 0.62 + 10.0;
        let box_x = match line.orientation {
            Orientation::Vertical => label_x,
            Orientation::Horizontal => label_x - width / 2.0,
        };
        frame.fill(
            &Path::rounded_rectangle(
                iced::Point::new(box_x, label_y - 9.0),
                Size::new(width, 18.0),
                3.0.into(),
            ),
            palette.measure,
        );
        frame.fill_text(canvas::Text {
            content: line.label.clone(),
            position: iced::Point::new(box_x + width / 2.0, label_y),
            color: palette.label_text,
            size: Pixels(LABEL_SIZE),
            font: iced::Font::default(),
            align_x: text::Alignment::Center,
            align_y: Vertical::Center,
            ..canvas::Text::default()
        });
    }
}

/// Map the configured font family and CSS weight onto an iced font.
fn page_font(family: FontFamily, weight: u16) -> iced::Font {
    use iced::font::Weight;

    let mut font = match family {
        FontFamily::Raleway => iced::Font::with_name("Raleway"),
        FontFamily::Default => iced::Font::default(),
    };
    font.weight = match weight {
        700.. => Weight::Bold,
        600..=699 => Weight::Semibold,
        500..=599 => Weight::Medium,
        _ => Weight::Normal,
    };
    font
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakudo_core::model::{default_spacing, default_typography};

    #[test]
    fn relayout_rebuilds_hover_state() {
        let spacing = default_spacing();
        let typography = default_typography();
        let page = build_mock_page(&spacing.desktop, &typography.desktop, Breakpoint::Desktop);
        let palette = PagePalette::new();
        let cache = canvas::Cache::new();
        let bounds = Rectangle::new(iced::Point::ORIGIN, Size::new(page.width, page.height));

        let program = PageCanvas {
            page: &page,
            typography: &typography.desktop,
            palette: &palette,
            show_measurements: true,
            options: MeasureOptions::default(),
            cache: &cache,
            generation: 0,
        };

        let target = page.elements.first().unwrap().rect;
        let position = iced::Point::new(target.x + 1.0, target.y + 1.0);
        let moved = iced::Event::Mouse(mouse::Event::CursorMoved { position });
        let mut state = Hover::default();
        canvas::Program::<()>::update(
            &program,
            &mut state,
            &moved,
            bounds,
            mouse::Cursor::Available(position),
        );
        assert!(state.element.is_some());
        assert!(!state.lines.is_empty());

        // A newer layout with the cursor gone invalidates the hover.
        let relaid = PageCanvas {
            generation: 1,
            ..program
        };
        canvas::Program::<()>::update(
            &relaid,
            &mut state,
            &moved,
            bounds,
            mouse::Cursor::Unavailable,
        );
        assert_eq!(state.generation, 1);
        assert!(state.element.is_none());
        assert!(state.lines.is_empty());
    }
}
