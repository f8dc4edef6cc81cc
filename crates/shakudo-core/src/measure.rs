//! Adjacent-element distance measurement.
//!
//! Given a hovered element, finds its nearest neighbor in each cardinal
//! direction within the same section scope and produces the measurement
//! lines drawn by the preview overlay. The algorithm only reads
//! rectangles through the [`LayoutGeometry`] trait, so it runs against
//! the live mock page and against synthetic fixtures alike.

// ── Geometry primitives ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in page coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

/// Index of a measurable element within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub usize);

/// Index of a section scope within a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub usize);

/// Read-only geometry capability the measurement algorithm runs against.
pub trait LayoutGeometry {
    /// Bounding rectangle of an element, if it exists.
    fn bounds_of(&self, id: ElementId) -> Option<Rect>;

    /// Section scope enclosing an element. `None` means the element sits
    /// outside every recognized section and nothing is measured.
    fn scope_of(&self, id: ElementId) -> Option<ScopeId>;

    /// All measurable elements inside a scope, including the hovered one.
    fn children_of(&self, scope: ScopeId) -> Vec<ElementId>;
}

// ── Options ─────────────────────────────────────────────────────────

/// Tunables for neighbor classification.
///
/// The alignment tolerance decides how far two edges may drift apart
/// while still counting as the same column (for above/below) or row
/// (for left/right). 50px is inherited behavior, not a law.
#[derive(Debug, Clone, Copy)]
pub struct MeasureOptions {
    pub alignment_tolerance: f32,
}

impl Default for MeasureOptions {
    fn default() -> Self {
        Self {
            alignment_tolerance: 50.0,
        }
    }
}

// ── Neighbor search ─────────────────────────────────────────────────

/// The nearest neighbor in each cardinal direction, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Neighbors {
    pub above: Option<ElementId>,
    pub below: Option<ElementId>,
    pub left: Option<ElementId>,
    pub right: Option<ElementId>,
}

/// Classify every sibling of `hovered` within its scope and keep the
/// closest qualifying candidate per direction.
///
/// A candidate counts as above/below when its left edge sits within the
/// alignment tolerance of the hovered left edge and it clears the
/// hovered element vertically; left/right mirrors this with top edges.
/// Ties on the facing edge keep the first candidate seen.
pub fn find_neighbors(
    geo: &impl LayoutGeometry,
    hovered: ElementId,
    options: &MeasureOptions,
) -> Neighbors {
    let mut neighbors = Neighbors::default();

    let Some(scope) = geo.scope_of(hovered) else {
        return neighbors;
    };
    let Some(target) = geo.bounds_of(hovered) else {
        return neighbors;
    };

    let tolerance = options.alignment_tolerance;

    // Track the facing edge of the current best candidate per direction.
    let mut best_above = f32::NEG_INFINITY;
    let mut best_below = f32::INFINITY;
    let mut best_left = f32::NEG_INFINITY;
    let mut best_right = f32::INFINITY;

    for candidate in geo.children_of(scope) {
        if candidate == hovered {
            continue;
        }
        let Some(rect) = geo.bounds_of(candidate) else {
            continue;
        };

        let column_aligned = (rect.left() - target.left()).abs() < tolerance;
        let row_aligned = (rect.top() - target.top()).abs() < tolerance;

        if column_aligned && rect.bottom() <= target.top() && rect.bottom() > best_above {
            best_above = rect.bottom();
            neighbors.above = Some(candidate);
        }
        if column_aligned && rect.top() >= target.bottom() && rect.top() < best_below {
            best_below = rect.top();
            neighbors.below = Some(candidate);
        }
        if row_aligned && rect.right() <= target.left() && rect.right() > best_left {
            best_left = rect.right();
            neighbors.left = Some(candidate);
        }
        if row_aligned && rect.left() >= target.right() && rect.left() < best_right {
            best_right = rect.left();
            neighbors.right = Some(candidate);
        }
    }

    neighbors
}

// ── Measurement lines ───────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One transient gap annotation between the hovered element and a
/// neighbor. Recomputed from scratch on every hover, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementLine {
    pub start: Point,
    pub end: Point,
    pub distance: f32,
    pub orientation: Orientation,
    pub label: String,
}

impl MeasurementLine {
    fn vertical(x: f32, from_y: f32, to_y: f32) -> Self {
        let distance = (from_y - to_y).abs();
        Self {
            start: Point::new(x, from_y),
            end: Point::new(x, to_y),
            distance,
            orientation: Orientation::Vertical,
            label: format!("{}px", distance.round() as i64),
        }
    }

    fn horizontal(y: f32, from_x: f32, to_x: f32) -> Self {
        let distance = (from_x - to_x).abs();
        Self {
            start: Point::new(from_x, y),
            end: Point::new(to_x, y),
            distance,
            orientation: Orientation::Horizontal,
            label: format!("{}px", distance.round() as i64),
        }
    }
}

/// Midpoint of the overlap of two spans, falling back to the mean of
/// their centers when they do not overlap.
fn shared_span_mid(a_start: f32, a_end: f32, b_start: f32, b_end: f32) -> f32 {
    let lo = a_start.max(b_start);
    let hi = a_end.min(b_end);
    if lo <= hi {
        (lo + hi) / 2.0
    } else {
        ((a_start + a_end) / 2.0 + (b_start + b_end) / 2.0) / 2.0
    }
}

/// Full measurement pass for one hover event: resolve the scope, pick
/// neighbors, and emit up to four lines between facing edges.
///
/// Returns an empty set when the hovered element has no recognized
/// scope; directions without a qualifying neighbor are simply absent.
pub fn measure(
    geo: &impl LayoutGeometry,
    hovered: ElementId,
    options: &MeasureOptions,
) -> Vec<MeasurementLine> {
    let Some(target) = geo.bounds_of(hovered) else {
        return Vec::new();
    };

    let neighbors = find_neighbors(geo, hovered, options);
    let mut lines = Vec::with_capacity(4);

    if let Some(rect) = neighbors.above.and_then(|id| geo.bounds_of(id)) {
        let x = shared_span_mid(target.left(), target.right(), rect.left(), rect.right());
        lines.push(MeasurementLine::vertical(x, target.top(), rect.bottom()));
    }
    if let Some(rect) = neighbors.below.and_then(|id| geo.bounds_of(id)) {
        let x = shared_span_mid(target.left(), target.right(), rect.left(), rect.right());
        lines.push(MeasurementLine::vertical(x, target.bottom(), rect.top()));
    }
    if let Some(rect) = neighbors.left.and_then(|id| geo.bounds_of(id)) {
        let y = shared_span_mid(target.top(), target.bottom(), rect.top(), rect.bottom());
        lines.push(MeasurementLine::horizontal(y, target.left(), rect.right()));
    }
    if let Some(rect) = neighbors.right.and_then(|id| geo.bounds_of(id)) {
        let y = shared_span_mid(target.top(), target.bottom(), rect.top(), rect.bottom());
        lines.push(MeasurementLine::horizontal(y, target.right(), rect.left()));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Synthetic geometry: flat list of (rect, scope) pairs.
    struct Fixture {
        elements: Vec<(Rect, Option<ScopeId>)>,
    }

    impl Fixture {
        fn new(elements: Vec<(Rect, Option<ScopeId>)>) -> Self {
            Self { elements }
        }
    }

    impl LayoutGeometry for Fixture {
        fn bounds_of(&self, id: ElementId) -> Option<Rect> {
            self.elements.get(id.0).map(|(rect, _)| *rect)
        }

        fn scope_of(&self, id: ElementId) -> Option<ScopeId> {
            self.elements.get(id.0).and_then(|(_, scope)| *scope)
        }

        fn children_of(&self, scope: ScopeId) -> Vec<ElementId> {
            self.elements
                .iter()
                .enumerate()
                .filter(|(_, (_, s))| *s == Some(scope))
                .map(|(i, _)| ElementId(i))
                .collect()
        }
    }

    const SCOPE: Option<ScopeId> = Some(ScopeId(0));

    #[test]
    fn nearest_above_wins() {
        // Two candidates above the target at different distances; the one
        // with the larger bottom edge must be selected.
        let fixture = Fixture::new(vec![
            (Rect::new(100.0, 200.0, 200.0, 40.0), SCOPE), // hovered
            (Rect::new(100.0, 20.0, 200.0, 30.0), SCOPE),  // far above
            (Rect::new(110.0, 120.0, 200.0, 30.0), SCOPE), // near above
        ]);
        let neighbors = find_neighbors(&fixture, ElementId(0), &MeasureOptions::default());
        assert_eq!(neighbors.above, Some(ElementId(2)));
        assert_eq!(neighbors.below, None);
    }

    #[test]
    fn gap_distance_and_label() {
        // Hovered top edge at y=200, neighbor bottom edge at y=150 → 50px.
        let fixture = Fixture::new(vec![
            (Rect::new(100.0, 200.0, 200.0, 40.0), SCOPE),
            (Rect::new(100.0, 100.0, 200.0, 50.0), SCOPE),
        ]);
        let lines = measure(&fixture, ElementId(0), &MeasureOptions::default());
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.orientation, Orientation::Vertical);
        assert_eq!(line.distance, 50.0);
        assert_eq!(line.label, "50px");
        assert_eq!(line.start.y, 200.0);
        assert_eq!(line.end.y, 150.0);
        // Anchored at the midpoint of the shared horizontal span.
        assert_eq!(line.start.x, 200.0);
        assert_eq!(line.end.x, 200.0);
    }

    #[test]
    fn alignment_tolerance_gates_columns() {
        // Candidate shifted 60px right of the hovered left edge: outside
        // the default 50px tolerance, so no vertical neighbor.
        let fixture = Fixture::new(vec![
            (Rect::new(100.0, 200.0, 200.0, 40.0), SCOPE),
            (Rect::new(160.0, 100.0, 200.0, 50.0), SCOPE),
        ]);
        let neighbors = find_neighbors(&fixture, ElementId(0), &MeasureOptions::default());
        assert_eq!(neighbors.above, None);

        // A wider tolerance admits it.
        let wide = MeasureOptions {
            alignment_tolerance: 100.0,
        };
        let neighbors = find_neighbors(&fixture, ElementId(0), &wide);
        assert_eq!(neighbors.above, Some(ElementId(1)));
    }

    #[test]
    fn scope_containment() {
        // A geometrically adjacent element in a different scope never
        // qualifies as a neighbor.
        let fixture = Fixture::new(vec![
            (Rect::new(100.0, 200.0, 200.0, 40.0), SCOPE),
            (Rect::new(100.0, 150.0, 200.0, 30.0), Some(ScopeId(1))),
        ]);
        let neighbors = find_neighbors(&fixture, ElementId(0), &MeasureOptions::default());
        assert_eq!(neighbors, Neighbors::default());
    }

    #[test]
    fn no_scope_measures_nothing() {
        let fixture = Fixture::new(vec![
            (Rect::new(100.0, 200.0, 200.0, 40.0), None),
            (Rect::new(100.0, 100.0, 200.0, 50.0), SCOPE),
        ]);
        assert!(measure(&fixture, ElementId(0), &MeasureOptions::default()).is_empty());
    }

    #[test]
    fn horizontal_neighbors_both_sides() {
        let fixture = Fixture::new(vec![
            (Rect::new(300.0, 100.0, 100.0, 40.0), SCOPE), // hovered
            (Rect::new(100.0, 100.0, 150.0, 40.0), SCOPE), // left, gap 50
            (Rect::new(440.0, 110.0, 100.0, 40.0), SCOPE), // right, gap 40
        ]);
        let lines = measure(&fixture, ElementId(0), &MeasureOptions::default());
        assert_eq!(lines.len(), 2);
        assert!(lines
            .iter()
            .all(|l| l.orientation == Orientation::Horizontal));
        let labels: Vec<&str> = lines.iter().map(|l| l.label.as_str()).collect();
        assert!(labels.contains(&"50px"));
        assert!(labels.contains(&"40px"));
    }

    #[test]
    fn touching_edges_measure_zero() {
        let fixture = Fixture::new(vec![
            (Rect::new(0.0, 100.0, 50.0, 50.0), SCOPE),
            (Rect::new(0.0, 150.0, 50.0, 50.0), SCOPE),
        ]);
        let lines = measure(&fixture, ElementId(0), &MeasureOptions::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].distance, 0.0);
        assert_eq!(lines[0].label, "0px");
    }

    #[test]
    fn disjoint_spans_fall_back_to_center_mean() {
        // Left edges within tolerance but spans that never overlap.
        let fixture = Fixture::new(vec![
            (Rect::new(100.0, 200.0, 20.0, 40.0), SCOPE), // spans x 100..120
            (Rect::new(140.0, 100.0, 20.0, 50.0), SCOPE), // spans x 140..160
        ]);
        let lines = measure(&fixture, ElementId(0), &MeasureOptions::default());
        assert_eq!(lines.len(), 1);
        // Mean of centers 110 and 150.
        assert_eq!(lines[0].start.x, 130.0);
    }
}
