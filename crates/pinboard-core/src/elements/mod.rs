//! Canvas element definitions.

mod color;
mod kind;

pub use color::SerializableColor;
pub use kind::ElementKind;

use kurbo::{Ellipse, Point, Rect, Shape as KurboShape, Size};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Approximate glyph advance used to size text elements.
pub const TEXT_CHAR_WIDTH: f64 = 11.0;
/// Line height of a text element.
pub const TEXT_LINE_HEIGHT: f64 = 28.0;
/// Padding around text element content.
pub const TEXT_PADDING: f64 = 8.0;

/// Unique identifier for elements.
///
/// Allocated in increasing order by the owning document, so comparing two ids
/// tells which element was created first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An element placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasElement {
    pub(crate) id: ElementId,
    /// What this element is.
    pub kind: ElementKind,
    /// Top-left corner in canvas space.
    pub(crate) position: Point,
    /// Explicit size; `None` means the element renders at its intrinsic size.
    pub size: Option<Size>,
    /// Text payload.
    pub content: String,
    /// Fill or accent color.
    pub color: SerializableColor,
}

impl CanvasElement {
    /// Create an element of `kind` at `position` with that kind's defaults.
    pub(crate) fn new(id: ElementId, kind: ElementKind, position: Point) -> Self {
        Self {
            id,
            kind,
            position,
            size: kind.default_size(),
            content: kind.default_content().to_string(),
            color: kind.default_color(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Top-left corner in canvas space.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Size used for layout and hit testing.
    pub fn effective_size(&self) -> Size {
        self.size.unwrap_or_else(|| {
            let chars = self.content.chars().count() as f64;
            Size::new(
                chars * TEXT_CHAR_WIDTH + TEXT_PADDING * 2.0,
                TEXT_LINE_HEIGHT + TEXT_PADDING * 2.0,
            )
        })
    }

    /// Bounding box in canvas space.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.effective_size())
    }

    /// Check if a canvas-space point lies on this element.
    pub fn hit_test(&self, point: Point) -> bool {
        let bounds = self.bounds();
        match self.kind {
            ElementKind::Circle => Ellipse::from_rect(bounds).contains(point),
            ElementKind::Sticky | ElementKind::Text | ElementKind::Rectangle => {
                bounds.contains(point)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticky_defaults() {
        let el = CanvasElement::new(ElementId(1), ElementKind::Sticky, Point::new(5.0, 6.0));
        assert_eq!(el.id(), ElementId(1));
        assert_eq!(el.position(), Point::new(5.0, 6.0));
        assert_eq!(el.size, Some(Size::new(160.0, 100.0)));
        assert_eq!(el.content, "New note");
    }

    #[test]
    fn test_text_intrinsic_size() {
        let el = CanvasElement::new(ElementId(2), ElementKind::Text, Point::ZERO);
        assert!(el.size.is_none());
        let size = el.effective_size();
        assert!((size.width - (4.0 * TEXT_CHAR_WIDTH + 2.0 * TEXT_PADDING)).abs() < f64::EPSILON);
        assert!((size.height - (TEXT_LINE_HEIGHT + 2.0 * TEXT_PADDING)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds() {
        let el = CanvasElement::new(ElementId(3), ElementKind::Rectangle, Point::new(10.0, 20.0));
        let bounds = el.bounds();
        assert!((bounds.x0 - 10.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 130.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_circle_hit_test_excludes_corners() {
        let el = CanvasElement::new(ElementId(4), ElementKind::Circle, Point::ZERO);
        assert!(el.hit_test(Point::new(40.0, 40.0)));
        assert!(!el.hit_test(Point::new(2.0, 2.0)));
        assert!(!el.hit_test(Point::new(90.0, 40.0)));
    }

    #[test]
    fn test_rectangle_hit_test() {
        let el = CanvasElement::new(ElementId(5), ElementKind::Rectangle, Point::ZERO);
        assert!(el.hit_test(Point::new(2.0, 2.0)));
        assert!(!el.hit_test(Point::new(121.0, 2.0)));
    }
}
