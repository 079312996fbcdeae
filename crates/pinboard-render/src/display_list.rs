//! Backend-neutral display list.
//!
//! Elements are resolved into viewport-space primitives so a front end only
//! has to know how to fill rectangles, ellipses and text runs.

use crate::renderer::{ElementRenderer, INK_COLOR, PRIMARY_COLOR, RenderContext, RenderResult, Renderer};
use kurbo::{Affine, Point, Rect};
use peniko::Color;
use pinboard_core::elements::{CanvasElement, ElementId, ElementKind, TEXT_PADDING};

/// Corner radius of sticky notes (canvas units).
pub const STICKY_RADIUS: f64 = 8.0;
/// Corner radius of rectangles (canvas units).
pub const RECT_RADIUS: f64 = 6.0;
/// Outline width of rectangles and circles (canvas units).
pub const OUTLINE_WIDTH: f64 = 2.0;
/// Font size of sticky note text (canvas units).
pub const STICKY_FONT_SIZE: f64 = 14.0;
/// Font size of text elements (canvas units).
pub const TEXT_FONT_SIZE: f64 = 18.0;
/// Padding inside sticky notes (canvas units).
pub const STICKY_PADDING: f64 = 12.0;

/// A drawing primitive in viewport space.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    /// Filled, optionally outlined, rounded rectangle.
    Rect {
        rect: Rect,
        radius: f64,
        fill: Color,
        stroke: Option<(Color, f64)>,
    },
    /// Filled and outlined ellipse inscribed in `rect`.
    Ellipse {
        rect: Rect,
        fill: Color,
        stroke: (Color, f64),
    },
    /// A single text run; `origin` is the top-left of the line box.
    Text {
        origin: Point,
        text: String,
        size: f64,
        color: Color,
    },
}

/// Display items grouped by element, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayEntry {
    pub element: ElementId,
    pub items: Vec<DisplayItem>,
}

/// Renderer that records a [`DisplayEntry`] per element.
#[derive(Debug, Default)]
pub struct DisplayListRenderer {
    entries: Vec<DisplayEntry>,
}

impl DisplayListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries from the last built frame.
    pub fn entries(&self) -> &[DisplayEntry] {
        &self.entries
    }

    /// Take the entries, leaving the renderer empty.
    pub fn take_entries(&mut self) -> Vec<DisplayEntry> {
        std::mem::take(&mut self.entries)
    }
}

impl Renderer for DisplayListRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;
        self.entries.clear();
        let transform = ctx.view_transform();
        for element in ctx.controller.elements() {
            self.render_element(element, transform)?;
        }
        Ok(())
    }
}

impl ElementRenderer for DisplayListRenderer {
    fn render_element(&mut self, element: &CanvasElement, transform: Affine) -> RenderResult<()> {
        self.entries.push(DisplayEntry {
            element: element.id(),
            items: element_items(element, transform),
        });
        Ok(())
    }
}

/// Resolve one element into viewport-space primitives.
pub fn element_items(element: &CanvasElement, transform: Affine) -> Vec<DisplayItem> {
    let scale = transform.as_coeffs()[0];
    let bounds = transform.transform_rect_bbox(element.bounds());
    let fill: Color = element.color.into();

    match element.kind {
        ElementKind::Sticky => vec![
            DisplayItem::Rect {
                rect: bounds,
                radius: STICKY_RADIUS * scale,
                fill,
                stroke: None,
            },
            DisplayItem::Text {
                origin: Point::new(
                    bounds.x0 + STICKY_PADDING * scale,
                    bounds.y0 + STICKY_PADDING * scale,
                ),
                text: element.content.clone(),
                size: STICKY_FONT_SIZE * scale,
                color: INK_COLOR,
            },
        ],
        ElementKind::Text => vec![DisplayItem::Text {
            origin: Point::new(bounds.x0 + TEXT_PADDING * scale, bounds.y0 + TEXT_PADDING * scale),
            text: element.content.clone(),
            size: TEXT_FONT_SIZE * scale,
            color: INK_COLOR,
        }],
        ElementKind::Rectangle => vec![DisplayItem::Rect {
            rect: bounds,
            radius: RECT_RADIUS * scale,
            fill,
            stroke: Some((PRIMARY_COLOR, OUTLINE_WIDTH * scale)),
        }],
        ElementKind::Circle => vec![DisplayItem::Ellipse {
            rect: bounds,
            fill,
            stroke: (PRIMARY_COLOR, OUTLINE_WIDTH * scale),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinboard_core::controller::InteractionController;
    use pinboard_core::tools::ToolKind;

    #[test]
    fn test_entries_follow_paint_order() {
        let mut controller = InteractionController::new();
        controller.select_tool(ToolKind::Sticky);
        let a = controller.canvas_clicked(Point::new(10.0, 10.0)).unwrap();
        controller.select_tool(ToolKind::Circle);
        let b = controller.canvas_clicked(Point::new(300.0, 10.0)).unwrap();

        let mut renderer = DisplayListRenderer::new();
        renderer.build_scene(&RenderContext::new(&controller)).unwrap();

        let ids: Vec<_> = renderer.entries().iter().map(|e| e.element).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(renderer.entries()[0].items.len(), 2);
    }

    #[test]
    fn test_zoom_scales_screen_geometry() {
        let mut controller = InteractionController::new();
        controller.select_tool(ToolKind::Rectangle);
        controller.canvas_clicked(Point::new(10.0, 20.0));
        controller.zoom_in();

        let mut renderer = DisplayListRenderer::new();
        renderer.build_scene(&RenderContext::new(&controller)).unwrap();

        match &renderer.entries()[0].items[0] {
            DisplayItem::Rect { rect, stroke, .. } => {
                assert!((rect.x0 - 12.0).abs() < 1e-10);
                assert!((rect.y0 - 24.0).abs() < 1e-10);
                assert!((rect.width() - 144.0).abs() < 1e-10);
                assert!((stroke.unwrap().1 - 2.4).abs() < 1e-10);
            }
            other => panic!("unexpected item {other:?}"),
        }
    }

    #[test]
    fn test_text_item_carries_content() {
        let mut controller = InteractionController::new();
        controller.select_tool(ToolKind::Text);
        controller.canvas_clicked(Point::new(0.0, 0.0));

        let mut renderer = DisplayListRenderer::new();
        renderer.build_scene(&RenderContext::new(&controller)).unwrap();
        let entries = renderer.take_entries();

        assert!(matches!(&entries[0].items[0], DisplayItem::Text { text, .. } if text == "Text"));
        assert!(renderer.entries().is_empty());
    }
}
