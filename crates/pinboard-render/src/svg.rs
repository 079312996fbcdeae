//! SVG renderer, used for snapshots of a board.

use crate::chrome::{StatusBar, empty_state_hint};
use crate::display_list::{DisplayItem, element_items};
use crate::renderer::{ElementRenderer, RenderContext, RenderResult, Renderer};
use kurbo::Affine;
use peniko::Color;
use pinboard_core::elements::{CanvasElement, SerializableColor};
use std::fmt::Write;

/// Height of the status strip drawn along the bottom edge.
const STATUS_HEIGHT: f64 = 28.0;

/// Renders a frame to an SVG document.
///
/// Elements are emitted in canvas coordinates inside a group carrying the view
/// transform, so the markup mirrors the translate-then-scale model directly.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    output: String,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the last `build_scene`.
    pub fn svg(&self) -> &str {
        &self.output
    }

    /// Consume the renderer, returning the document.
    pub fn into_svg(self) -> String {
        self.output
    }

    fn write_item(&mut self, item: &DisplayItem) -> RenderResult<()> {
        match item {
            DisplayItem::Rect {
                rect,
                radius,
                fill,
                stroke,
            } => {
                write!(
                    self.output,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}"{}"#,
                    rect.x0,
                    rect.y0,
                    rect.width(),
                    rect.height(),
                    radius,
                    paint("fill", *fill)
                )?;
                if let Some((color, width)) = stroke {
                    write!(self.output, r#"{} stroke-width="{}""#, paint("stroke", *color), width)?;
                }
                writeln!(self.output, "/>")?;
            }
            DisplayItem::Ellipse { rect, fill, stroke } => {
                let center = rect.center();
                writeln!(
                    self.output,
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{}{} stroke-width="{}"/>"#,
                    center.x,
                    center.y,
                    rect.width() / 2.0,
                    rect.height() / 2.0,
                    paint("fill", *fill),
                    paint("stroke", stroke.0),
                    stroke.1
                )?;
            }
            DisplayItem::Text {
                origin,
                text,
                size,
                color,
            } => {
                writeln!(
                    self.output,
                    r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="hanging"{}>{}</text>"#,
                    origin.x,
                    origin.y,
                    size,
                    paint("fill", *color),
                    escape(text)
                )?;
            }
        }
        Ok(())
    }

    fn write_chrome(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        let width = ctx.viewport_size.width;
        let height = ctx.viewport_size.height;

        if let Some(hint) = empty_state_hint(ctx.controller) {
            writeln!(
                self.output,
                r##"<text x="{}" y="{}" text-anchor="middle" font-size="20" fill="#9CA3AF">{}</text>"##,
                width / 2.0,
                height / 2.0,
                escape(hint.title)
            )?;
            writeln!(
                self.output,
                r##"<text x="{}" y="{}" text-anchor="middle" font-size="14" fill="#9CA3AF">{}</text>"##,
                width / 2.0,
                height / 2.0 + 28.0,
                escape(hint.subtitle)
            )?;
        }

        let status = StatusBar::from_controller(ctx.controller);
        writeln!(
            self.output,
            r##"<rect x="0" y="{}" width="{}" height="{}" fill="#F3F4F6"/>"##,
            height - STATUS_HEIGHT,
            width,
            STATUS_HEIGHT
        )?;
        writeln!(
            self.output,
            r##"<text x="12" y="{}" font-size="13" dominant-baseline="middle" fill="#4B5563">{}</text>"##,
            height - STATUS_HEIGHT / 2.0,
            escape(&status.to_string())
        )?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        ctx.validate()?;
        self.output.clear();

        let width = ctx.viewport_size.width;
        let height = ctx.viewport_size.height;
        writeln!(
            self.output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        writeln!(
            self.output,
            r#"<rect width="{}" height="{}"{}/>"#,
            width,
            height,
            paint("fill", self.background_color(ctx))
        )?;

        let view = ctx.controller.view_transform();
        writeln!(
            self.output,
            r#"<g transform="translate({} {}) scale({})">"#,
            view.translate.x, view.translate.y, view.scale
        )?;
        for element in ctx.controller.elements() {
            self.render_element(element, Affine::IDENTITY)?;
        }
        writeln!(self.output, "</g>")?;

        if ctx.show_chrome {
            self.write_chrome(ctx)?;
        }
        writeln!(self.output, "</svg>")?;

        log::debug!(
            "Rendered {} elements to {} bytes of SVG",
            ctx.controller.element_count(),
            self.output.len()
        );
        Ok(())
    }
}

impl ElementRenderer for SvgRenderer {
    fn render_element(&mut self, element: &CanvasElement, transform: Affine) -> RenderResult<()> {
        writeln!(
            self.output,
            r#"<g data-id="{}" data-kind="{}">"#,
            element.id(),
            element.kind.name()
        )?;
        for item in element_items(element, transform) {
            self.write_item(&item)?;
        }
        writeln!(self.output, "</g>")?;
        Ok(())
    }
}

/// ` fill="#RRGGBB"` plus an opacity attribute for translucent colors.
fn paint(attr: &str, color: Color) -> String {
    let color = SerializableColor::from(color);
    let opaque = SerializableColor { a: 255, ..color };
    if color.a == 255 {
        format!(r#" {attr}="{opaque}""#)
    } else {
        format!(r#" {attr}="{opaque}" {attr}-opacity="{:.3}""#, color.opacity())
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Vec2};
    use pinboard_core::config::CanvasConfig;
    use pinboard_core::controller::InteractionController;
    use pinboard_core::tools::ToolKind;

    fn render(controller: &InteractionController, chrome: bool) -> String {
        let mut renderer = SvgRenderer::new();
        renderer
            .build_scene(&RenderContext::new(controller).with_chrome(chrome))
            .unwrap();
        renderer.into_svg()
    }

    #[test]
    fn test_empty_board_shows_hint() {
        let controller = InteractionController::new();
        let svg = render(&controller, true);
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Pick a tool and click on the canvas"));
        assert!(svg.contains("Elements: 0"));
    }

    #[test]
    fn test_elements_inside_view_group() {
        let mut controller = InteractionController::with_config(CanvasConfig {
            drag_to_pan: true,
            ..CanvasConfig::default()
        });
        controller.select_tool(ToolKind::Hand);
        controller.pointer_down(Point::ZERO, None);
        controller.pointer_move(Point::new(15.0, 25.0));
        controller.pointer_up();
        assert_eq!(controller.pan_offset(), Vec2::new(15.0, 25.0));

        controller.select_tool(ToolKind::Circle);
        controller.canvas_clicked(Point::new(115.0, 125.0));
        let svg = render(&controller, false);

        assert!(svg.contains(r#"<g transform="translate(15 25) scale(1)">"#));
        assert!(svg.contains(r#"data-kind="circle""#));
        assert!(svg.contains(r#"<ellipse cx="140" cy="140" rx="40" ry="40""#));
        assert!(svg.contains(r##"fill="#F3E5F5""##));
        assert!(!svg.contains("Elements:"));
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(escape(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    fn test_translucent_paint() {
        let attr = paint("fill", Color::from_rgba8(0, 0, 0, 51));
        assert_eq!(attr, r##" fill="#000000" fill-opacity="0.200""##);
    }
}
