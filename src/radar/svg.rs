use crate::radar::surface::{Point, Rgba, Stroke, Surface, TextStyle};
use std::fmt::Write as _;

/// SVG drawing backend: assembles the document as a string, with the device
/// scale mapped to pixel width/height attributes over a logical viewBox.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    scale: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scale: 1.0,
            body: String::new(),
        }
    }

    pub fn finish(&self) -> String {
        let pixel_width = (self.width * self.scale).floor().max(0.0);
        let pixel_height = (self.height * self.scale).floor().max(0.0);
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n{}</svg>\n",
            pixel_width, pixel_height, self.width, self.height, self.body
        )
    }
}

fn rgba(color: Rgba) -> String {
    format!("rgba({},{},{},{})", color.r, color.g, color.b, color.a)
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{:.2},{:.2}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Surface for SvgSurface {
    fn logical_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn prepare(&mut self, scale: f64) {
        self.scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn stroke_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            from.x,
            from.y,
            to.x,
            to.y,
            rgba(stroke.color),
            stroke.width
        );
    }

    fn stroke_polygon(&mut self, points: &[Point], stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            r#"  <polygon points="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            points_attr(points),
            rgba(stroke.color),
            stroke.width
        );
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        let _ = writeln!(
            self.body,
            r#"  <polygon points="{}" fill="{}" stroke="none"/>"#,
            points_attr(points),
            rgba(color)
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Rgba) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}"/>"#,
            center.x,
            center.y,
            radius,
            rgba(color)
        );
    }

    fn fill_text(&mut self, text: &str, at: Point, style: &TextStyle) {
        let _ = writeln!(
            self.body,
            r#"  <text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle" font-size="{}" font-family="{}" fill="{}">{}</text>"#,
            at.x,
            at.y,
            style.size,
            style.family,
            rgba(style.color),
            escape_xml(text)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_resizes_pixel_attributes_over_logical_viewbox() {
        let mut surface = SvgSurface::new(520.0, 420.0);
        surface.prepare(2.0);
        let svg = surface.finish();
        assert!(svg.contains(r#"width="1040" height="840""#));
        assert!(svg.contains(r#"viewBox="0 0 520 420""#));
    }

    #[test]
    fn invalid_scale_falls_back_to_one() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.prepare(0.0);
        assert!(surface.finish().contains(r#"width="100" height="100""#));
        surface.prepare(f64::NAN);
        assert!(surface.finish().contains(r#"width="100" height="100""#));
    }

    #[test]
    fn clear_discards_previous_elements() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.fill_circle(Point::new(10.0, 10.0), 3.0, Rgba::new(0, 0, 0, 1.0));
        assert!(surface.finish().contains("<circle"));
        surface.clear();
        assert!(!surface.finish().contains("<circle"));
    }

    #[test]
    fn polygons_carry_fill_and_stroke_styles() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ];
        surface.fill_polygon(&points, Rgba::new(11, 18, 32, 0.1));
        surface.stroke_polygon(
            &points,
            &Stroke {
                color: Rgba::new(11, 18, 32, 0.85),
                width: 2.0,
            },
        );
        let svg = surface.finish();
        assert!(svg.contains(r#"fill="rgba(11,18,32,0.1)" stroke="none""#));
        assert!(svg.contains(r#"fill="none" stroke="rgba(11,18,32,0.85)" stroke-width="2""#));
        assert_eq!(svg.matches("<polygon").count(), 2);
    }

    #[test]
    fn text_is_xml_escaped_and_centered() {
        let mut surface = SvgSurface::new(100.0, 100.0);
        surface.fill_text(
            "a<b & c",
            Point::new(50.0, 50.0),
            &TextStyle {
                color: Rgba::new(0, 0, 0, 1.0),
                size: 12.0,
                family: "system-ui",
            },
        );
        let svg = surface.finish();
        assert!(svg.contains("a&lt;b &amp; c"));
        assert!(svg.contains(r#"text-anchor="middle""#));
    }
}
