pub mod surface;
pub mod svg;

use crate::radar::surface::{Point, Rgba, Stroke, Surface, TextStyle};
use std::f64::consts::PI;

pub const RADIUS_RATIO: f64 = 0.36;
pub const GRID_LEVELS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];
pub const LABEL_OFFSET: f64 = 18.0;
pub const MARKER_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarStyle {
    pub grid: Stroke,
    pub axis: Stroke,
    pub label: TextStyle,
    pub fill: Rgba,
    pub outline: Stroke,
    pub marker: Rgba,
}

impl Default for RadarStyle {
    fn default() -> Self {
        let ink = |alpha| Rgba::new(11, 18, 32, alpha);
        Self {
            grid: Stroke {
                color: ink(0.12),
                width: 1.0,
            },
            axis: Stroke {
                color: ink(0.18),
                width: 1.0,
            },
            label: TextStyle {
                color: ink(0.72),
                size: 12.0,
                family: "system-ui, -apple-system, Segoe UI, Roboto, Arial",
            },
            fill: ink(0.10),
            outline: Stroke {
                color: ink(0.85),
                width: 2.0,
            },
            marker: ink(0.85),
        }
    }
}

pub fn render(
    surface: &mut dyn Surface,
    labels: &[&str],
    values: &[f64],
    scale: f64,
    style: &RadarStyle,
) {
    let (width, height) = surface.logical_size();
    if !(width > 0.0 && height > 0.0) || labels.is_empty() {
        return;
    }

    surface.prepare(scale);
    surface.clear();

    let center = Point::new(width / 2.0, height / 2.0);
    let radius = width.min(height) * RADIUS_RATIO;
    let count = labels.len();

    for level in GRID_LEVELS {
        let ring = ring_points(center, radius * level / 100.0, count);
        surface.stroke_polygon(&ring, &style.grid);
    }

    for (index, label) in labels.iter().enumerate() {
        let angle = axis_angle(index, count);
        surface.stroke_line(center, project(center, angle, radius), &style.axis);
        surface.fill_text(
            label,
            project(center, angle, radius + LABEL_OFFSET),
            &style.label,
        );
    }

    let vertices: Vec<Point> = (0..count)
        .map(|index| {
            let value = clamp_value(values.get(index).copied());
            project(center, axis_angle(index, count), radius * value / 100.0)
        })
        .collect();

    surface.fill_polygon(&vertices, style.fill);
    surface.stroke_polygon(&vertices, &style.outline);
    for vertex in &vertices {
        surface.fill_circle(*vertex, MARKER_RADIUS, style.marker);
    }
}

fn clamp_value(value: Option<f64>) -> f64 {
    match value {
        Some(value) if value.is_finite() => value.clamp(0.0, 100.0),
        _ => 0.0,
    }
}

// first axis at 12 o'clock, then clockwise.
fn axis_angle(index: usize, count: usize) -> f64 {
    -PI / 2.0 + index as f64 * (2.0 * PI / count as f64)
}

fn project(center: Point, angle: f64, radius: f64) -> Point {
    Point::new(
        center.x + angle.cos() * radius,
        center.y + angle.sin() * radius,
    )
}

fn ring_points(center: Point, radius: f64, count: usize) -> Vec<Point> {
    (0..count)
        .map(|index| project(center, axis_angle(index, count), radius))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Clear,
        Line(Point, Point),
        StrokePolygon(Vec<Point>),
        FillPolygon(Vec<Point>),
        Circle(Point, f64),
        Text(String, Point),
    }

    struct Recording {
        width: f64,
        height: f64,
        prepared: Vec<f64>,
        ops: Vec<Op>,
    }

    impl Recording {
        fn new(width: f64, height: f64) -> Self {
            Self {
                width,
                height,
                prepared: Vec::new(),
                ops: Vec::new(),
            }
        }

        fn count(&self, matcher: impl Fn(&Op) -> bool) -> usize {
            self.ops.iter().filter(|op| matcher(op)).count()
        }
    }

    impl Surface for Recording {
        fn logical_size(&self) -> (f64, f64) {
            (self.width, self.height)
        }

        fn prepare(&mut self, scale: f64) {
            self.prepared.push(scale);
        }

        fn clear(&mut self) {
            self.ops.clear();
            self.ops.push(Op::Clear);
        }

        fn stroke_line(&mut self, from: Point, to: Point, _stroke: &Stroke) {
            self.ops.push(Op::Line(from, to));
        }

        fn stroke_polygon(&mut self, points: &[Point], _stroke: &Stroke) {
            self.ops.push(Op::StrokePolygon(points.to_vec()));
        }

        fn fill_polygon(&mut self, points: &[Point], _color: Rgba) {
            self.ops.push(Op::FillPolygon(points.to_vec()));
        }

        fn fill_circle(&mut self, center: Point, radius: f64, _color: Rgba) {
            self.ops.push(Op::Circle(center, radius));
        }

        fn fill_text(&mut self, text: &str, at: Point, _style: &TextStyle) {
            self.ops.push(Op::Text(text.to_string(), at));
        }
    }

    fn labels(count: usize) -> Vec<String> {
        (0..count).map(|index| format!("a{index}")).collect()
    }

    fn label_refs(owned: &[String]) -> Vec<&str> {
        owned.iter().map(String::as_str).collect()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn draws_rings_spokes_labels_polygon_and_markers() {
        let owned = labels(12);
        let mut surface = Recording::new(520.0, 420.0);
        render(
            &mut surface,
            &label_refs(&owned),
            &[60.0; 12],
            1.0,
            &RadarStyle::default(),
        );

        assert_eq!(surface.prepared, vec![1.0]);
        assert_eq!(surface.ops[0], Op::Clear);
        // 5 grid rings plus the value outline.
        assert_eq!(
            surface.count(|op| matches!(op, Op::StrokePolygon(points) if points.len() == 12)),
            6
        );
        assert_eq!(surface.count(|op| matches!(op, Op::Line(..))), 12);
        assert_eq!(surface.count(|op| matches!(op, Op::Text(..))), 12);
        assert_eq!(
            surface.count(|op| matches!(op, Op::FillPolygon(points) if points.len() == 12)),
            1
        );
        assert_eq!(surface.count(|op| matches!(op, Op::Circle(_, r) if *r == MARKER_RADIUS)), 12);
    }

    #[test]
    fn first_axis_points_straight_up() {
        let owned = labels(4);
        let mut surface = Recording::new(200.0, 200.0);
        render(
            &mut surface,
            &label_refs(&owned),
            &[100.0, 0.0, 0.0, 0.0],
            1.0,
            &RadarStyle::default(),
        );

        let radius = 200.0 * RADIUS_RATIO;
        let polygon = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::FillPolygon(points) => Some(points.clone()),
                _ => None,
            })
            .expect("value polygon drawn");
        assert_close(polygon[0].x, 100.0);
        assert_close(polygon[0].y, 100.0 - radius);
        // unanswered axes collapse onto the center.
        assert_close(polygon[1].x, 100.0);
        assert_close(polygon[1].y, 100.0);
    }

    #[test]
    fn values_are_clamped_into_range() {
        let owned = labels(3);
        let mut surface = Recording::new(300.0, 300.0);
        render(
            &mut surface,
            &label_refs(&owned),
            &[150.0, -5.0, f64::NAN],
            1.0,
            &RadarStyle::default(),
        );

        let radius = 300.0 * RADIUS_RATIO;
        let polygon = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::FillPolygon(points) => Some(points.clone()),
                _ => None,
            })
            .expect("value polygon drawn");
        assert_close(polygon[0].y, 150.0 - radius);
        assert_close(polygon[1].x, 150.0);
        assert_close(polygon[1].y, 150.0);
        assert_close(polygon[2].x, 150.0);
        assert_close(polygon[2].y, 150.0);
    }

    #[test]
    fn short_value_slices_read_as_zero() {
        let owned = labels(5);
        let mut surface = Recording::new(100.0, 100.0);
        render(
            &mut surface,
            &label_refs(&owned),
            &[80.0, 80.0],
            1.0,
            &RadarStyle::default(),
        );

        let polygon = surface
            .ops
            .iter()
            .find_map(|op| match op {
                Op::FillPolygon(points) => Some(points.clone()),
                _ => None,
            })
            .expect("value polygon drawn");
        assert_eq!(polygon.len(), 5);
        assert_close(polygon[3].x, 50.0);
        assert_close(polygon[3].y, 50.0);
    }

    #[test]
    fn zero_sized_surface_is_a_no_op() {
        let owned = labels(12);
        let mut surface = Recording::new(0.0, 420.0);
        render(
            &mut surface,
            &label_refs(&owned),
            &[60.0; 12],
            2.0,
            &RadarStyle::default(),
        );
        assert!(surface.prepared.is_empty());
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn empty_axis_list_is_a_no_op() {
        let mut surface = Recording::new(520.0, 420.0);
        render(&mut surface, &[], &[], 1.0, &RadarStyle::default());
        assert!(surface.prepared.is_empty());
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn repaint_leaves_no_residue() {
        let owned = labels(6);
        let refs = label_refs(&owned);

        let mut repainted = Recording::new(400.0, 400.0);
        render(
            &mut repainted,
            &refs,
            &[20.0; 6],
            1.0,
            &RadarStyle::default(),
        );
        render(
            &mut repainted,
            &refs,
            &[90.0; 6],
            1.0,
            &RadarStyle::default(),
        );

        let mut fresh = Recording::new(400.0, 400.0);
        render(&mut fresh, &refs, &[90.0; 6], 1.0, &RadarStyle::default());

        assert_eq!(repainted.ops, fresh.ops);
        assert_eq!(repainted.prepared, vec![1.0, 1.0]);
    }

    #[test]
    fn single_axis_degenerate_case_still_draws() {
        let owned = labels(1);
        let mut surface = Recording::new(100.0, 100.0);
        render(
            &mut surface,
            &label_refs(&owned),
            &[50.0],
            1.0,
            &RadarStyle::default(),
        );
        assert_eq!(surface.count(|op| matches!(op, Op::Line(..))), 1);
        assert_eq!(surface.count(|op| matches!(op, Op::StrokePolygon(_))), 6);
    }

    #[test]
    fn device_scale_is_forwarded_to_the_surface() {
        let owned = labels(3);
        let mut surface = Recording::new(300.0, 200.0);
        render(
            &mut surface,
            &label_refs(&owned),
            &[10.0, 20.0, 30.0],
            2.5,
            &RadarStyle::default(),
        );
        assert_eq!(surface.prepared, vec![2.5]);
    }
}
