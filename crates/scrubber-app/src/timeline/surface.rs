use egui::{Color32, Pos2, Rect, Stroke, pos2};

/// Horizontal two-stop gradient in track-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearGradient {
    pub x0: f32,
    pub x1: f32,
    pub start: Color32,
    pub end: Color32,
}

impl LinearGradient {
    pub fn horizontal(x0: f32, x1: f32, start: Color32, end: Color32) -> Self {
        Self { x0, x1, start, end }
    }

    /// Color at window x. Outside the gradient span the end stops extend.
    pub fn color_at(&self, x: f32) -> Color32 {
        let span = self.x1 - self.x0;
        let t = if span.abs() > f32::EPSILON {
            ((x - self.x0) / span).clamp(0.0, 1.0)
        } else {
            0.0
        };
        lerp_color(self.start, self.end, t)
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_unmultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fill {
    Solid(Color32),
    Gradient(LinearGradient),
}

/// A single retained drawing command, in logical units relative to the track origin.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    RoundedRect {
        rect: Rect,
        radius: f32,
        fill: Option<Fill>,
        stroke: Option<Stroke>,
    },
    Circle {
        center: Pos2,
        radius: f32,
        color: Color32,
    },
}

/// Minimal drawing capability the timeline renders into.
pub trait DrawSurface {
    /// Set the backing buffer's physical resolution and reset the transform to
    /// a uniform `scale`, so later commands are in logical units.
    fn configure(&mut self, physical_width: u32, physical_height: u32, scale: f32);
    fn clear(&mut self);
    fn draw_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Option<Fill>, stroke: Option<Stroke>);
    fn draw_circle(&mut self, center: Pos2, radius: f32, color: Color32);
}

/// Retained command list standing in for a canvas. The UI replays it each
/// frame; the last redraw wins until the next one.
#[derive(Debug, Clone)]
pub struct Canvas {
    pub physical_size: [u32; 2],
    pub scale: f32,
    commands: Vec<DrawCommand>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            physical_size: [0, 0],
            scale: 1.0,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl DrawSurface for Canvas {
    fn configure(&mut self, physical_width: u32, physical_height: u32, scale: f32) {
        // Resizing a canvas drops its contents.
        self.physical_size = [physical_width, physical_height];
        self.scale = scale;
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_rounded_rect(&mut self, rect: Rect, radius: f32, fill: Option<Fill>, stroke: Option<Stroke>) {
        self.commands.push(DrawCommand::RoundedRect {
            rect,
            radius,
            fill,
            stroke,
        });
    }

    fn draw_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

const CORNER_SEGMENTS: usize = 6;

/// Outline of a rounded rectangle, clockwise from the top edge.
/// Corners are quadratic curves with the box corner as control point.
pub fn rounded_rect_outline(rect: Rect, radius: f32) -> Vec<Pos2> {
    let r = radius
        .min(rect.height() / 2.0)
        .min(rect.width() / 2.0)
        .max(0.0);
    let (x0, y0, x1, y1) = (rect.min.x, rect.min.y, rect.max.x, rect.max.y);

    if r <= 0.0 {
        return vec![pos2(x0, y0), pos2(x1, y0), pos2(x1, y1), pos2(x0, y1)];
    }

    // (start, control, end) for each corner, in drawing order.
    let corners = [
        (pos2(x1 - r, y0), pos2(x1, y0), pos2(x1, y0 + r)),
        (pos2(x1, y1 - r), pos2(x1, y1), pos2(x1 - r, y1)),
        (pos2(x0 + r, y1), pos2(x0, y1), pos2(x0, y1 - r)),
        (pos2(x0, y0 + r), pos2(x0, y0), pos2(x0 + r, y0)),
    ];

    let mut points = Vec::with_capacity(corners.len() * (CORNER_SEGMENTS + 1));
    for (p0, c, p1) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let t = i as f32 / CORNER_SEGMENTS as f32;
            let u = 1.0 - t;
            let p = p0.to_vec2() * (u * u) + c.to_vec2() * (2.0 * u * t) + p1.to_vec2() * (t * t);
            let p = p.to_pos2();
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
    }
    // Collapsed straight edges (r == width/2 etc.) produce a duplicate seam.
    if points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_records_and_clears() {
        let mut canvas = Canvas::new();
        canvas.draw_circle(pos2(1.0, 2.0), 3.0, Color32::WHITE);
        assert_eq!(canvas.commands().len(), 1);
        canvas.clear();
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn configure_resets_contents() {
        let mut canvas = Canvas::new();
        canvas.draw_circle(pos2(1.0, 2.0), 3.0, Color32::WHITE);
        canvas.configure(400, 24, 2.0);
        assert_eq!(canvas.physical_size, [400, 24]);
        assert_eq!(canvas.scale, 2.0);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn gradient_endpoints() {
        let g = LinearGradient::horizontal(0.0, 100.0, Color32::BLACK, Color32::WHITE);
        assert_eq!(g.color_at(0.0), Color32::BLACK);
        assert_eq!(g.color_at(100.0), Color32::WHITE);
        assert_eq!(g.color_at(-10.0), Color32::BLACK);
        assert_eq!(g.color_at(50.0), Color32::from_rgb(128, 128, 128));
    }

    #[test]
    fn gradient_zero_span_uses_start() {
        let g = LinearGradient::horizontal(5.0, 5.0, Color32::RED, Color32::BLUE);
        assert_eq!(g.color_at(5.0), Color32::RED);
    }

    #[test]
    fn outline_stays_inside_rect() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(120.0, 10.0));
        let points = rounded_rect_outline(rect, 40.0);
        assert!(points.len() > 4);
        for p in &points {
            assert!(rect.expand(1e-3).contains(*p), "{p:?} escaped {rect:?}");
        }
    }

    #[test]
    fn outline_square_corners_without_radius() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(10.0, 10.0));
        assert_eq!(rounded_rect_outline(rect, 0.0).len(), 4);
    }

    #[test]
    fn outline_has_no_duplicate_neighbors() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(8.0, 8.0));
        let points = rounded_rect_outline(rect, 4.0);
        for pair in points.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }
}
