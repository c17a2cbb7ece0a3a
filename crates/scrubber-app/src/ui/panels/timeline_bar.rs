use egui::{Mesh, Painter, Pos2, Sense, Shape, Stroke, Ui, Vec2, pos2};

use super::{PlayerInfo, PlayerIntent, push_intent};
use crate::timeline::SEEK_KEYS;
use crate::timeline::geometry::SurfaceGeometry;
use crate::timeline::surface::{Canvas, DrawCommand, Fill, LinearGradient, rounded_rect_outline};
use crate::ui::accessibility::draw_focus_ring;

/// Draw the seek track: lay it out, replay the renderer's canvas into it and
/// forward pointer, keyboard and geometry changes as intents.
pub fn draw_timeline_bar(ui: &mut Ui, info: &PlayerInfo) {
    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(
        Vec2::new(width, info.track_height),
        Sense::click_and_drag(),
    );
    let ctx = ui.ctx().clone();

    let geometry = SurfaceGeometry::from_rect(rect, ctx.pixels_per_point());
    if geometry != info.track_geometry {
        push_intent(&ctx, PlayerIntent::TrackResized(geometry));
    }

    if let Some(canvas) = info.canvas {
        paint_canvas(ui.painter(), rect.min, canvas);
    }

    if response.clicked() || response.dragged() || response.drag_started() {
        response.request_focus();
        if let Some(pos) = response.interact_pointer_pos() {
            push_intent(&ctx, PlayerIntent::SeekPointer(pos.x));
        }
    }

    if response.has_focus() {
        ui.memory_mut(|m| {
            m.set_focus_lock_filter(
                response.id,
                egui::EventFilter {
                    horizontal_arrows: true,
                    ..Default::default()
                },
            );
        });
        // Only claim keys that will act; otherwise leave them to other handlers.
        if info.seekable() {
            for key in SEEK_KEYS {
                if ui.input_mut(|i| i.consume_key(egui::Modifiers::NONE, key)) {
                    push_intent(&ctx, PlayerIntent::SeekKey(key));
                }
            }
        }
    }

    let value = info.track_value.unwrap_or(0);
    response.widget_info(|| egui::WidgetInfo::slider(info.seekable(), value as f64, "Seek"));
    draw_focus_ring(ui, &response);
    if !info.track_value_text.is_empty() {
        response.on_hover_text(format!("{}%", info.track_value_text));
    }
}

/// Replay retained canvas commands at `origin`, snapped to the physical pixel grid.
pub fn paint_canvas(painter: &Painter, origin: Pos2, canvas: &Canvas) {
    let scale = if canvas.scale > 0.0 { canvas.scale } else { 1.0 };
    let origin = pos2(
        (origin.x * scale).round() / scale,
        (origin.y * scale).round() / scale,
    );
    let offset = origin.to_vec2();

    for command in canvas.commands() {
        match command {
            DrawCommand::RoundedRect {
                rect,
                radius,
                fill,
                stroke,
            } => {
                let local = rounded_rect_outline(*rect, *radius);
                if local.len() < 3 {
                    continue;
                }
                let stroke = stroke.unwrap_or(Stroke::NONE);
                match fill {
                    Some(Fill::Solid(color)) => {
                        let points = local.iter().map(|p| *p + offset).collect();
                        painter.add(Shape::convex_polygon(points, *color, stroke));
                    }
                    Some(Fill::Gradient(gradient)) => {
                        painter.add(Shape::mesh(gradient_mesh(&local, gradient, offset)));
                        if stroke != Stroke::NONE {
                            let points = local.iter().map(|p| *p + offset).collect();
                            painter.add(Shape::closed_line(points, stroke));
                        }
                    }
                    None => {
                        let points = local.iter().map(|p| *p + offset).collect();
                        painter.add(Shape::closed_line(points, stroke));
                    }
                }
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(*center + offset, *radius, *color);
            }
        }
    }
}

/// Triangle fan over a convex outline, colored per vertex by its local x.
fn gradient_mesh(local: &[Pos2], gradient: &LinearGradient, offset: Vec2) -> Mesh {
    let mut mesh = Mesh::default();
    let n = local.len() as f32;
    let centroid = local.iter().fold(Vec2::ZERO, |acc, p| acc + p.to_vec2()) / n;

    mesh.colored_vertex(centroid.to_pos2() + offset, gradient.color_at(centroid.x));
    for p in local {
        mesh.colored_vertex(*p + offset, gradient.color_at(p.x));
    }
    let count = local.len() as u32;
    for i in 0..count {
        let next = (i + 1) % count;
        mesh.add_triangle(0, i + 1, next + 1);
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, Rect};

    #[test]
    fn gradient_mesh_fans_from_center() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(50.0, 10.0));
        let outline = rounded_rect_outline(rect, 5.0);
        let gradient = LinearGradient::horizontal(0.0, 200.0, Color32::BLACK, Color32::WHITE);
        let mesh = gradient_mesh(&outline, &gradient, Vec2::new(100.0, 20.0));
        assert_eq!(mesh.vertices.len(), outline.len() + 1);
        assert_eq!(mesh.indices.len(), outline.len() * 3);
        assert!(mesh.is_valid());
        // Played region ends at a quarter of the gradient span.
        let rightmost = mesh
            .vertices
            .iter()
            .max_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
            .unwrap();
        assert!((rightmost.pos.x - 150.0).abs() < 1e-3);
        assert!(rightmost.color.r() < 70);
    }
}
