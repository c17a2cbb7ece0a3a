use egui::{
    Color32, CornerRadius, Rect, Response, Sense, Shape, Stroke, StrokeKind, Ui, Vec2, pos2,
};

use super::accessibility::draw_focus_ring;
use super::theme::colors::theme_colors;
use super::theme::tokens::*;
use crate::elements::PlayGlyph;

/// Grid the glyph polygons are defined on.
const GLYPH_GRID: f32 = 24.0;

/// Map glyph polygons from the 24×24 grid into `rect`.
pub fn glyph_shapes(glyph: PlayGlyph, rect: Rect, color: Color32) -> Vec<Shape> {
    let scale = rect.width().min(rect.height()) / GLYPH_GRID;
    let origin = rect.center() - Vec2::splat(GLYPH_GRID * 0.5 * scale);
    glyph
        .polygons()
        .iter()
        .map(|poly| {
            let points = poly
                .iter()
                .map(|[x, y]| pos2(origin.x + x * scale, origin.y + y * scale))
                .collect();
            Shape::convex_polygon(points, color, Stroke::NONE)
        })
        .collect()
}

pub fn paint_glyph(ui: &Ui, glyph: PlayGlyph, rect: Rect, color: Color32) {
    ui.painter().extend(glyph_shapes(glyph, rect, color));
}

/// Square icon button showing `glyph`, labelled for assistive tech.
pub fn glyph_button(ui: &mut Ui, glyph: PlayGlyph, label: &str) -> Response {
    let tc = theme_colors(ui.ctx());
    let (rect, response) =
        ui.allocate_exact_size(Vec2::splat(ICON_BUTTON_SIZE), Sense::click());

    if ui.is_rect_visible(rect) {
        let visuals = ui.style().interact(&response);
        ui.painter().rect(
            rect,
            CornerRadius::same(WIDGET_ROUNDING),
            visuals.weak_bg_fill,
            visuals.bg_stroke,
            StrokeKind::Inside,
        );
        paint_glyph(ui, glyph, rect.shrink(4.0), tc.text_primary);
    }

    let label = label.to_string();
    response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Button, true, &label));
    draw_focus_ring(ui, &response);
    response.on_hover_text(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(shape: &Shape) -> Rect {
        shape.visual_bounding_rect()
    }

    #[test]
    fn play_glyph_maps_into_rect() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(48.0, 48.0));
        let shapes = glyph_shapes(PlayGlyph::Play, rect, Color32::WHITE);
        assert_eq!(shapes.len(), 1);
        let b = bounds(&shapes[0]);
        assert!((b.min.x - 16.0).abs() < 1e-3);
        assert!((b.max.x - 38.0).abs() < 1e-3);
        assert!((b.min.y - 10.0).abs() < 1e-3);
    }

    #[test]
    fn pause_glyph_has_two_bars() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(24.0, 24.0));
        assert_eq!(glyph_shapes(PlayGlyph::Pause, rect, Color32::WHITE).len(), 2);
    }

    #[test]
    fn glyph_is_centered_in_wide_rect() {
        let rect = Rect::from_min_max(pos2(0.0, 0.0), pos2(72.0, 24.0));
        let shapes = glyph_shapes(PlayGlyph::Pause, rect, Color32::WHITE);
        let left = bounds(&shapes[0]);
        // Grid origin shifts by (72 - 24) / 2.
        assert!((left.min.x - 32.0).abs() < 1e-3);
    }
}
