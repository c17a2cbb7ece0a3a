use egui::{CornerRadius, Response, Stroke, StrokeKind, Ui};

use crate::ui::theme::colors::theme_colors;
use crate::ui::theme::tokens::FOCUS_RING_WIDTH;

/// Accent outline around a keyboard-focused widget (WCAG 2.4.11 focus appearance).
/// Pill-shaped for wide controls like the track, rounded square otherwise.
pub fn draw_focus_ring(ui: &Ui, response: &Response) {
    if !response.has_focus() {
        return;
    }
    let rect = response.rect.expand(FOCUS_RING_WIDTH);
    let radius = if rect.width() > rect.height() * 2.0 {
        rect.height() * 0.5
    } else {
        f32::from(crate::ui::theme::tokens::WIDGET_ROUNDING) + FOCUS_RING_WIDTH
    };
    ui.painter().rect_stroke(
        rect,
        CornerRadius::from(radius),
        Stroke::new(FOCUS_RING_WIDTH, theme_colors(ui.ctx()).accent),
        StrokeKind::Outside,
    );
}
