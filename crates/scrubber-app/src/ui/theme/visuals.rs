use egui::style::WidgetVisuals;
use egui::{CornerRadius, Stroke, Visuals};

use super::tokens::{PANEL_ROUNDING, Palette, WIDGET_ROUNDING};

/// egui visuals for a palette. Hovered and pressed widgets get an accent edge.
pub fn build_visuals(p: &Palette) -> Visuals {
    let mut v = if p.dark { Visuals::dark() } else { Visuals::light() };

    v.panel_fill = p.panel;
    v.window_fill = p.panel;
    v.extreme_bg_color = p.canvas;
    v.faint_bg_color = p.faint;
    v.override_text_color = Some(p.text);

    v.selection.bg_fill = p.accent.gamma_multiply(if p.dark { 0.4 } else { 0.2 });
    v.selection.stroke = Stroke::new(1.0, p.accent);

    let edge = Stroke::new(0.5, p.edge);
    let lit = Stroke::new(1.0, p.accent);
    style_state(&mut v.widgets.noninteractive, p.panel, edge, Stroke::new(1.0, p.text_dim));
    style_state(&mut v.widgets.inactive, p.widget, edge, Stroke::new(1.0, p.text));
    style_state(&mut v.widgets.hovered, p.widget_hover, lit, Stroke::new(1.5, p.text));
    style_state(&mut v.widgets.active, p.widget_active, lit, Stroke::new(1.5, p.text));
    style_state(&mut v.widgets.open, p.widget_active, lit, Stroke::new(1.0, p.text));

    v.window_corner_radius = CornerRadius::same(PANEL_ROUNDING);
    v.window_stroke = Stroke::new(1.0, p.edge);

    v
}

fn style_state(w: &mut WidgetVisuals, fill: egui::Color32, bg_stroke: Stroke, fg_stroke: Stroke) {
    w.bg_fill = fill;
    w.weak_bg_fill = fill;
    w.bg_stroke = bg_stroke;
    w.fg_stroke = fg_stroke;
    w.corner_radius = CornerRadius::same(WIDGET_ROUNDING);
}
