use egui::{Align2, FontId, Rect, Sense, Ui, Vec2};

use super::{PlayerInfo, PlayerIntent, push_intent};
use crate::elements::PlayGlyph;
use crate::ui::theme::colors::theme_colors;
use crate::ui::theme::tokens::*;
use crate::ui::widgets::paint_glyph;

const BIG_GLYPH_SIZE: f32 = 72.0;

/// Video area: backdrop, loading status and a paused indicator. Clicking toggles playback.
pub fn draw_video_view(ui: &mut Ui, info: &PlayerInfo) {
    let tc = theme_colors(ui.ctx());
    let rect = ui.max_rect();
    let response = ui.allocate_rect(rect, Sense::click());
    ui.painter().rect_filled(rect, 0.0, tc.video_bg);

    if !info.ready {
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Loading…",
            FontId::proportional(BODY_SIZE),
            tc.text_secondary,
        );
        return;
    }

    if info.state.paused {
        let glyph_rect = Rect::from_center_size(rect.center(), Vec2::splat(BIG_GLYPH_SIZE));
        ui.painter()
            .circle_filled(rect.center(), BIG_GLYPH_SIZE * 0.6, tc.panel.gamma_multiply(0.8));
        paint_glyph(ui, PlayGlyph::Play, glyph_rect, tc.text_primary);
    }

    if response.clicked() {
        push_intent(ui.ctx(), PlayerIntent::TogglePlay);
    }
}
