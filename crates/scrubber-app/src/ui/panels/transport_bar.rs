use egui::{RichText, Ui};

use super::{PlayerInfo, PlayerIntent, push_intent};
use crate::playback::format_timestamp;
use crate::ui::accessibility::keyboard::Shortcuts;
use crate::ui::theme::colors::theme_colors;
use crate::ui::theme::tokens::*;
use crate::ui::widgets::glyph_button;

/// Draw the control row beneath the track. Controls whose element is absent are not drawn.
pub fn draw_transport_bar(ui: &mut Ui, info: &PlayerInfo) {
    let tc = theme_colors(ui.ctx());
    let ctx = ui.ctx().clone();

    ui.horizontal(|ui| {
        if let Some(button) = info.play_button
            && glyph_button(ui, button.glyph, button.label()).clicked()
        {
            push_intent(&ctx, PlayerIntent::TogglePlay);
        }

        ui.label(
            RichText::new(time_readout(info))
                .size(SMALL_SIZE)
                .monospace()
                .color(tc.text_secondary),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Right-to-left: first item is rightmost.
            ui.label(RichText::new("?").size(SMALL_SIZE).color(tc.text_secondary))
                .on_hover_ui(shortcut_legend);

            if info.fullscreen_available {
                let label = if info.fullscreen { "Exit fullscreen" } else { "Fullscreen" };
                if ui.button(RichText::new(label).size(SMALL_SIZE)).clicked() {
                    push_intent(&ctx, PlayerIntent::ToggleFullscreen);
                }
            }

            if let Some(speed) = info.speed {
                let selected = speed.selected_label().unwrap_or("1×").to_string();
                egui::ComboBox::from_id_salt("playback_speed")
                    .selected_text(RichText::new(selected.as_str()).size(SMALL_SIZE))
                    .width(64.0)
                    .show_ui(ui, |ui| {
                        for (i, option) in speed.options.iter().enumerate() {
                            let is_selected = speed.selected == Some(i);
                            if ui.selectable_label(is_selected, option.as_str()).clicked()
                                && !is_selected
                            {
                                push_intent(&ctx, PlayerIntent::Speed(option.clone()));
                            }
                        }
                    });
                ui.label(RichText::new("Speed").size(SMALL_SIZE).color(tc.text_secondary));
            }

            if let Some(volume) = info.volume {
                let mut value = volume;
                let response = ui.add(
                    egui::Slider::new(&mut value, 0.0..=1.0)
                        .show_value(false)
                        .step_by(0.01),
                );
                if response.changed() {
                    push_intent(&ctx, PlayerIntent::Volume(value.to_string()));
                }
                let icon = if info.state.muted { "Muted" } else { "Volume" };
                ui.label(RichText::new(icon).size(SMALL_SIZE).color(tc.text_secondary));
            }
        });
    });
}

/// "current / total", with a placeholder total while the duration is unknown.
pub fn time_readout(info: &PlayerInfo) -> String {
    let total = match info.state.known_duration() {
        Some(d) => format_timestamp(d),
        None if info.ready => "Live".to_string(),
        None => "--:--".to_string(),
    };
    format!("{} / {}", format_timestamp(info.state.current_time), total)
}

fn shortcut_legend(ui: &mut Ui) {
    egui::Grid::new("shortcut_legend")
        .num_columns(2)
        .spacing([SPACING, 2.0])
        .show(ui, |ui| {
            for (key, action) in Shortcuts::legend() {
                ui.label(RichText::new(*key).monospace().size(SMALL_SIZE));
                ui.label(RichText::new(*action).size(SMALL_SIZE));
                ui.end_row();
            }
        });
}
