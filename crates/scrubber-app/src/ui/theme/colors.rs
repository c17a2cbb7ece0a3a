use egui::Color32;

use super::tokens::Palette;

/// Colors the player panels paint with directly, outside egui's widget visuals.
/// Stored in egui temp data and read via `theme_colors(ctx)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    pub canvas: Color32,
    pub panel: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub video_bg: Color32,
}

impl From<&Palette> for ThemeColors {
    fn from(p: &Palette) -> Self {
        Self {
            canvas: p.canvas,
            panel: p.panel,
            text_primary: p.text,
            text_secondary: p.text_dim,
            accent: p.accent,
            video_bg: p.video_bg,
        }
    }
}

const THEME_COLORS_ID: &str = "scrubber_theme_colors";

pub fn set_theme_colors(ctx: &egui::Context, colors: ThemeColors) {
    ctx.data_mut(|d| d.insert_temp(egui::Id::new(THEME_COLORS_ID), colors));
}

/// Colors stored for this context, or the default navy set.
pub fn theme_colors(ctx: &egui::Context) -> ThemeColors {
    ctx.data(|d| d.get_temp(egui::Id::new(THEME_COLORS_ID)))
        .unwrap_or_else(|| ThemeColors::from(&super::tokens::NAVY))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::tokens::HIGH_CONTRAST;

    #[test]
    fn stored_colors_round_trip_through_context() {
        let ctx = egui::Context::default();
        assert_eq!(theme_colors(&ctx).accent, super::super::tokens::NAVY.accent);
        set_theme_colors(&ctx, ThemeColors::from(&HIGH_CONTRAST));
        assert_eq!(theme_colors(&ctx).text_primary, Color32::WHITE);
    }
}
