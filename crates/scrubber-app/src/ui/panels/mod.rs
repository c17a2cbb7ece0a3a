pub mod timeline_bar;
pub mod transport_bar;
pub mod video_view;

use egui::{Context, Key, Modifiers};

use crate::elements::{PlayButton, SpeedSelect};
use crate::playback::PlaybackState;
use crate::timeline::geometry::SurfaceGeometry;
use crate::timeline::surface::Canvas;

/// User intents collected while drawing, applied by the app after the pass.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerIntent {
    TogglePlay,
    /// Pointer pressed or dragged on the track at this window x.
    SeekPointer(f32),
    SeekKey(Key),
    /// The track was laid out with new geometry.
    TrackResized(SurfaceGeometry),
    Volume(String),
    Speed(String),
    ToggleFullscreen,
}

const INTENTS_ID: &str = "scrubber_player_intents";

pub fn push_intent(ctx: &Context, intent: PlayerIntent) {
    ctx.data_mut(|d| {
        d.get_temp_mut_or_default::<Vec<PlayerIntent>>(egui::Id::new(INTENTS_ID))
            .push(intent);
    });
}

/// Drain intents in the order they were pushed.
pub fn take_intents(ctx: &Context) -> Vec<PlayerIntent> {
    ctx.data_mut(|d| {
        std::mem::take(d.get_temp_mut_or_default::<Vec<PlayerIntent>>(egui::Id::new(INTENTS_ID)))
    })
}

/// Snapshot of everything the panels display, collected before the UI pass.
pub struct PlayerInfo<'a> {
    pub state: PlaybackState,
    pub ready: bool,
    pub canvas: Option<&'a Canvas>,
    pub track_value: Option<u8>,
    /// Published value text; empty before the first redraw.
    pub track_value_text: String,
    /// Geometry the renderer last drew with.
    pub track_geometry: SurfaceGeometry,
    pub track_height: f32,
    pub play_button: Option<&'a PlayButton>,
    pub volume: Option<f32>,
    pub speed: Option<&'a SpeedSelect>,
    pub fullscreen: bool,
    /// A fullscreen-capable container is bound.
    pub fullscreen_available: bool,
}

impl PlayerInfo<'_> {
    /// Seek keys only act when the duration is known.
    pub fn seekable(&self) -> bool {
        self.state.known_duration().is_some()
    }
}

/// Space and F act regardless of focus. Runs before any widget so a focused
/// button does not also treat Space as a click.
pub fn handle_shortcuts(ctx: &Context) {
    let (space, f) = ctx.input_mut(|i| {
        (
            i.consume_key(Modifiers::NONE, Key::Space),
            i.consume_key(Modifiers::NONE, Key::F),
        )
    });
    if space {
        push_intent(ctx, PlayerIntent::TogglePlay);
    }
    if f {
        push_intent(ctx, PlayerIntent::ToggleFullscreen);
    }
}

/// Draw the player: video area with the control strip beneath it.
pub fn draw_panels(ctx: &Context, info: &PlayerInfo) {
    handle_shortcuts(ctx);

    egui::TopBottomPanel::bottom("player_controls")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            timeline_bar::draw_timeline_bar(ui, info);
            ui.add_space(4.0);
            transport_bar::draw_transport_bar(ui, info);
            ui.add_space(4.0);
        });

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            video_view::draw_video_view(ui, info);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intents_drain_in_order() {
        let ctx = Context::default();
        push_intent(&ctx, PlayerIntent::TogglePlay);
        push_intent(&ctx, PlayerIntent::Speed("2×".into()));
        assert_eq!(
            take_intents(&ctx),
            vec![PlayerIntent::TogglePlay, PlayerIntent::Speed("2×".into())]
        );
        assert!(take_intents(&ctx).is_empty());
    }

    #[test]
    fn space_and_f_become_intents() {
        let ctx = Context::default();
        let mut input = egui::RawInput::default();
        for key in [Key::Space, Key::F] {
            input.events.push(egui::Event::Key {
                key,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            });
        }
        let _ = ctx.run(input, handle_shortcuts);
        assert_eq!(
            take_intents(&ctx),
            vec![PlayerIntent::TogglePlay, PlayerIntent::ToggleFullscreen]
        );
    }
}
