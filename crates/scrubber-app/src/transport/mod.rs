pub mod fullscreen;
pub mod parse;

use crate::elements::{PlayButton, PlayGlyph, SpeedSelect, TransportElements, VolumeSlider};
use crate::playback::{PlaybackObserver, PlaybackSource, PlaybackState};
use fullscreen::FullscreenCapability;
use parse::{parse_playback_rate, parse_volume};

/// What a play/pause toggle asked the source to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayRequest {
    Play,
    Pause,
}

/// Applies play/pause, volume, speed and fullscreen intents to the source
/// and keeps the play button's glyph in step with playback.
pub struct TransportController {
    play_button: Option<PlayButton>,
    volume_slider: Option<VolumeSlider>,
    speed_select: Option<SpeedSelect>,
    container: Option<Box<dyn FullscreenCapability>>,
}

impl TransportController {
    /// Bind the controls and bring them in line with the source: the volume
    /// slider mirrors the current volume and a speed control resets the rate.
    pub fn new(elements: TransportElements, source: &mut dyn PlaybackSource) -> Self {
        let mut controller = Self {
            play_button: elements.play_button,
            volume_slider: elements.volume_slider,
            speed_select: elements.speed_select,
            container: elements.container,
        };

        let state = source.state();
        if let Some(slider) = controller.volume_slider.as_mut() {
            slider.value = state.volume as f32;
        }
        if let Some(select) = controller.speed_select.as_mut() {
            source.set_playback_rate(1.0);
            select.selected = select
                .options
                .iter()
                .position(|label| parse_playback_rate(label) == 1.0);
        }
        controller.sync_play_button_visual(&source.state());
        controller
    }

    pub fn play_button(&self) -> Option<&PlayButton> {
        self.play_button.as_ref()
    }

    pub fn volume_slider(&self) -> Option<&VolumeSlider> {
        self.volume_slider.as_ref()
    }

    pub fn speed_select(&self) -> Option<&SpeedSelect> {
        self.speed_select.as_ref()
    }

    pub fn has_fullscreen(&self) -> bool {
        self.container.is_some()
    }

    /// Resume when paused or ended, pause otherwise.
    pub fn toggle_play(&mut self, source: &mut dyn PlaybackSource) -> PlayRequest {
        let request = if source.state().wants_play() {
            source.play();
            PlayRequest::Play
        } else {
            source.pause();
            PlayRequest::Pause
        };
        log::debug!("Toggle play: {request:?}");
        self.sync_play_button_visual(&source.state());
        request
    }

    pub fn sync_play_button_visual(&mut self, state: &PlaybackState) {
        let Some(button) = self.play_button.as_mut() else {
            return;
        };
        button.glyph = if state.wants_play() {
            PlayGlyph::Play
        } else {
            PlayGlyph::Pause
        };
    }

    /// Apply raw volume input. Muting follows volume: exactly 0 mutes.
    pub fn set_volume(&mut self, raw: &str, source: &mut dyn PlaybackSource) -> f64 {
        let volume = parse_volume(raw);
        source.set_volume(volume);
        source.set_muted(volume == 0.0);
        if let Some(slider) = self.volume_slider.as_mut() {
            slider.value = volume as f32;
        }
        volume
    }

    /// Apply a raw speed label like `1.5×`.
    pub fn set_playback_rate(&mut self, raw: &str, source: &mut dyn PlaybackSource) -> f64 {
        let rate = parse_playback_rate(raw);
        log::debug!("Playback rate {raw:?} -> {rate}");
        source.set_playback_rate(rate);
        if let Some(select) = self.speed_select.as_mut() {
            select.selected = select.options.iter().position(|label| label == raw);
        }
        rate
    }

    /// Enter fullscreen, or leave it when already there. No-op without a container.
    pub fn toggle_fullscreen(&self) {
        let Some(container) = self.container.as_ref() else {
            return;
        };
        if container.is_fullscreen() {
            container.exit_fullscreen();
        } else {
            container.request_fullscreen();
        }
    }
}

impl PlaybackObserver for TransportController {
    fn on_play_started(&mut self, state: &PlaybackState) {
        self.sync_play_button_visual(state);
    }

    fn on_play_paused(&mut self, state: &PlaybackState) {
        self.sync_play_button_visual(state);
    }
}
