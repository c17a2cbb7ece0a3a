use crate::config::{ControlsConfig, PlayerConfig};
use crate::elements::{
    PlayButton, PlayerElements, SpeedSelect, TrackControl, VolumeSlider,
};
use crate::playback::{MediaClock, PlaybackObserver, PlaybackSource};
use crate::timeline::TimelineRenderer;
use crate::timeline::surface::Canvas;
use crate::transport::TransportController;
use crate::transport::fullscreen::FullscreenCapability;
use crate::ui::panels::{PlayerInfo, PlayerIntent};

/// Resolve the element set from config. The track and its canvas always
/// exist; transport controls follow the `controls` toggles.
pub fn player_elements(
    controls: &ControlsConfig,
    speeds: &[String],
    container: Option<Box<dyn FullscreenCapability>>,
) -> PlayerElements {
    PlayerElements {
        track: Some(TrackControl::new()),
        canvas: Some(Canvas::default()),
        play_button: controls.play_button.then(PlayButton::default),
        volume_slider: controls.volume.then(VolumeSlider::default),
        speed_select: (controls.speed && !speeds.is_empty())
            .then(|| SpeedSelect::new(speeds.to_vec())),
        container: if controls.fullscreen { container } else { None },
    }
}

/// Playback source wired to the timeline and transport: advances the
/// clock, fans its signals out and applies UI intents.
pub struct Player {
    pub source: MediaClock,
    pub timeline: TimelineRenderer,
    pub transport: TransportController,
}

impl Player {
    pub fn new(
        config: &PlayerConfig,
        live: bool,
        container: Option<Box<dyn FullscreenCapability>>,
    ) -> Self {
        let duration = if live { None } else { config.media.duration };
        let mut source = MediaClock::new(
            duration,
            config.media.metadata_delay,
            config.media.volume,
        );

        let elements = player_elements(&config.controls, &config.speeds, container);
        elements.report_missing();
        let (timeline_elements, transport_elements) = elements.into_parts();

        let timeline = TimelineRenderer::from_elements(timeline_elements, config.timeline.clone());
        let transport = TransportController::new(transport_elements, &mut source);

        let mut player = Self {
            source,
            timeline,
            transport,
        };
        player.dispatch_signals();
        player
    }

    /// Advance playback by `dt` seconds and deliver the resulting signals.
    pub fn update(&mut self, dt: f64) {
        self.source.advance(dt);
        self.dispatch_signals();
    }

    pub fn apply_intents(&mut self, intents: Vec<PlayerIntent>) {
        for intent in intents {
            match intent {
                PlayerIntent::TogglePlay => {
                    self.transport.toggle_play(&mut self.source);
                }
                PlayerIntent::SeekPointer(x) => {
                    self.timeline.seek_from_pointer(x, &mut self.source);
                }
                PlayerIntent::SeekKey(key) => {
                    self.timeline.seek_from_key(key, &mut self.source);
                }
                PlayerIntent::TrackResized(geometry) => {
                    let state = self.source.state();
                    self.timeline.resize(geometry, &state);
                }
                PlayerIntent::Volume(raw) => {
                    self.transport.set_volume(&raw, &mut self.source);
                }
                PlayerIntent::Speed(raw) => {
                    self.transport.set_playback_rate(&raw, &mut self.source);
                }
                PlayerIntent::ToggleFullscreen => self.transport.toggle_fullscreen(),
            }
        }
        self.dispatch_signals();
    }

    /// Snapshot for the UI pass.
    pub fn info(&self, fullscreen: bool) -> PlayerInfo<'_> {
        PlayerInfo {
            state: self.source.state(),
            ready: self.source.is_ready(),
            canvas: self.timeline.surface(),
            track_value: self.timeline.track().and_then(TrackControl::value_now),
            track_value_text: self
                .timeline
                .track()
                .map(TrackControl::value_now_text)
                .unwrap_or_default(),
            track_geometry: self.timeline.geometry(),
            track_height: self.timeline.style().height,
            play_button: self.transport.play_button(),
            volume: self.transport.volume_slider().map(|s| s.value),
            speed: self.transport.speed_select(),
            fullscreen,
            fullscreen_available: self.transport.has_fullscreen(),
        }
    }

    fn dispatch_signals(&mut self) {
        let signals = self.source.take_signals();
        if signals.is_empty() {
            return;
        }
        let state = self.source.state();
        for signal in signals {
            self.timeline.on_signal(signal, &state);
            self.transport.on_signal(signal, &state);
        }
    }
}
