pub mod clock;

pub use clock::MediaClock;

/// Snapshot of the playback source, read by the timeline and transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    /// Current position in seconds.
    pub current_time: f64,
    /// Total length in seconds, `None` while unknown (no metadata, live stream).
    pub duration: Option<f64>,
    pub paused: bool,
    pub ended: bool,
    /// Linear volume in [0, 1].
    pub volume: f64,
    pub muted: bool,
    pub playback_rate: f64,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: None,
            paused: true,
            ended: false,
            volume: 1.0,
            muted: false,
            playback_rate: 1.0,
        }
    }
}

impl PlaybackState {
    /// Duration usable for ratio math: finite and strictly positive.
    pub fn known_duration(&self) -> Option<f64> {
        self.duration.filter(|d| d.is_finite() && *d > 0.0)
    }

    /// Position as a fraction of the duration, clamped to [0, 1].
    /// Zero whenever the duration is unknown.
    pub fn time_ratio(&self) -> f64 {
        match self.known_duration() {
            Some(duration) if self.current_time.is_finite() => {
                (self.current_time / duration).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Whether a play/pause toggle should resume playback.
    pub fn wants_play(&self) -> bool {
        self.paused || self.ended
    }
}

/// Discrete lifecycle signals emitted by a playback source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackSignal {
    /// Metadata (duration) became available.
    Ready,
    TimeChanged,
    SeekCompleted,
    PlayStarted,
    PlayPaused,
}

/// The media engine the controls drive. Reads go through `state()`;
/// writes are explicit requests the engine may honor asynchronously.
pub trait PlaybackSource {
    fn state(&self) -> PlaybackState;
    fn seek(&mut self, time: f64);
    fn set_volume(&mut self, volume: f64);
    fn set_muted(&mut self, muted: bool);
    fn set_playback_rate(&mut self, rate: f64);
    fn play(&mut self);
    fn pause(&mut self);
}

/// Receiver of playback lifecycle signals. All handlers run synchronously
/// on the host thread and default to doing nothing.
pub trait PlaybackObserver {
    fn on_ready(&mut self, _state: &PlaybackState) {}
    fn on_time_changed(&mut self, _state: &PlaybackState) {}
    fn on_seek_completed(&mut self, _state: &PlaybackState) {}
    fn on_play_started(&mut self, _state: &PlaybackState) {}
    fn on_play_paused(&mut self, _state: &PlaybackState) {}

    fn on_signal(&mut self, signal: PlaybackSignal, state: &PlaybackState) {
        match signal {
            PlaybackSignal::Ready => self.on_ready(state),
            PlaybackSignal::TimeChanged => self.on_time_changed(state),
            PlaybackSignal::SeekCompleted => self.on_seek_completed(state),
            PlaybackSignal::PlayStarted => self.on_play_started(state),
            PlaybackSignal::PlayPaused => self.on_play_paused(state),
        }
    }
}

/// Format seconds as `m:ss` (or `h:mm:ss` past an hour) for the time readout.
pub fn format_timestamp(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--".to_string();
    }
    let total = seconds.floor() as u64;
    let (h, m, s) = (total / 3600, (total / 60) % 60, total % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}
