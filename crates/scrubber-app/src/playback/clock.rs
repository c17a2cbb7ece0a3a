use super::{PlaybackSignal, PlaybackSource, PlaybackState};

/// Wall-clock driven playback source standing in for a real decoder.
///
/// Time advances by `dt * playback_rate` while playing. Signals are queued
/// as state changes and drained by the host once per frame.
pub struct MediaClock {
    state: PlaybackState,
    /// Length reported once metadata is "loaded". `None` for live streams.
    media_duration: Option<f64>,
    metadata_delay: f64,
    elapsed: f64,
    ready: bool,
    signals: Vec<PlaybackSignal>,
}

impl MediaClock {
    pub fn new(media_duration: Option<f64>, metadata_delay: f64, volume: f64) -> Self {
        let mut clock = Self {
            state: PlaybackState {
                volume: volume.clamp(0.0, 1.0),
                ..Default::default()
            },
            media_duration,
            metadata_delay: metadata_delay.max(0.0),
            elapsed: 0.0,
            ready: false,
            signals: Vec::new(),
        };
        if clock.metadata_delay == 0.0 {
            clock.load_metadata();
        }
        clock
    }

    /// Whether metadata has been loaded (`Ready` already emitted).
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Advance the clock by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if !self.ready {
            self.elapsed += dt;
            if self.elapsed >= self.metadata_delay {
                self.load_metadata();
            }
        }

        if self.state.paused || dt <= 0.0 {
            return;
        }

        let next = self.state.current_time + dt * self.state.playback_rate;
        match self.state.known_duration() {
            Some(duration) if next >= duration => {
                self.state.current_time = duration;
                self.state.ended = true;
                self.state.paused = true;
                self.signals.push(PlaybackSignal::TimeChanged);
                self.signals.push(PlaybackSignal::PlayPaused);
                log::debug!("Playback reached end ({duration:.2}s)");
            }
            _ => {
                self.state.current_time = next;
                self.signals.push(PlaybackSignal::TimeChanged);
            }
        }
    }

    /// Drain queued signals in emission order.
    pub fn take_signals(&mut self) -> Vec<PlaybackSignal> {
        std::mem::take(&mut self.signals)
    }

    fn load_metadata(&mut self) {
        self.ready = true;
        self.state.duration = self.media_duration;
        self.signals.push(PlaybackSignal::Ready);
        match self.media_duration {
            Some(d) => log::info!("Media ready: duration {d:.2}s"),
            None => log::info!("Media ready: unknown duration"),
        }
    }
}

impl PlaybackSource for MediaClock {
    fn state(&self) -> PlaybackState {
        self.state.clone()
    }

    fn seek(&mut self, time: f64) {
        if !time.is_finite() {
            return;
        }
        let upper = self.state.known_duration().unwrap_or(f64::MAX);
        self.state.current_time = time.clamp(0.0, upper);
        self.state.ended = false;
        self.signals.push(PlaybackSignal::SeekCompleted);
    }

    fn set_volume(&mut self, volume: f64) {
        self.state.volume = volume.clamp(0.0, 1.0);
    }

    fn set_muted(&mut self, muted: bool) {
        self.state.muted = muted;
    }

    fn set_playback_rate(&mut self, rate: f64) {
        if rate.is_finite() && rate > 0.0 {
            self.state.playback_rate = rate;
        } else {
            log::warn!("Ignoring invalid playback rate {rate}");
        }
    }

    fn play(&mut self) {
        if self.state.ended {
            self.state.current_time = 0.0;
            self.state.ended = false;
            self.signals.push(PlaybackSignal::SeekCompleted);
        }
        if self.state.paused {
            self.state.paused = false;
            self.signals.push(PlaybackSignal::PlayStarted);
        }
    }

    fn pause(&mut self) {
        if !self.state.paused {
            self.state.paused = true;
            self.signals.push(PlaybackSignal::PlayPaused);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_after_metadata_delay() {
        let mut clock = MediaClock::new(Some(10.0), 0.5, 1.0);
        assert!(!clock.is_ready());
        assert_eq!(clock.state().duration, None);
        clock.advance(0.25);
        assert!(clock.take_signals().is_empty());
        clock.advance(0.25);
        assert_eq!(clock.take_signals(), vec![PlaybackSignal::Ready]);
        assert_eq!(clock.state().duration, Some(10.0));
    }

    #[test]
    fn zero_delay_is_ready_immediately() {
        let mut clock = MediaClock::new(Some(10.0), 0.0, 1.0);
        assert!(clock.is_ready());
        assert_eq!(clock.take_signals(), vec![PlaybackSignal::Ready]);
    }

    #[test]
    fn paused_clock_does_not_advance() {
        let mut clock = MediaClock::new(Some(10.0), 0.0, 1.0);
        clock.take_signals();
        clock.advance(1.0);
        assert_eq!(clock.state().current_time, 0.0);
        assert!(clock.take_signals().is_empty());
    }

    #[test]
    fn advances_with_rate() {
        let mut clock = MediaClock::new(Some(10.0), 0.0, 1.0);
        clock.set_playback_rate(2.0);
        clock.play();
        clock.take_signals();
        clock.advance(1.5);
        assert!((clock.state().current_time - 3.0).abs() < 1e-9);
        assert_eq!(clock.take_signals(), vec![PlaybackSignal::TimeChanged]);
    }

    #[test]
    fn reaching_end_pauses_and_marks_ended() {
        let mut clock = MediaClock::new(Some(2.0), 0.0, 1.0);
        clock.play();
        clock.take_signals();
        clock.advance(5.0);
        let s = clock.state();
        assert_eq!(s.current_time, 2.0);
        assert!(s.ended);
        assert!(s.paused);
        assert_eq!(
            clock.take_signals(),
            vec![PlaybackSignal::TimeChanged, PlaybackSignal::PlayPaused]
        );
    }

    #[test]
    fn play_after_end_restarts() {
        let mut clock = MediaClock::new(Some(2.0), 0.0, 1.0);
        clock.play();
        clock.advance(5.0);
        clock.take_signals();
        clock.play();
        let s = clock.state();
        assert_eq!(s.current_time, 0.0);
        assert!(!s.ended);
        assert!(!s.paused);
        assert_eq!(
            clock.take_signals(),
            vec![PlaybackSignal::SeekCompleted, PlaybackSignal::PlayStarted]
        );
    }

    #[test]
    fn seek_clamps_and_signals() {
        let mut clock = MediaClock::new(Some(10.0), 0.0, 1.0);
        clock.take_signals();
        clock.seek(42.0);
        assert_eq!(clock.state().current_time, 10.0);
        clock.seek(-3.0);
        assert_eq!(clock.state().current_time, 0.0);
        clock.seek(f64::NAN);
        assert_eq!(
            clock.take_signals(),
            vec![PlaybackSignal::SeekCompleted, PlaybackSignal::SeekCompleted]
        );
    }

    #[test]
    fn live_stream_never_ends() {
        let mut clock = MediaClock::new(None, 0.0, 1.0);
        clock.play();
        clock.advance(1000.0);
        let s = clock.state();
        assert!(!s.ended);
        assert_eq!(s.current_time, 1000.0);
        assert_eq!(s.duration, None);
    }

    #[test]
    fn invalid_rate_ignored() {
        let mut clock = MediaClock::new(Some(10.0), 0.0, 1.0);
        clock.set_playback_rate(0.0);
        clock.set_playback_rate(f64::NAN);
        assert_eq!(clock.state().playback_rate, 1.0);
    }

    #[test]
    fn pause_twice_signals_once() {
        let mut clock = MediaClock::new(Some(10.0), 0.0, 1.0);
        clock.play();
        clock.take_signals();
        clock.pause();
        clock.pause();
        assert_eq!(clock.take_signals(), vec![PlaybackSignal::PlayPaused]);
    }
}
