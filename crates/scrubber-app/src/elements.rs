use crate::timeline::surface::Canvas;
use crate::transport::fullscreen::FullscreenCapability;

/// The track control: focus target for seek keys and carrier of the
/// accessibility "current value" (0–100).
#[derive(Debug, Clone, Default)]
pub struct TrackControl {
    value_now: Option<u8>,
}

impl TrackControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value_now(&mut self, percent: u8) {
        self.value_now = Some(percent.min(100));
    }

    pub fn value_now(&self) -> Option<u8> {
        self.value_now
    }

    /// Attribute text as published to assistive tech; empty before the first redraw.
    pub fn value_now_text(&self) -> String {
        self.value_now.map(|v| v.to_string()).unwrap_or_default()
    }
}

/// Icon shown on the play/pause button, defined on a 24×24 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayGlyph {
    Play,
    Pause,
}

impl PlayGlyph {
    /// SVG path data that `polygons` traces.
    #[cfg(test)]
    pub fn svg_path(&self) -> &'static str {
        match self {
            PlayGlyph::Play => "M8 5v14l11-7-11-7z",
            PlayGlyph::Pause => "M8 5h3v14H8zm5 0h3v14h-3z",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayGlyph::Play => "Play",
            PlayGlyph::Pause => "Pause",
        }
    }

    /// Filled polygons making up the glyph, in 24×24 grid units.
    pub fn polygons(&self) -> &'static [&'static [[f32; 2]]] {
        match self {
            PlayGlyph::Play => &[&[[8.0, 5.0], [8.0, 19.0], [19.0, 12.0]]],
            PlayGlyph::Pause => &[
                &[[8.0, 5.0], [11.0, 5.0], [11.0, 19.0], [8.0, 19.0]],
                &[[13.0, 5.0], [16.0, 5.0], [16.0, 19.0], [13.0, 19.0]],
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayButton {
    pub glyph: PlayGlyph,
}

impl Default for PlayButton {
    fn default() -> Self {
        Self {
            glyph: PlayGlyph::Play,
        }
    }
}

impl PlayButton {
    pub fn label(&self) -> &'static str {
        self.glyph.label()
    }

    #[cfg(test)]
    pub fn icon_path(&self) -> &'static str {
        self.glyph.svg_path()
    }
}

#[derive(Debug, Clone)]
pub struct VolumeSlider {
    pub value: f32,
}

impl Default for VolumeSlider {
    fn default() -> Self {
        Self { value: 1.0 }
    }
}

#[derive(Debug, Clone)]
pub struct SpeedSelect {
    pub options: Vec<String>,
    pub selected: Option<usize>,
}

impl SpeedSelect {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }
}

/// Elements the timeline renderer draws into and publishes to.
pub struct TimelineElements {
    pub track: Option<TrackControl>,
    pub canvas: Option<Canvas>,
}

/// Elements the transport controller reads and updates.
pub struct TransportElements {
    pub play_button: Option<PlayButton>,
    pub volume_slider: Option<VolumeSlider>,
    pub speed_select: Option<SpeedSelect>,
    pub container: Option<Box<dyn FullscreenCapability>>,
}

/// UI element bindings, resolved once at start-up and handed to the components.
/// Any element may be absent; operations depending on it are skipped.
#[derive(Default)]
pub struct PlayerElements {
    pub track: Option<TrackControl>,
    pub canvas: Option<Canvas>,
    pub play_button: Option<PlayButton>,
    pub volume_slider: Option<VolumeSlider>,
    pub speed_select: Option<SpeedSelect>,
    pub container: Option<Box<dyn FullscreenCapability>>,
}

impl PlayerElements {
    /// Names of missing elements the timeline needs to function.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.track.is_none() {
            missing.push("track");
        }
        if self.canvas.is_none() {
            missing.push("canvas");
        }
        missing
    }

    /// Names of absent optional controls.
    pub fn missing_optional(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.play_button.is_none() {
            missing.push("play button");
        }
        if self.volume_slider.is_none() {
            missing.push("volume slider");
        }
        if self.speed_select.is_none() {
            missing.push("speed select");
        }
        if self.container.is_none() {
            missing.push("fullscreen container");
        }
        missing
    }

    /// Warn once about missing required elements. Returns true if any were missing.
    pub fn report_missing(&self) -> bool {
        let required = self.missing_required();
        if !required.is_empty() {
            log::warn!("Player: some required elements are missing: {}", required.join(", "));
        }
        let optional = self.missing_optional();
        if !optional.is_empty() {
            log::debug!("Player: controls disabled: {}", optional.join(", "));
        }
        !required.is_empty()
    }

    pub fn into_parts(self) -> (TimelineElements, TransportElements) {
        (
            TimelineElements {
                track: self.track,
                canvas: self.canvas,
            },
            TransportElements {
                play_button: self.play_button,
                volume_slider: self.volume_slider,
                speed_select: self.speed_select,
                container: self.container,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_now_text_empty_until_published() {
        let mut track = TrackControl::new();
        assert_eq!(track.value_now_text(), "");
        track.set_value_now(42);
        assert_eq!(track.value_now_text(), "42");
        track.set_value_now(250);
        assert_eq!(track.value_now(), Some(100));
    }

    #[test]
    fn glyph_paths_and_labels() {
        assert_eq!(PlayGlyph::Play.svg_path(), "M8 5v14l11-7-11-7z");
        assert_eq!(PlayGlyph::Pause.svg_path(), "M8 5h3v14H8zm5 0h3v14h-3z");
        assert_eq!(PlayGlyph::Play.label(), "Play");
        assert_eq!(PlayGlyph::Pause.label(), "Pause");
        assert_eq!(PlayGlyph::Pause.polygons().len(), 2);
    }

    #[test]
    fn missing_elements_listed() {
        let elements = PlayerElements {
            track: Some(TrackControl::new()),
            ..Default::default()
        };
        assert_eq!(elements.missing_required(), vec!["canvas"]);
        assert_eq!(elements.missing_optional().len(), 4);
        assert!(elements.report_missing());
    }

    #[test]
    fn complete_required_set_reports_nothing() {
        let elements = PlayerElements {
            track: Some(TrackControl::new()),
            canvas: Some(Canvas::new()),
            ..Default::default()
        };
        assert!(!elements.report_missing());
    }

    #[test]
    fn speed_select_label() {
        let mut select = SpeedSelect::new(vec!["1×".into(), "2×".into()]);
        assert_eq!(select.selected_label(), None);
        select.selected = Some(1);
        assert_eq!(select.selected_label(), Some("2×"));
    }
}
