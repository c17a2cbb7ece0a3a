pub mod geometry;
pub mod surface;

use egui::{Color32, Key, Stroke};
use serde::{Deserialize, Serialize};

use crate::config::hex_color;
use crate::elements::{TimelineElements, TrackControl};
use crate::playback::{PlaybackObserver, PlaybackSource, PlaybackState};
use geometry::{SurfaceGeometry, TrackLayout, clamp_corner_radius};
use surface::{Canvas, DrawSurface, Fill, LinearGradient};

/// Colors and proportions of the progress track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineStyle {
    /// Logical height the host allocates for the track.
    pub height: f32,
    /// Requested corner radius; `None` rounds the ends fully (height / 2).
    pub corner_radius: Option<f32>,
    #[serde(with = "hex_color")]
    pub track_color: Color32,
    #[serde(with = "hex_color")]
    pub track_stroke_color: Color32,
    #[serde(with = "hex_color")]
    pub accent_start: Color32,
    #[serde(with = "hex_color")]
    pub accent_end: Color32,
    #[serde(with = "hex_color")]
    pub knob_color: Color32,
    /// Knob radius as a fraction of the track height.
    pub knob_scale: f32,
    /// Arrow keys move by duration / seek_steps.
    pub seek_steps: u32,
}

impl Default for TimelineStyle {
    fn default() -> Self {
        Self {
            height: 14.0,
            corner_radius: None,
            track_color: Color32::from_rgb(0x1d, 0x2a, 0x4e),
            track_stroke_color: Color32::from_rgb(0x1a, 0x26, 0x47),
            accent_start: Color32::from_rgb(0x7a, 0x7f, 0xff),
            accent_end: Color32::from_rgb(0x4c, 0xc9, 0xf0),
            knob_color: Color32::from_rgb(0xf4, 0xf7, 0xfb),
            knob_scale: 0.45,
            seek_steps: 20,
        }
    }
}

/// Whether a key press was acted on. Ignored keys must be left for other handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

/// Keys the track responds to while focused.
pub const SEEK_KEYS: [Key; 4] = [Key::ArrowLeft, Key::ArrowRight, Key::Home, Key::End];

/// Draws the progress track and turns pointer/keyboard input into seeks.
pub struct TimelineRenderer<S: DrawSurface = Canvas> {
    surface: Option<S>,
    track: Option<TrackControl>,
    geometry: SurfaceGeometry,
    style: TimelineStyle,
}

impl TimelineRenderer<Canvas> {
    pub fn from_elements(elements: TimelineElements, style: TimelineStyle) -> Self {
        Self::new(elements.track, elements.canvas, style)
    }
}

impl<S: DrawSurface> TimelineRenderer<S> {
    pub fn new(track: Option<TrackControl>, surface: Option<S>, style: TimelineStyle) -> Self {
        Self {
            surface,
            track,
            geometry: SurfaceGeometry::default(),
            style,
        }
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    pub fn style(&self) -> &TimelineStyle {
        &self.style
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn track(&self) -> Option<&TrackControl> {
        self.track.as_ref()
    }

    /// Adopt new geometry: resize the backing buffer to physical pixels,
    /// reset the transform to logical units, then redraw.
    pub fn resize(&mut self, geometry: SurfaceGeometry, state: &PlaybackState) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if self.track.is_none() {
            return;
        }
        self.geometry = geometry;
        let [w, h] = geometry.physical_size();
        surface.configure(w, h, geometry.scale());
        self.redraw(state);
    }

    /// Repaint track, played fill and knob for the given state.
    pub fn redraw(&mut self, state: &PlaybackState) {
        let (Some(surface), Some(track)) = (self.surface.as_mut(), self.track.as_mut()) else {
            return;
        };

        surface.clear();

        let duration = state.known_duration();
        let ratio = state.time_ratio();
        track.set_value_now((ratio * 100.0).round() as u8);

        if self.geometry.is_degenerate() {
            return;
        }

        let style = &self.style;
        let layout = TrackLayout::compute(&self.geometry, ratio, style.corner_radius, style.knob_scale);

        surface.draw_rounded_rect(
            layout.track,
            layout.corner_radius,
            Some(Fill::Solid(style.track_color)),
            Some(Stroke::new(1.0, style.track_stroke_color)),
        );

        if duration.is_some() && layout.played_width > 0.0 {
            // The gradient spans the whole track so the fill reveals it progressively.
            let gradient = LinearGradient::horizontal(
                layout.track.min.x,
                layout.track.max.x,
                style.accent_start,
                style.accent_end,
            );
            let fill_radius = clamp_corner_radius(
                layout.corner_radius,
                layout.played_width,
                layout.track.height(),
            );
            surface.draw_rounded_rect(
                layout.played_rect(),
                fill_radius,
                Some(Fill::Gradient(gradient)),
                None,
            );
        }

        if duration.is_some() {
            surface.draw_circle(layout.knob_center, layout.knob_radius, style.knob_color);
        }
    }

    /// Seek to the time under a window-space pointer x. Returns the written
    /// time, or `None` when nothing was seeked.
    pub fn seek_from_pointer(&self, client_x: f32, source: &mut dyn PlaybackSource) -> Option<f64> {
        self.surface.as_ref()?;
        self.track.as_ref()?;
        let ratio = self.geometry.ratio_at(client_x)?;
        let duration = source.state().known_duration()?;
        let target = ratio * duration;
        log::debug!("Pointer seek to {target:.3}s (ratio {ratio:.3})");
        source.seek(target);
        Some(target)
    }

    /// Apply a seek key. Steps are duration-relative so granularity scales
    /// with content length.
    pub fn seek_from_key(&mut self, key: Key, source: &mut dyn PlaybackSource) -> KeyOutcome {
        if self.surface.is_none() || self.track.is_none() {
            return KeyOutcome::Ignored;
        }
        let state = source.state();
        let Some(duration) = state.known_duration() else {
            return KeyOutcome::Ignored;
        };
        let step = duration / self.style.seek_steps.max(1) as f64;

        let target = match key {
            Key::ArrowLeft => (state.current_time - step).max(0.0),
            Key::ArrowRight => (state.current_time + step).min(duration),
            Key::Home => 0.0,
            Key::End => duration,
            _ => return KeyOutcome::Ignored,
        };

        log::debug!("Key seek {key:?} to {target:.3}s");
        source.seek(target);
        self.redraw(&source.state());
        KeyOutcome::Handled
    }
}

impl<S: DrawSurface> PlaybackObserver for TimelineRenderer<S> {
    fn on_ready(&mut self, state: &PlaybackState) {
        let geometry = self.geometry;
        self.resize(geometry, state);
    }

    fn on_time_changed(&mut self, state: &PlaybackState) {
        self.redraw(state);
    }

    fn on_seek_completed(&mut self, state: &PlaybackState) {
        self.redraw(state);
    }

    fn on_play_started(&mut self, state: &PlaybackState) {
        self.redraw(state);
    }

    fn on_play_paused(&mut self, state: &PlaybackState) {
        self.redraw(state);
    }
}
