use egui::{Pos2, Rect, pos2};

/// Logical size and placement of the interactive track, plus the display scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    /// X of the track's left edge in window coordinates.
    pub left: f32,
    pub width: f32,
    pub height: f32,
    /// Physical pixels per logical point (device pixel ratio).
    pub pixels_per_point: f32,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self {
            left: 0.0,
            width: 0.0,
            height: 0.0,
            pixels_per_point: 1.0,
        }
    }
}

impl SurfaceGeometry {
    pub fn new(left: f32, width: f32, height: f32, pixels_per_point: f32) -> Self {
        Self {
            left,
            width,
            height,
            pixels_per_point,
        }
    }

    pub fn from_rect(rect: Rect, pixels_per_point: f32) -> Self {
        Self::new(rect.min.x, rect.width(), rect.height(), pixels_per_point)
    }

    /// Zero, negative or non-finite extent: nothing can be drawn or hit.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }

    /// Scale factor with a fallback of 1 for bogus values.
    pub fn scale(&self) -> f32 {
        if self.pixels_per_point.is_finite() && self.pixels_per_point > 0.0 {
            self.pixels_per_point
        } else {
            1.0
        }
    }

    /// Backing buffer resolution in physical pixels.
    pub fn physical_size(&self) -> [u32; 2] {
        if self.is_degenerate() {
            return [0, 0];
        }
        let scale = self.scale();
        [
            (self.width * scale).floor() as u32,
            (self.height * scale).floor() as u32,
        ]
    }

    /// Track-local rectangle in logical units (origin at the top-left corner).
    pub fn local_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(self.width.max(0.0), self.height.max(0.0)))
    }

    /// Map a window-space x into a [0, 1] ratio along the track.
    /// `None` on degenerate geometry.
    pub fn ratio_at(&self, client_x: f32) -> Option<f64> {
        if self.is_degenerate() || !client_x.is_finite() {
            return None;
        }
        let x = (client_x - self.left) as f64;
        Some((x / self.width as f64).clamp(0.0, 1.0))
    }
}

/// Clamp a requested corner radius so it never overflows a `width` × `height` box.
pub fn clamp_corner_radius(requested: f32, width: f32, height: f32) -> f32 {
    requested.min(height / 2.0).min(width / 2.0).max(0.0)
}

/// Derived drawing positions for one redraw. Pure function of geometry and ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    pub track: Rect,
    pub corner_radius: f32,
    pub played_width: f32,
    pub knob_center: Pos2,
    pub knob_radius: f32,
}

impl TrackLayout {
    pub fn compute(
        geometry: &SurfaceGeometry,
        ratio: f64,
        requested_radius: Option<f32>,
        knob_scale: f32,
    ) -> Self {
        let width = geometry.width.max(0.0);
        let height = geometry.height.max(0.0);
        let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
        let played_width = width * ratio as f32;
        let knob_radius = height * knob_scale;

        // Knob stays fully inside the track. On tracks narrower than the knob
        // the bounds cross; pin to the middle instead of letting clamp panic.
        let (lo, hi) = (knob_radius, width - knob_radius);
        let knob_x = if lo <= hi {
            played_width.clamp(lo, hi)
        } else {
            width / 2.0
        };

        Self {
            track: geometry.local_rect(),
            corner_radius: clamp_corner_radius(requested_radius.unwrap_or(height / 2.0), width, height),
            played_width,
            knob_center: pos2(knob_x, height / 2.0),
            knob_radius,
        }
    }

    /// Rectangle covering the played portion of the track.
    pub fn played_rect(&self) -> Rect {
        Rect::from_min_size(self.track.min, egui::vec2(self.played_width, self.track.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOB: f32 = 0.45;

    fn geo(width: f32, height: f32) -> SurfaceGeometry {
        SurfaceGeometry::new(10.0, width, height, 2.0)
    }

    #[test]
    fn played_width_quarter() {
        let layout = TrackLayout::compute(&geo(200.0, 12.0), 0.25, None, KNOB);
        assert!((layout.played_width - 50.0).abs() < 1e-4);
    }

    #[test]
    fn played_width_matches_ratio_times_width() {
        let g = geo(317.0, 9.0);
        for i in 0..=20 {
            let ratio = i as f64 / 20.0;
            let layout = TrackLayout::compute(&g, ratio, None, KNOB);
            assert!((layout.played_width - 317.0 * ratio as f32).abs() < 1e-3);
        }
    }

    #[test]
    fn knob_clamped_at_edges() {
        let g = geo(200.0, 20.0);
        let r = 20.0 * KNOB;
        for ratio in [0.0, 0.001, 0.5, 0.999, 1.0] {
            let layout = TrackLayout::compute(&g, ratio, None, KNOB);
            assert!(layout.knob_center.x >= r - 1e-4);
            assert!(layout.knob_center.x <= 200.0 - r + 1e-4);
            assert!((layout.knob_center.y - 10.0).abs() < 1e-6);
        }
        let start = TrackLayout::compute(&g, 0.0, None, KNOB);
        assert!((start.knob_center.x - r).abs() < 1e-4);
        let end = TrackLayout::compute(&g, 1.0, None, KNOB);
        assert!((end.knob_center.x - (200.0 - r)).abs() < 1e-4);
    }

    #[test]
    fn knob_on_tiny_track_does_not_panic() {
        let layout = TrackLayout::compute(&geo(4.0, 20.0), 0.7, None, KNOB);
        assert!((layout.knob_center.x - 2.0).abs() < 1e-6);
    }

    #[test]
    fn corner_radius_clamped() {
        assert_eq!(clamp_corner_radius(50.0, 200.0, 10.0), 5.0);
        assert_eq!(clamp_corner_radius(50.0, 6.0, 10.0), 3.0);
        assert_eq!(clamp_corner_radius(2.0, 200.0, 10.0), 2.0);
        assert_eq!(clamp_corner_radius(2.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn default_radius_is_half_height() {
        let layout = TrackLayout::compute(&geo(200.0, 12.0), 0.0, None, KNOB);
        assert_eq!(layout.corner_radius, 6.0);
    }

    #[test]
    fn physical_size_scales_and_floors() {
        assert_eq!(SurfaceGeometry::new(0.0, 100.5, 10.25, 2.0).physical_size(), [201, 20]);
        assert_eq!(SurfaceGeometry::new(0.0, 100.0, 10.0, 0.0).physical_size(), [100, 10]);
        assert_eq!(SurfaceGeometry::new(0.0, 0.0, 10.0, 2.0).physical_size(), [0, 0]);
    }

    #[test]
    fn ratio_at_clamps_and_offsets() {
        let g = geo(200.0, 12.0);
        assert_eq!(g.ratio_at(10.0), Some(0.0));
        assert_eq!(g.ratio_at(60.0), Some(0.25));
        assert_eq!(g.ratio_at(-500.0), Some(0.0));
        assert_eq!(g.ratio_at(900.0), Some(1.0));
        assert_eq!(geo(0.0, 12.0).ratio_at(60.0), None);
    }

    #[test]
    fn degenerate_detection() {
        assert!(geo(0.0, 10.0).is_degenerate());
        assert!(geo(10.0, 0.0).is_degenerate());
        assert!(geo(f32::NAN, 10.0).is_degenerate());
        assert!(!geo(10.0, 10.0).is_degenerate());
    }
}
