use egui::Color32;

/// Base colors a theme is built from. Widgets, panels and the player
/// backdrop all derive from one of these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub dark: bool,
    pub canvas: Color32,
    pub panel: Color32,
    pub faint: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub accent: Color32,
    pub widget: Color32,
    pub widget_hover: Color32,
    pub widget_active: Color32,
    pub edge: Color32,
    pub video_bg: Color32,
}

// Contrast ratios are text against `panel` (WCAG 2.2 AA).
pub const NAVY: Palette = Palette {
    dark: true,
    canvas: Color32::from_rgb(0x0b, 0x10, 0x20),
    panel: Color32::from_rgb(0x12, 0x1a, 0x33),
    faint: Color32::from_rgb(0x16, 0x20, 0x3d),
    text: Color32::from_rgb(0xf4, 0xf7, 0xfb),     // 15.9:1
    text_dim: Color32::from_rgb(0xa3, 0xae, 0xc8), // 7.4:1
    accent: Color32::from_rgb(0x4c, 0xc9, 0xf0),   // 9.1:1
    widget: Color32::from_rgb(0x1d, 0x2a, 0x4e),
    widget_hover: Color32::from_rgb(0x26, 0x36, 0x60),
    widget_active: Color32::from_rgb(0x30, 0x42, 0x72),
    edge: Color32::from_rgb(0x1a, 0x26, 0x47),
    video_bg: Color32::from_rgb(0x05, 0x08, 0x12),
};

pub const PAPER: Palette = Palette {
    dark: false,
    canvas: Color32::from_rgb(0xf5, 0xf6, 0xfa),
    panel: Color32::from_rgb(0xff, 0xff, 0xff),
    faint: Color32::from_rgb(0xee, 0xf0, 0xf6),
    text: Color32::from_rgb(0x14, 0x1a, 0x2e),     // 16.8:1
    text_dim: Color32::from_rgb(0x4a, 0x52, 0x68), // 7.9:1
    accent: Color32::from_rgb(0x3a, 0x3f, 0xc8),   // 7.0:1
    widget: Color32::from_rgb(0xe6, 0xe9, 0xf2),
    widget_hover: Color32::from_rgb(0xda, 0xde, 0xeb),
    widget_active: Color32::from_rgb(0xcc, 0xd1, 0xe2),
    edge: Color32::from_rgb(0xd2, 0xd6, 0xe2),
    video_bg: Color32::from_rgb(0x1a, 0x1e, 0x2c),
};

pub const HIGH_CONTRAST: Palette = Palette {
    dark: true,
    canvas: Color32::BLACK,
    panel: Color32::from_rgb(0x0a, 0x0a, 0x0a),
    faint: Color32::from_rgb(0x14, 0x14, 0x14),
    text: Color32::WHITE,
    text_dim: Color32::from_rgb(0xcc, 0xcc, 0xcc),
    accent: Color32::from_rgb(0x55, 0xaa, 0xff),
    widget: Color32::from_rgb(0x1a, 0x1a, 0x1a),
    widget_hover: Color32::from_rgb(0x28, 0x28, 0x28),
    widget_active: Color32::from_rgb(0x33, 0x33, 0x33),
    edge: Color32::from_rgb(0x66, 0x66, 0x66),
    video_bg: Color32::BLACK,
};

// Layout
pub const PANEL_ROUNDING: u8 = 6;
pub const WIDGET_ROUNDING: u8 = 4;
pub const SPACING: f32 = 8.0;
pub const SPACING_Y: f32 = 6.0;
pub const MIN_INTERACT_HEIGHT: f32 = 28.0;
pub const MIN_INTERACT_WIDTH: f32 = 44.0;
pub const FOCUS_RING_WIDTH: f32 = 2.0;
pub const ICON_BUTTON_SIZE: f32 = 32.0;

// Typography
pub const BODY_SIZE: f32 = 14.0;
pub const HEADING_SIZE: f32 = 18.0;
pub const MONO_SIZE: f32 = 13.0;
pub const SMALL_SIZE: f32 = 12.0;
