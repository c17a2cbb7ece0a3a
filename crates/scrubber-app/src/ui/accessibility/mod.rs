pub mod focus;
pub mod keyboard;

pub use focus::draw_focus_ring;
