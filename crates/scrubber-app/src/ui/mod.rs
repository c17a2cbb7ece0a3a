pub mod accessibility;
pub mod overlay;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use overlay::EguiOverlay;
