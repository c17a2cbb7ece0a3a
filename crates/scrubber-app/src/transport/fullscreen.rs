use std::sync::Arc;

use winit::window::{Fullscreen, Window};

/// Host capability to put the player container into fullscreen.
pub trait FullscreenCapability {
    fn is_fullscreen(&self) -> bool;
    fn request_fullscreen(&self);
    fn exit_fullscreen(&self);
}

impl FullscreenCapability for Arc<Window> {
    fn is_fullscreen(&self) -> bool {
        self.fullscreen().is_some()
    }

    fn request_fullscreen(&self) {
        self.set_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    fn exit_fullscreen(&self) {
        self.set_fullscreen(None);
    }
}
