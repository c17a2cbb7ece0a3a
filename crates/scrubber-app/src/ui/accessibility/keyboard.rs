/// Keyboard shortcut definitions shown in the help tooltip.
pub struct Shortcuts;

impl Shortcuts {
    pub const TOGGLE_PLAY: &str = "Space";
    pub const FULLSCREEN: &str = "F";
    pub const QUIT: &str = "Esc";
    pub const SEEK_STEP: &str = "Left/Right";
    pub const SEEK_START: &str = "Home";
    pub const SEEK_END: &str = "End";

    pub fn legend() -> &'static [(&'static str, &'static str)] {
        &[
            (Self::TOGGLE_PLAY, "Play / pause"),
            (Self::FULLSCREEN, "Fullscreen"),
            (Self::QUIT, "Quit"),
            ("Tab", "Focus timeline"),
            (Self::SEEK_STEP, "Step seek (timeline focused)"),
            (Self::SEEK_START, "Jump to start"),
            (Self::SEEK_END, "Jump to end"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_has_unique_keys() {
        let legend = Shortcuts::legend();
        for (i, (a, _)) in legend.iter().enumerate() {
            for (b, _) in &legend[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
