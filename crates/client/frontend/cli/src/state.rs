//! Presentation-only state that survives between frames.

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Frames to hold each spinner glyph (at one frame per input tick).
const SPINNER_HOLD: usize = 6;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    ticks: usize,
    /// Set once a quit has been submitted; the loop waits for shutdown.
    pub quitting: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the spinner by one tick. Returns whether the glyph changed.
    pub fn tick(&mut self) -> bool {
        self.ticks = self.ticks.wrapping_add(1);
        self.ticks % SPINNER_HOLD == 0
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[(self.ticks / SPINNER_HOLD) % SPINNER_FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spinner_cycles_through_frames() {
        let mut state = AppState::new();
        let first = state.spinner();

        let changed = (0..SPINNER_HOLD).filter(|_| state.tick()).count();

        assert_eq!(changed, 1);
        assert_ne!(state.spinner(), first);
    }
}
