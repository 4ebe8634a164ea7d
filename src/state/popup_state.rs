//! Welcome popup reveal state

use std::time::{Duration, Instant};

/// Lifecycle of the welcome popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupPhase {
    /// Waiting for the reveal delay
    Pending,
    /// Sliding up into place
    Entering,
    /// Fully shown, waiting for dismissal
    Visible,
    /// Closed by the user
    Dismissed,
}

/// Welcome popup animation state
#[derive(Debug)]
pub struct PopupState {
    /// When the page was opened
    pub start_time: Instant,
    /// Current phase
    pub phase: PopupPhase,
    /// Rows still to travel before the popup reaches its resting place
    pub slide_offset: f32,
}

impl PopupState {
    /// Delay before the popup appears (1.2 seconds)
    const REVEAL_DELAY: Duration = Duration::from_millis(1200);
    /// Duration of the slide-in
    const ENTER_DURATION: Duration = Duration::from_millis(400);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: PopupPhase::Pending,
            slide_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        let elapsed = self.start_time.elapsed();
        self.advance(elapsed, terminal_height);
    }

    fn advance(&mut self, elapsed: Duration, terminal_height: u16) {
        if self.phase == PopupPhase::Dismissed {
            return;
        }

        if elapsed < Self::REVEAL_DELAY {
            self.phase = PopupPhase::Pending;
            self.slide_offset = 0.0;
        } else if elapsed < Self::REVEAL_DELAY + Self::ENTER_DURATION {
            self.phase = PopupPhase::Entering;
            let enter_elapsed = elapsed - Self::REVEAL_DELAY;
            let progress = enter_elapsed.as_secs_f32() / Self::ENTER_DURATION.as_secs_f32();
            // Cubic ease-out: fast start, gentle landing
            let eased = simple_easing::cubic_out(progress);
            self.slide_offset = (1.0 - eased) * (terminal_height as f32 / 2.0);
        } else {
            self.phase = PopupPhase::Visible;
            self.slide_offset = 0.0;
        }
    }

    /// Close the popup (Enter/Esc or "Explore Experience")
    pub fn dismiss(&mut self) {
        self.phase = PopupPhase::Dismissed;
        self.slide_offset = 0.0;
    }

    /// Whether the popup is on screen and modal
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, PopupPhase::Entering | PopupPhase::Visible)
    }

    pub fn is_animating(&self) -> bool {
        self.phase == PopupPhase::Entering
    }
}

impl Default for PopupState {
    fn default() -> Self {
        Self::new()
    }
}
