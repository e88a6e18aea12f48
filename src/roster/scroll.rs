//! Scroll-position tracking for the scroll-to-top affordance.
//!
//! The tracker turns a raw scroll-offset stream into edge-triggered show/hide
//! transitions: crossing the threshold yields exactly one transition, and
//! further ticks on the same side of it yield none. Animating the affordance
//! is the renderer's business; this module only reports the boolean edge.

/// Scroll offset above which the scroll-to-top affordance is shown.
pub const SCROLL_TOP_THRESHOLD: f32 = 200.0;

/// Fraction of one viewport beyond the last rendered item at which the list
/// renderer should emit its near-end signal.
pub const NEAR_END_THRESHOLD: f32 = 0.5;

/// Edge transition for the scroll-to-top affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceTransition {
    /// Offset crossed the threshold going down the list; slide the button in.
    Show,
    /// Offset crossed back above the threshold; slide it out.
    Hide,
}

/// Instruction for the list renderer to scroll somewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollCommand {
    pub offset: f32,
    pub animated: bool,
}

impl ScrollCommand {
    /// Animated scroll back to the top of the list.
    pub fn to_top() -> Self {
        Self {
            offset: 0.0,
            animated: true,
        }
    }
}

/// Tracks the current side of the threshold across scroll ticks.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    show_scroll_top: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one scroll position update. Returns a transition only when the
    /// show/hide state actually flips.
    pub fn on_scroll(&mut self, offset_y: f32) -> Option<AffordanceTransition> {
        let should_show = offset_y > SCROLL_TOP_THRESHOLD;
        if should_show == self.show_scroll_top {
            return None;
        }

        self.show_scroll_top = should_show;
        Some(if should_show {
            AffordanceTransition::Show
        } else {
            AffordanceTransition::Hide
        })
    }

    /// Whether the affordance is currently shown.
    pub fn show_scroll_top(&self) -> bool {
        self.show_scroll_top
    }
}
