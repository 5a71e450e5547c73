// Animation Token System

use zoon::*;

// Animation Durations
pub const DURATION_FAST: u32 = 150;
pub const DURATION_NORMAL: u32 = 300;

/// Frame pacing of the mount-transition driver (~60fps).
pub const FRAME_INTERVAL_MS: u32 = 16;

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_NORMAL),
        Transition::property("color").duration(DURATION_NORMAL),
    ])
}

// Hover/press targets ease in quickly so the pointer never feels laggy.
pub fn transition_interaction() -> impl Style<'static> {
    Transitions::new([
        Transition::property("transform").duration(DURATION_FAST),
        Transition::property("box-shadow").duration(DURATION_NORMAL),
    ])
}
