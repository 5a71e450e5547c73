//! Mount-transition driver.
//!
//! Samples a [`MountTimeline`] once per frame on the UI thread and writes the
//! resulting opacity/transform onto the element. The driving task is owned by
//! the element and dropped with it; there is no other cancellation.

use crate::logging::{DEBUG_MOTION, debug_log};
use portfolio_ui::FRAME_INTERVAL_MS;
use shared::motion::{MotionFrame, MotionSpec, MountTimeline};
use zoon::*;

/// Play the mount specs of `specs` on `raw_el`. Interaction specs are ignored.
pub fn play_entrance<R: RawEl>(raw_el: R, specs: &[MotionSpec]) -> R {
    let timeline = MountTimeline::new(specs);
    if timeline.is_empty() {
        return raw_el;
    }

    let frame = Mutable::new(timeline.initial_frame());
    let driver = Task::start_droppable(drive(timeline, frame.clone()));

    raw_el
        .style_signal("opacity", frame.signal().map(|frame| frame.css_opacity()))
        .style_signal("transform", frame.signal().map(|frame| frame.css_transform()))
        .after_remove(move |_| drop(driver))
}

async fn drive(timeline: MountTimeline, frame: Mutable<MotionFrame>) {
    debug_log!(DEBUG_MOTION, "entrance started ({} ms)", timeline.total_ms());
    let started_at = now_ms();
    let mut ticked_ms = 0.0;

    loop {
        Timer::sleep(FRAME_INTERVAL_MS).await;
        ticked_ms += f64::from(FRAME_INTERVAL_MS);

        // Without a performance clock, count frames instead.
        let elapsed_ms = match (started_at, now_ms()) {
            (Some(start), Some(now)) => now - start,
            _ => ticked_ms,
        };

        let (next, settled) = timeline.frame_at(elapsed_ms);
        frame.set_neq(next);
        if settled {
            debug_log!(DEBUG_MOTION, "entrance settled after {elapsed_ms} ms");
            break;
        }
    }
}

fn now_ms() -> Option<f64> {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
}
