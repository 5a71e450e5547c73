//! Pointer position state and the scoped subscription that feeds it.
//!
//! [`PointerTracker`] is the only writer of [`PointerPosition`]. It never owns
//! an event source itself: [`PointerTracker::activate`] registers a listener on
//! a [`PointerEventSource`] and hands back a [`PointerSubscription`] guard.
//! Dropping the guard removes the listener, after which no event can reach the
//! tracker again.

use futures_signals::signal::{Mutable, MutableSignal};
use std::fmt;

/// Viewport coordinates of the input pointer, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Callback invoked for every pointer-movement event.
pub type PointerListener = Box<dyn FnMut(PointerPosition)>;

/// Removes a previously registered [`PointerListener`]. Called at most once.
pub type Unsubscribe = Box<dyn FnOnce()>;

/// Anything that can deliver pointer-movement events: the browser window in
/// the frontend, an in-memory viewport in tests.
pub trait PointerEventSource {
    /// Register `listener`. `Err` carries a human readable reason when the
    /// host has no usable pointer API.
    fn subscribe(&self, listener: PointerListener) -> Result<Unsubscribe, String>;
}

/// Single-writer holder of the latest [`PointerPosition`].
///
/// Readers get a signal or a snapshot; only the listener installed by
/// [`activate`](Self::activate) mutates the state. Events are applied in
/// arrival order and each one replaces the previous position.
#[derive(Debug, Default)]
pub struct PointerTracker {
    position: Mutable<PointerPosition>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            position: Mutable::new(PointerPosition::ORIGIN),
        }
    }

    /// Current position (non-reactive).
    pub fn position(&self) -> PointerPosition {
        self.position.get()
    }

    /// Reactive position, emits on every pointer event.
    pub fn signal(&self) -> MutableSignal<PointerPosition> {
        self.position.signal()
    }

    /// Read-only handle for components that render from the position.
    pub fn reader(&self) -> PointerReader {
        PointerReader {
            position: self.position.clone(),
        }
    }

    /// Start listening on `source`.
    ///
    /// A source without pointer support yields an inert subscription and the
    /// position stays where it was.
    pub fn activate<S>(&self, source: &S) -> PointerSubscription
    where
        S: PointerEventSource + ?Sized,
    {
        let position = self.position.clone();
        let listener: PointerListener = Box::new(move |next| position.set(next));
        match source.subscribe(listener) {
            Ok(unsubscribe) => PointerSubscription {
                unsubscribe: Some(unsubscribe),
                unavailable: None,
            },
            Err(reason) => PointerSubscription {
                unsubscribe: None,
                unavailable: Some(reason),
            },
        }
    }
}

/// Cloneable view of a tracker's position without write access.
#[derive(Clone, Debug)]
pub struct PointerReader {
    position: Mutable<PointerPosition>,
}

impl PointerReader {
    pub fn position(&self) -> PointerPosition {
        self.position.get()
    }

    pub fn signal(&self) -> MutableSignal<PointerPosition> {
        self.position.signal()
    }
}

/// Scoped ownership of a pointer listener registration.
#[must_use = "dropping the subscription removes the pointer listener immediately"]
pub struct PointerSubscription {
    unsubscribe: Option<Unsubscribe>,
    unavailable: Option<String>,
}

impl PointerSubscription {
    pub fn is_active(&self) -> bool {
        self.unsubscribe.is_some()
    }

    /// Why the source refused the listener, if it did.
    pub fn unavailable_reason(&self) -> Option<&str> {
        self.unavailable.as_deref()
    }

    /// Remove the listener now instead of at the end of the owning scope.
    pub fn release(self) {
        drop(self);
    }
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for PointerSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerSubscription")
            .field("active", &self.is_active())
            .field("unavailable", &self.unavailable)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::StreamExt;
    use futures_signals::signal::SignalExt;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// In-memory stand-in for the browser window.
    #[derive(Clone, Default)]
    pub(crate) struct FakeViewport {
        listeners: Rc<RefCell<Vec<(usize, PointerListener)>>>,
        next_id: Rc<Cell<usize>>,
    }

    impl FakeViewport {
        pub(crate) fn dispatch(&self, x: f64, y: f64) {
            for (_, listener) in self.listeners.borrow_mut().iter_mut() {
                listener(PointerPosition::new(x, y));
            }
        }

        pub(crate) fn listener_count(&self) -> usize {
            self.listeners.borrow().len()
        }
    }

    impl PointerEventSource for FakeViewport {
        fn subscribe(&self, listener: PointerListener) -> Result<Unsubscribe, String> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.listeners.borrow_mut().push((id, listener));

            let listeners = Rc::clone(&self.listeners);
            Ok(Box::new(move || {
                listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
            }))
        }
    }

    struct HeadlessHost;

    impl PointerEventSource for HeadlessHost {
        fn subscribe(&self, _listener: PointerListener) -> Result<Unsubscribe, String> {
            Err("no window object".to_string())
        }
    }

    #[test]
    fn test_starts_at_origin() {
        let tracker = PointerTracker::new();
        assert_eq!(tracker.position(), PointerPosition::ORIGIN);
    }

    #[test]
    fn test_last_event_wins() {
        let viewport = FakeViewport::default();
        let tracker = PointerTracker::new();
        let _subscription = tracker.activate(&viewport);

        viewport.dispatch(120.0, 340.0);
        assert_eq!(tracker.position(), PointerPosition::new(120.0, 340.0));

        // Replaced, not accumulated.
        viewport.dispatch(5.0, 5.0);
        assert_eq!(tracker.position(), PointerPosition::new(5.0, 5.0));
    }

    #[test]
    fn test_release_removes_listener() {
        let viewport = FakeViewport::default();
        let tracker = PointerTracker::new();
        let subscription = tracker.activate(&viewport);
        assert!(subscription.is_active());
        assert_eq!(viewport.listener_count(), 1);

        viewport.dispatch(120.0, 340.0);
        viewport.dispatch(5.0, 5.0);
        subscription.release();
        assert_eq!(viewport.listener_count(), 0);

        viewport.dispatch(999.0, 999.0);
        assert_eq!(tracker.position(), PointerPosition::new(5.0, 5.0));
    }

    #[test]
    fn test_drop_removes_listener() {
        let viewport = FakeViewport::default();
        let tracker = PointerTracker::new();
        {
            let _subscription = tracker.activate(&viewport);
            viewport.dispatch(1.0, 2.0);
        }
        assert_eq!(viewport.listener_count(), 0);

        for step in 0..10 {
            viewport.dispatch(step as f64, step as f64);
        }
        assert_eq!(tracker.position(), PointerPosition::new(1.0, 2.0));
    }

    #[test]
    fn test_reader_observes_tracker() {
        let viewport = FakeViewport::default();
        let tracker = PointerTracker::new();
        let reader = tracker.reader();
        let _subscription = tracker.activate(&viewport);

        viewport.dispatch(42.0, 7.0);
        assert_eq!(reader.clone().position(), PointerPosition::new(42.0, 7.0));
    }

    #[test]
    fn test_missing_pointer_api_keeps_origin() {
        let tracker = PointerTracker::new();
        let subscription = tracker.activate(&HeadlessHost);

        assert!(!subscription.is_active());
        assert_eq!(subscription.unavailable_reason(), Some("no window object"));
        assert_eq!(tracker.position(), PointerPosition::ORIGIN);
    }

    #[tokio::test]
    async fn test_signal_follows_events() {
        let viewport = FakeViewport::default();
        let tracker = PointerTracker::new();
        let _subscription = tracker.activate(&viewport);

        let mut positions = tracker.signal().to_stream();
        assert_eq!(positions.next().await, Some(PointerPosition::ORIGIN));

        viewport.dispatch(120.0, 340.0);
        assert_eq!(positions.next().await, Some(PointerPosition::new(120.0, 340.0)));
    }
}
