//! Platform-independent core of the portfolio page.
//!
//! Everything here compiles natively as well as to WASM, so the pointer state,
//! the glow geometry and the motion interpreter are tested without a browser.

pub mod choreography;
pub mod content;
pub mod glow;
pub mod motion;
pub mod pointer;

pub use content::{ContentError, PageMeta, PortfolioContent, Section};
pub use glow::GlowRing;
pub use motion::{Interaction, MotionFrame, MotionSpec, MountTimeline};
pub use pointer::{PointerEventSource, PointerPosition, PointerReader, PointerSubscription, PointerTracker};
