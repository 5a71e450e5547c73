//! Geometry of the decorative ring that follows the pointer.

use crate::motion::{MotionProperty, MotionSpec};
use crate::pointer::PointerPosition;

pub const GLOW_RADIUS: f64 = 100.0;
pub const GLOW_STROKE_WIDTH: f64 = 2.0;
pub const GLOW_BLUR_STD_DEVIATION: f64 = 3.5;

/// SVG element ids shared between the filter/gradient definitions and the ring.
pub const GLOW_FILTER_ID: &str = "glow";
pub const GLOW_GRADIENT_ID: &str = "gradient";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientStop {
    pub offset_percent: u8,
    pub color: &'static str,
}

/// Diagonal magenta to cyan stroke gradient.
pub const GLOW_GRADIENT: [GradientStop; 2] = [
    GradientStop { offset_percent: 0, color: "#ff00ff" },
    GradientStop { offset_percent: 100, color: "#00ffff" },
];

/// The ring grows from nothing when the layer is first shown.
pub const GLOW_ENTRANCE: MotionSpec = MotionSpec::on_mount(MotionProperty::Scale, 0.0, 1.0, 300);

/// Everything needed to draw the ring for one pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlowRing {
    pub center: PointerPosition,
    pub radius: f64,
    pub stroke_width: f64,
}

impl GlowRing {
    pub fn centered_at(center: PointerPosition) -> Self {
        Self {
            center,
            radius: GLOW_RADIUS,
            stroke_width: GLOW_STROKE_WIDTH,
        }
    }

    pub fn cx(&self) -> String {
        format!("{}", self.center.x)
    }

    pub fn cy(&self) -> String {
        format!("{}", self.center.y)
    }

    pub fn stroke(&self) -> String {
        format!("url(#{GLOW_GRADIENT_ID})")
    }

    pub fn filter(&self) -> String {
        format!("url(#{GLOW_FILTER_ID})")
    }
}

impl Default for GlowRing {
    fn default() -> Self {
        Self::centered_at(PointerPosition::ORIGIN)
    }
}
