// Spacing Token System (px)

pub const SPACING_8: u32 = 8;
pub const SPACING_12: u32 = 12;
pub const SPACING_16: u32 = 16;
pub const SPACING_24: u32 = 24;
pub const SPACING_32: u32 = 32;
pub const SPACING_40: u32 = 40;
pub const SPACING_80: u32 = 80;

pub const CORNER_RADIUS_8: u32 = 8;
pub const CORNER_RADIUS_FULL: u32 = 9999;

/// Content column width, matches a centered `container` layout.
pub const CONTAINER_MAX_WIDTH: u32 = 1280;
pub const CARD_MIN_WIDTH: u32 = 280;
