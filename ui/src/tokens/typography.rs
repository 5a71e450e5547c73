// Typography Token System

pub const FONT_FAMILY_SANS: &str = "Inter";

pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_20: u32 = 20;
pub const FONT_SIZE_24: u32 = 24;
pub const FONT_SIZE_36: u32 = 36;
pub const FONT_SIZE_60: u32 = 60;
