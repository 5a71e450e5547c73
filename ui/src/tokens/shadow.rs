// Shadow Token System

pub const SHADOW_CARD: &str = "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)";

// Neon halo around the contact call to action while hovered
pub const SHADOW_GLOW_MAGENTA: &str = "0 0 15px rgba(255, 0, 255, 0.5)";
