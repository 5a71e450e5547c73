// Color Token System
// Tailwind-like pastel scale used across the page

// Page background
pub const PINK_200: &str = "#fbcfe8";
pub const PURPLE_200: &str = "#e9d5ff";
pub const BLUE_200: &str = "#bfdbfe";

// Accents
pub const PINK_400: &str = "#f472b6";
pub const PINK_500: &str = "#ec4899";
pub const PINK_600: &str = "#db2777";
pub const PURPLE_500: &str = "#a855f7";
pub const PURPLE_600: &str = "#9333ea";
pub const BLUE_500: &str = "#3b82f6";
pub const BLUE_600: &str = "#2563eb";
pub const YELLOW_400: &str = "#facc15";

// Text
pub const GRAY_700: &str = "#374151";
pub const GRAY_800: &str = "#1f2937";
pub const WHITE: &str = "#ffffff";

// Frosted glass surface
pub const GLASS_SURFACE: &str = "rgba(255, 255, 255, 0.2)";

/// CSS `linear-gradient` in the given direction, stops spread evenly.
pub fn linear_gradient(direction: &str, stops: &[&str]) -> String {
    format!("linear-gradient({direction}, {})", stops.join(", "))
}

pub fn page_background() -> String {
    linear_gradient("to bottom right", &[PINK_200, PURPLE_200, BLUE_200])
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientPair {
    pub from: &'static str,
    pub to: &'static str,
}

impl GradientPair {
    pub fn to_right(self) -> String {
        linear_gradient("to right", &[self.from, self.to])
    }
}

pub const GRADIENT_BRAND: GradientPair = GradientPair { from: PINK_400, to: BLUE_500 };
pub const GRADIENT_HERO: GradientPair = GradientPair { from: PINK_500, to: BLUE_500 };
pub const GRADIENT_HERO_HOVER: GradientPair = GradientPair { from: PINK_600, to: BLUE_600 };
pub const GRADIENT_CONTACT: GradientPair = GradientPair { from: PURPLE_500, to: PINK_500 };
pub const GRADIENT_CONTACT_HOVER: GradientPair = GradientPair { from: PURPLE_600, to: PINK_600 };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_background_runs_pink_to_blue() {
        assert_eq!(
            page_background(),
            "linear-gradient(to bottom right, #fbcfe8, #e9d5ff, #bfdbfe)"
        );
    }

    #[test]
    fn test_brand_gradient_runs_left_to_right() {
        assert_eq!(GRADIENT_BRAND.to_right(), "linear-gradient(to right, #f472b6, #3b82f6)");
    }
}
