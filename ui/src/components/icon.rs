// Inline SVG icons (lucide outlines)

use crate::tokens::*;
use zoon::*;

const SPARKLES_PATHS: [&str; 5] = [
    "m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z",
    "M5 3v4",
    "M19 17v4",
    "M3 5h4",
    "M17 19h4",
];

pub fn sparkles(size: u32) -> impl Element {
    RawSvgEl::new("svg")
        .attr("width", &size.to_string())
        .attr("height", &size.to_string())
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", YELLOW_400)
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .attr("aria-hidden", "true")
        .children(SPARKLES_PATHS.iter().map(|d| RawSvgEl::new("path").attr("d", d)))
}
