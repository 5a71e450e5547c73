//! Decorative ring that follows the pointer.
//!
//! A fixed full-viewport SVG that never takes pointer events, so everything
//! underneath stays clickable.

use crate::motion::play_entrance;
use shared::glow::{
    GLOW_BLUR_STD_DEVIATION, GLOW_ENTRANCE, GLOW_FILTER_ID, GLOW_GRADIENT, GLOW_GRADIENT_ID, GlowRing,
};
use shared::pointer::PointerReader;
use zoon::*;

pub fn glow_layer(pointer: PointerReader) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Height::fill())
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "fixed")
                .style("inset", "0")
                .style("pointer-events", "none")
                .attr("aria-hidden", "true")
        })
        .child(
            RawSvgEl::new("svg")
                .attr("width", "100%")
                .attr("height", "100%")
                .child(glow_filter())
                .child(ring(pointer))
                .child(stroke_gradient()),
        )
}

fn ring(pointer: PointerReader) -> impl Element {
    let shape = GlowRing::default();
    let circle = RawSvgEl::new("circle")
        .attr_signal("cx", pointer.signal().map(|position| GlowRing::centered_at(position).cx()))
        .attr_signal("cy", pointer.signal().map(|position| GlowRing::centered_at(position).cy()))
        .attr("r", &shape.radius.to_string())
        .attr("fill", "none")
        .attr("stroke", &shape.stroke())
        .attr("stroke-width", &shape.stroke_width.to_string())
        .attr("filter", &shape.filter())
        // Scale around the ring's own center.
        .style("transform-box", "fill-box")
        .style("transform-origin", "center");
    play_entrance(circle, &[GLOW_ENTRANCE])
}

fn glow_filter() -> impl Element {
    RawSvgEl::new("defs").child(
        RawSvgEl::new("filter")
            .attr("id", GLOW_FILTER_ID)
            .child(
                RawSvgEl::new("feGaussianBlur")
                    .attr("stdDeviation", &GLOW_BLUR_STD_DEVIATION.to_string())
                    .attr("result", "coloredBlur"),
            )
            .child(
                RawSvgEl::new("feMerge")
                    .child(RawSvgEl::new("feMergeNode").attr("in", "coloredBlur"))
                    .child(RawSvgEl::new("feMergeNode").attr("in", "SourceGraphic")),
            ),
    )
}

fn stroke_gradient() -> impl Element {
    RawSvgEl::new("linearGradient")
        .attr("id", GLOW_GRADIENT_ID)
        .attr("x1", "0%")
        .attr("y1", "0%")
        .attr("x2", "100%")
        .attr("y2", "100%")
        .children(GLOW_GRADIENT.iter().map(|stop| {
            RawSvgEl::new("stop")
                .attr("offset", &format!("{}%", stop.offset_percent))
                .attr("stop-color", stop.color)
        }))
}
