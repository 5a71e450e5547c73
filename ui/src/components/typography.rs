// Typography Components

use crate::tokens::*;
use zoon::*;

/// Heading painted with a horizontal gradient clipped to the glyphs.
pub fn gradient_heading(tag: Tag<'static>, text: impl Into<String>, size: u32, gradient: GradientPair) -> impl Element {
    El::with_tag(tag)
        .s(Font::new().size(size).weight(FontWeight::Bold))
        .update_raw_el(move |raw_el| {
            raw_el
                .style("background-image", &gradient.to_right())
                .style("-webkit-background-clip", "text")
                .style("background-clip", "text")
                .style("color", "transparent")
        })
        .child(Text::new(text.into()))
}

pub fn heading(tag: Tag<'static>, text: impl Into<String>, size: u32) -> impl Element {
    El::with_tag(tag)
        .s(Font::new().size(size).weight(FontWeight::Bold).color(GRAY_800))
        .child(Text::new(text.into()))
}

pub fn paragraph(text: impl Into<String>, size: u32) -> impl Element {
    Paragraph::new()
        .s(Font::new().size(size).color(GRAY_700))
        .content(text.into())
}
