use crate::motion::play_entrance;
use portfolio_ui::*;
use shared::Section;
use shared::choreography::{HERO, HERO_CALL_TO_ACTION};
use shared::content::HeroContent;
use zoon::*;

pub fn hero(content: &HeroContent) -> impl Element + use<> {
    Column::with_tag(Tag::Section)
        .s(Width::fill())
        .s(Padding::new().y(SPACING_80))
        .s(Gap::new().y(SPACING_16))
        .s(Font::new().center())
        .update_raw_el(|raw_el| play_entrance(super::anchored(raw_el, Section::Hero), &HERO))
        .item(title_with_sparkles(content.heading.clone()))
        .item(El::new().s(Align::new().center_x()).child(paragraph(content.tagline.clone(), FONT_SIZE_20)))
        .item(
            El::new()
                .s(Align::new().center_x())
                .s(Padding::new().top(SPACING_16))
                .child(pill(content.call_to_action.clone()).interaction(&HERO_CALL_TO_ACTION).build()),
        )
}

// Sparkles sit on the heading's top-right corner.
fn title_with_sparkles(title: String) -> impl Element {
    Row::new()
        .s(Align::new().center_x())
        .update_raw_el(|raw_el| raw_el.style("position", "relative"))
        .item(heading(Tag::H2, title, FONT_SIZE_60))
        .item(
            El::new()
                .update_raw_el(|raw_el| {
                    raw_el
                        .style("position", "absolute")
                        .style("top", "-16px")
                        .style("right", "-16px")
                })
                .child(sparkles(SPACING_24)),
        )
}
