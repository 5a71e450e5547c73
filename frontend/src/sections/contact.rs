use crate::motion::play_entrance;
use portfolio_ui::*;
use shared::Section;
use shared::choreography::{CONTACT, CONTACT_CALL_TO_ACTION};
use shared::content::ContactContent;
use zoon::*;

pub fn contact(content: &ContactContent) -> impl Element + use<> {
    let call_to_action = pill(content.call_to_action.clone())
        .href(content.mailto())
        .gradient(GRADIENT_CONTACT, GRADIENT_CONTACT_HOVER)
        .interaction(&CONTACT_CALL_TO_ACTION)
        .hover_shadow(SHADOW_GLOW_MAGENTA)
        .build();

    Column::with_tag(Tag::Section)
        .s(Width::fill())
        .s(Padding::new().y(SPACING_80))
        .s(Gap::new().y(SPACING_32))
        .s(Font::new().center())
        .update_raw_el(|raw_el| play_entrance(super::anchored(raw_el, Section::Contact), &CONTACT))
        .item(El::new().s(Align::new().center_x()).child(heading(Tag::H3, content.heading.clone(), FONT_SIZE_36)))
        .item(El::new().s(Align::new().center_x()).child(paragraph(content.text.clone(), FONT_SIZE_20)))
        .item(El::new().s(Align::new().center_x()).child(call_to_action))
}
