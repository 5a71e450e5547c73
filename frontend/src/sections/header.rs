use crate::motion::play_entrance;
use portfolio_ui::*;
use shared::choreography::{BRAND, NAV_ITEM};
use shared::content::{HeaderContent, NavItem};
use zoon::*;

pub fn header(content: &HeaderContent) -> impl Element + use<> {
    Row::with_tag(Tag::Header)
        .s(Width::fill())
        .s(Padding::all(SPACING_16))
        .s(Align::new().center_y())
        .item(
            El::new()
                .update_raw_el(|raw_el| play_entrance(raw_el, &BRAND))
                .child(gradient_heading(Tag::H1, content.brand.clone(), FONT_SIZE_36, GRADIENT_BRAND)),
        )
        .item(navigation(&content.nav))
}

fn navigation(items: &[NavItem]) -> impl Element + use<> {
    El::with_tag(Tag::Nav).s(Align::new().right()).child(
        Row::with_tag(Tag::Custom("ul"))
            .s(Gap::new().x(SPACING_16))
            .update_raw_el(|raw_el| raw_el.style("list-style", "none").style("margin", "0").style("padding", "0"))
            .items(items.iter().map(|item| nav_link(item.label().to_owned(), item.href(), &NAV_ITEM))),
    )
}
