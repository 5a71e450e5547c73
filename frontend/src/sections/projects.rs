use crate::motion::play_entrance;
use portfolio_ui::*;
use shared::Section;
use shared::choreography::{PROJECT_CARD_HOVER, project_card_entrance};
use shared::content::{ProjectCard, ProjectsContent};
use zoon::*;

pub fn projects(content: &ProjectsContent) -> impl Element + use<> {
    Column::with_tag(Tag::Section)
        .s(Width::fill())
        .s(Padding::new().y(SPACING_80))
        .s(Gap::new().y(SPACING_40))
        .update_raw_el(|raw_el| super::anchored(raw_el, Section::Projects))
        .item(El::new().s(Align::new().center_x()).child(heading(Tag::H3, content.heading.clone(), FONT_SIZE_36)))
        .item(
            // Wraps into one, two or three columns depending on the viewport width.
            Row::new()
                .multiline()
                .s(Width::fill())
                .s(Gap::both(SPACING_32))
                .items(
                    content
                        .cards
                        .iter()
                        .zip(1..)
                        .map(|(card, number)| project_card(card, number)),
                ),
        )
}

fn project_card(project: &ProjectCard, number: u32) -> impl Element + use<> {
    El::new()
        .s(Width::growable().min(CARD_MIN_WIDTH))
        .update_raw_el(move |raw_el| play_entrance(raw_el, &project_card_entrance(number)))
        .child(
            card(project.title.clone(), project.description.clone())
                .interaction(&PROJECT_CARD_HOVER)
                .build(),
        )
}
