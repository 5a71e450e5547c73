// Navigation link with hover color and scale feedback

use crate::components::interaction::InteractionState;
use crate::tokens::*;
use shared::motion::MotionSpec;
use zoon::*;

pub fn nav_link(label: impl Into<String>, href: impl Into<String>, specs: &'static [MotionSpec]) -> impl Element {
    let interaction = InteractionState::new(specs);
    let color_signal = interaction
        .hovered_signal()
        .map(|hovered| if hovered { PINK_500 } else { GRAY_800 });

    let link = Link::new()
        .s(Font::new().color_signal(color_signal))
        .s(transition_colors())
        .label(label.into())
        .to(href.into());

    interaction.attach(El::with_tag(Tag::Custom("li")).child(link))
}
