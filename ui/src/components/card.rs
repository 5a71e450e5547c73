// Card Component
// Frosted glass panel for project summaries

use crate::components::interaction::InteractionState;
use crate::components::typography::paragraph;
use crate::tokens::*;
use shared::motion::MotionSpec;
use zoon::*;

pub struct CardBuilder {
    title: String,
    description: String,
    specs: &'static [MotionSpec],
}

impl CardBuilder {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            specs: &[],
        }
    }

    pub fn interaction(mut self, specs: &'static [MotionSpec]) -> Self {
        self.specs = specs;
        self
    }

    pub fn build(self) -> impl Element {
        let card = Column::new()
            .s(Width::fill())
            .s(Padding::all(SPACING_24))
            .s(Gap::new().y(SPACING_8))
            .s(RoundedCorners::all(CORNER_RADIUS_8))
            .s(Background::new().color(GLASS_SURFACE))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("backdrop-filter", "blur(16px)")
                    .style("box-shadow", SHADOW_CARD)
            })
            .item(
                El::with_tag(Tag::H4)
                    .s(Font::new().size(FONT_SIZE_24).weight(FontWeight::SemiBold).color(GRAY_800))
                    .child(Text::new(self.title)),
            )
            .item(paragraph(self.description, FONT_SIZE_16));

        InteractionState::new(self.specs).attach(card)
    }
}

pub fn card(title: impl Into<String>, description: impl Into<String>) -> CardBuilder {
    CardBuilder::new(title, description)
}
