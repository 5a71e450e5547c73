// Pill Button Component
// Rounded gradient call-to-action, rendered as a button or as a link

use crate::components::interaction::InteractionState;
use crate::tokens::*;
use shared::motion::MotionSpec;
use zoon::*;

pub struct PillBuilder {
    label: String,
    href: Option<String>,
    gradient: GradientPair,
    hover_gradient: GradientPair,
    specs: &'static [MotionSpec],
    hover_shadow: Option<&'static str>,
}

impl PillBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            gradient: GRADIENT_HERO,
            hover_gradient: GRADIENT_HERO_HOVER,
            specs: &[],
            hover_shadow: None,
        }
    }

    /// Render as a link to `href` instead of a button.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn gradient(mut self, gradient: GradientPair, hover_gradient: GradientPair) -> Self {
        self.gradient = gradient;
        self.hover_gradient = hover_gradient;
        self
    }

    pub fn interaction(mut self, specs: &'static [MotionSpec]) -> Self {
        self.specs = specs;
        self
    }

    pub fn hover_shadow(mut self, shadow: &'static str) -> Self {
        self.hover_shadow = Some(shadow);
        self
    }

    pub fn build(self) -> RawElOrText {
        let mut interaction = InteractionState::new(self.specs);
        if let Some(shadow) = self.hover_shadow {
            interaction = interaction.hover_shadow(shadow);
        }

        let (gradient, hover_gradient) = (self.gradient, self.hover_gradient);
        let background_signal = interaction.hovered_signal().map(move |hovered| {
            if hovered { hover_gradient.to_right() } else { gradient.to_right() }
        });

        match self.href {
            Some(href) => interaction
                .attach(pill_style(
                    Link::new().label(self.label).to(href),
                    background_signal,
                ))
                .unify(),
            None => interaction
                .attach(pill_style(Button::new().label(self.label), background_signal))
                .unify(),
        }
    }
}

fn pill_style<E>(element: E, background_signal: impl Signal<Item = String> + Unpin + 'static) -> E
where
    E: Styleable<'static> + UpdateRawEl,
{
    element
        .s(Padding::new().x(SPACING_32).y(SPACING_12))
        .s(RoundedCorners::all(CORNER_RADIUS_FULL))
        .s(Font::new().size(FONT_SIZE_18).weight(FontWeight::SemiBold).color(WHITE))
        .update_raw_el(|raw_el| {
            raw_el
                .style("display", "inline-block")
                .style("text-decoration", "none")
                .style_signal("background-image", background_signal)
        })
}

pub fn pill(label: impl Into<String>) -> PillBuilder {
    PillBuilder::new(label)
}
