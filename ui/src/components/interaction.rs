// Hover/press micro-interactions
// Resting targets come from MotionSpecs; the CSS transition token eases between them.

use crate::tokens::*;
use shared::motion::{Interaction, MotionFrame, MotionSpec};
use zoon::*;

#[derive(Clone)]
pub struct InteractionState {
    hovered: Mutable<bool>,
    pressed: Mutable<bool>,
    specs: &'static [MotionSpec],
    hover_shadow: Option<&'static str>,
}

impl InteractionState {
    pub fn new(specs: &'static [MotionSpec]) -> Self {
        Self {
            hovered: Mutable::new(false),
            pressed: Mutable::new(false),
            specs,
            hover_shadow: None,
        }
    }

    pub fn hover_shadow(mut self, shadow: &'static str) -> Self {
        self.hover_shadow = Some(shadow);
        self
    }

    pub fn hovered_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.hovered.signal()
    }

    pub fn interaction_signal(&self) -> impl Signal<Item = Interaction> + use<> {
        map_ref! {
            let hovered = self.hovered.signal(),
            let pressed = self.pressed.signal() =>
            Interaction { hovered: *hovered, pressed: *pressed }
        }
    }

    pub fn frame_signal(&self) -> impl Signal<Item = MotionFrame> + use<> {
        let specs = self.specs;
        self.interaction_signal().map(move |interaction| interaction.resolve(specs))
    }

    /// Wire pointer handlers and the resulting transform onto `element`.
    pub fn attach<E>(&self, element: E) -> E
    where
        E: Hoverable + PointerEventAware + UpdateRawEl + Styleable<'static>,
    {
        let transform_signal = self.frame_signal().map(|frame| frame.css_transform());
        let hover_shadow = self.hover_shadow;
        let shadow_signal = self.hovered.signal().map(move |hovered| hover_shadow.filter(|_| hovered));

        let (hovered, pressed_on_leave) = (self.hovered.clone(), self.pressed.clone());
        let (pressed_on_down, pressed_on_up) = (self.pressed.clone(), self.pressed.clone());

        element
            .s(transition_interaction())
            .on_hovered_change(move |is_hovered| {
                hovered.set_neq(is_hovered);
                if !is_hovered {
                    pressed_on_leave.set_neq(false);
                }
            })
            .on_pointer_down(move || pressed_on_down.set_neq(true))
            .on_pointer_up(move || pressed_on_up.set_neq(false))
            .update_raw_el(move |raw_el| {
                let raw_el = raw_el.style_signal("transform", transform_signal);
                // Elements without a hover halo keep whatever shadow they were styled with.
                match hover_shadow {
                    Some(_) => raw_el.style_signal("box-shadow", shadow_signal),
                    None => raw_el,
                }
            })
    }
}
