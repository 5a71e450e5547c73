//! Declarative motion records and the interpreter that samples them.
//!
//! Every animated element is described by a handful of [`MotionSpec`]s. Mount
//! specs play once when the element is inserted; hover and press specs define
//! resting targets that CSS transitions ease towards.

/// What starts a motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    Mount,
    Hover,
    Press,
}

/// Animated visual property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionProperty {
    Opacity,
    /// Uniform scale factor, `1.0` is identity.
    Scale,
    /// Vertical offset in CSS pixels.
    TranslateY,
    /// Rotation in degrees.
    Rotate,
}

impl MotionProperty {
    pub const fn identity(self) -> f64 {
        match self {
            Self::Opacity | Self::Scale => 1.0,
            Self::TranslateY | Self::Rotate => 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out.
    #[default]
    EaseOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the eased curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSpec {
    pub trigger: Trigger,
    pub property: MotionProperty,
    pub from: f64,
    pub to: f64,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl MotionSpec {
    pub const fn on_mount(property: MotionProperty, from: f64, to: f64, duration_ms: u32) -> Self {
        Self {
            trigger: Trigger::Mount,
            property,
            from,
            to,
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn on_hover(property: MotionProperty, to: f64) -> Self {
        Self::interaction(Trigger::Hover, property, to)
    }

    pub const fn on_press(property: MotionProperty, to: f64) -> Self {
        Self::interaction(Trigger::Press, property, to)
    }

    const fn interaction(trigger: Trigger, property: MotionProperty, to: f64) -> Self {
        Self {
            trigger,
            property,
            from: property.identity(),
            to,
            duration_ms: 0,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    pub const fn delayed(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub const fn eased(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub const fn end_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }
}

/// Lifecycle of a single transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Animating,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub value: f64,
    pub phase: Phase,
}

/// Fire-and-forget interpolation of one [`MotionSpec`] over elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    spec: MotionSpec,
}

impl Transition {
    pub const fn new(spec: MotionSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> &MotionSpec {
        &self.spec
    }

    pub fn sample(&self, elapsed_ms: f64) -> Sample {
        let spec = &self.spec;
        let delay = f64::from(spec.delay_ms);
        if elapsed_ms < delay {
            return Sample {
                value: spec.from,
                phase: Phase::Idle,
            };
        }

        let running = elapsed_ms - delay;
        let duration = f64::from(spec.duration_ms);
        if running >= duration {
            return Sample {
                value: spec.to,
                phase: Phase::Settled,
            };
        }

        let progress = spec.easing.apply(running / duration);
        Sample {
            value: spec.from + (spec.to - spec.from) * progress,
            phase: Phase::Animating,
        }
    }
}

/// Resolved values of every animatable property of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionFrame {
    pub opacity: f64,
    pub scale: f64,
    pub translate_y: f64,
    pub rotate_deg: f64,
}

impl Default for MotionFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl MotionFrame {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        translate_y: 0.0,
        rotate_deg: 0.0,
    };

    pub fn with(mut self, property: MotionProperty, value: f64) -> Self {
        match property {
            MotionProperty::Opacity => self.opacity = value,
            MotionProperty::Scale => self.scale = value,
            MotionProperty::TranslateY => self.translate_y = value,
            MotionProperty::Rotate => self.rotate_deg = value,
        }
        self
    }

    pub fn css_opacity(&self) -> String {
        format!("{}", self.opacity.clamp(0.0, 1.0))
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translateY({}px) scale({}) rotate({}deg)",
            self.translate_y, self.scale, self.rotate_deg
        )
    }
}

/// All mount transitions of one element, sampled together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MountTimeline {
    transitions: Vec<Transition>,
}

impl MountTimeline {
    pub fn new(specs: &[MotionSpec]) -> Self {
        let transitions = specs
            .iter()
            .filter(|spec| spec.trigger == Trigger::Mount)
            .copied()
            .map(Transition::new)
            .collect();
        Self { transitions }
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Frame at `elapsed_ms` since mount, and whether every transition has settled.
    pub fn frame_at(&self, elapsed_ms: f64) -> (MotionFrame, bool) {
        self.transitions.iter().fold(
            (MotionFrame::IDENTITY, true),
            |(frame, settled), transition| {
                let sample = transition.sample(elapsed_ms);
                (
                    frame.with(transition.spec().property, sample.value),
                    settled && sample.phase == Phase::Settled,
                )
            },
        )
    }

    pub fn initial_frame(&self) -> MotionFrame {
        self.frame_at(0.0).0
    }

    pub fn total_ms(&self) -> u32 {
        self.transitions
            .iter()
            .map(|transition| transition.spec().end_ms())
            .max()
            .unwrap_or(0)
    }
}

/// Pointer interaction state of a hoverable/pressable element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    pub hovered: bool,
    pub pressed: bool,
}

impl Interaction {
    /// Resting frame for this interaction state. Press targets override hover
    /// targets for the same property.
    pub fn resolve(self, specs: &[MotionSpec]) -> MotionFrame {
        let hover = specs
            .iter()
            .filter(|spec| self.hovered && spec.trigger == Trigger::Hover);
        let press = specs
            .iter()
            .filter(|spec| self.pressed && spec.trigger == Trigger::Press);
        hover
            .chain(press)
            .fold(MotionFrame::IDENTITY, |frame, spec| frame.with(spec.property, spec.to))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE_SLIDE: [MotionSpec; 2] = [
        MotionSpec::on_mount(MotionProperty::Opacity, 0.0, 1.0, 500).delayed(100),
        MotionSpec::on_mount(MotionProperty::TranslateY, 50.0, 0.0, 500).delayed(100),
    ];

    #[test]
    fn test_transition_phases() {
        let transition = Transition::new(
            MotionSpec::on_mount(MotionProperty::Opacity, 0.0, 1.0, 1000)
                .delayed(500)
                .eased(Easing::Linear),
        );

        assert_eq!(transition.sample(0.0), Sample { value: 0.0, phase: Phase::Idle });
        assert_eq!(transition.sample(499.0).phase, Phase::Idle);

        let halfway = transition.sample(1000.0);
        assert_eq!(halfway.phase, Phase::Animating);
        assert!((halfway.value - 0.5).abs() < 1e-9);

        assert_eq!(transition.sample(1500.0), Sample { value: 1.0, phase: Phase::Settled });
        assert_eq!(transition.sample(10_000.0).value, 1.0);
    }

    #[test]
    fn test_zero_duration_settles_after_delay() {
        let transition = Transition::new(
            MotionSpec::on_mount(MotionProperty::Scale, 0.0, 1.0, 0).delayed(20),
        );
        assert_eq!(transition.sample(19.0).phase, Phase::Idle);
        assert_eq!(transition.sample(20.0), Sample { value: 1.0, phase: Phase::Settled });
    }

    #[test]
    fn test_ease_out_leads_linear() {
        for step in 1..10 {
            let t = step as f64 / 10.0;
            assert!(Easing::EaseOut.apply(t) > Easing::Linear.apply(t));
        }
        assert_eq!(Easing::EaseOut.apply(0.0), 0.0);
        assert_eq!(Easing::EaseOut.apply(1.0), 1.0);
        assert_eq!(Easing::EaseOut.apply(7.0), 1.0);
    }

    #[test]
    fn test_mount_timeline_frames() {
        let timeline = MountTimeline::new(&FADE_SLIDE);

        let initial = timeline.initial_frame();
        assert_eq!(initial.opacity, 0.0);
        assert_eq!(initial.translate_y, 50.0);
        assert_eq!(initial.scale, 1.0);

        let (_, settled) = timeline.frame_at(300.0);
        assert!(!settled);

        let (frame, settled) = timeline.frame_at(600.0);
        assert!(settled);
        assert_eq!(frame, MotionFrame::IDENTITY);
        assert_eq!(timeline.total_ms(), 600);
    }

    #[test]
    fn test_mount_timeline_ignores_interaction_specs() {
        let timeline = MountTimeline::new(&[MotionSpec::on_hover(MotionProperty::Scale, 1.1)]);
        assert!(timeline.is_empty());
        assert_eq!(timeline.frame_at(0.0), (MotionFrame::IDENTITY, true));
    }

    #[test]
    fn test_interaction_press_overrides_hover() {
        let specs = [
            MotionSpec::on_hover(MotionProperty::Scale, 1.05),
            MotionSpec::on_hover(MotionProperty::Rotate, 2.0),
            MotionSpec::on_press(MotionProperty::Scale, 0.95),
        ];

        assert_eq!(Interaction::default().resolve(&specs), MotionFrame::IDENTITY);

        let hovered = Interaction { hovered: true, pressed: false }.resolve(&specs);
        assert_eq!(hovered.scale, 1.05);
        assert_eq!(hovered.rotate_deg, 2.0);

        let pressed = Interaction { hovered: true, pressed: true }.resolve(&specs);
        assert_eq!(pressed.scale, 0.95);
        assert_eq!(pressed.rotate_deg, 2.0);
    }

    #[test]
    fn test_css_output() {
        let frame = MotionFrame::IDENTITY
            .with(MotionProperty::TranslateY, -50.0)
            .with(MotionProperty::Opacity, 0.25);
        assert_eq!(frame.css_transform(), "translateY(-50px) scale(1) rotate(0deg)");
        assert_eq!(frame.css_opacity(), "0.25");
    }
}
