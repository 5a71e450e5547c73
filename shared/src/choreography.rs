//! Motion assigned to each animated element of the page.

use crate::motion::MotionProperty::{Opacity, Rotate, Scale, TranslateY};
use crate::motion::MotionSpec;

pub const PROJECT_STAGGER_MS: u32 = 100;

pub const BRAND: [MotionSpec; 2] = [
    MotionSpec::on_mount(Opacity, 0.0, 1.0, 500),
    MotionSpec::on_mount(TranslateY, -50.0, 0.0, 500),
];

pub const NAV_ITEM: [MotionSpec; 2] = [
    MotionSpec::on_hover(Scale, 1.1),
    MotionSpec::on_press(Scale, 0.95),
];

pub const HERO: [MotionSpec; 1] = [MotionSpec::on_mount(Opacity, 0.0, 1.0, 1000)];

pub const HERO_CALL_TO_ACTION: [MotionSpec; 2] = [
    MotionSpec::on_hover(Scale, 1.05),
    MotionSpec::on_press(Scale, 0.95),
];

pub const PROJECT_CARD_HOVER: [MotionSpec; 2] = [
    MotionSpec::on_hover(Scale, 1.05),
    MotionSpec::on_hover(Rotate, 2.0),
];

/// Entrance of the `number`-th project card (1-based); cards rise in one after another.
pub const fn project_card_entrance(number: u32) -> [MotionSpec; 2] {
    let delay = number * PROJECT_STAGGER_MS;
    [
        MotionSpec::on_mount(Opacity, 0.0, 1.0, 500).delayed(delay),
        MotionSpec::on_mount(TranslateY, 50.0, 0.0, 500).delayed(delay),
    ]
}

pub const CONTACT: [MotionSpec; 1] = [MotionSpec::on_mount(Opacity, 0.0, 1.0, 1000).delayed(500)];

pub const CONTACT_CALL_TO_ACTION: [MotionSpec; 2] = [
    MotionSpec::on_hover(Scale, 1.05),
    MotionSpec::on_press(Scale, 0.95),
];
