// Component Library

pub mod button;
pub mod card;
pub mod icon;
pub mod interaction;
pub mod nav;
pub mod typography;

pub use button::*;
pub use card::*;
pub use icon::*;
pub use interaction::*;
pub use nav::*;
pub use typography::*;
