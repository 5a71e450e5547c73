// Design Token System
// Palette follows the page's pink/purple/blue pastel scheme

pub mod animation;
pub mod color;
pub mod shadow;
pub mod spacing;
pub mod typography;
pub use animation::*;
pub use color::*;
pub use shadow::*;
pub use spacing::*;
pub use typography::*;
