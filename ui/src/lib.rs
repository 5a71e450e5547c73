// Design system for the portfolio page: tokens plus the handful of
// components the sections are composed from.

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;
