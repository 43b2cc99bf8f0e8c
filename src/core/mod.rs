//! Core progression state and logic.

pub mod constants;
pub mod progression;
pub mod settings;
pub mod tick;

pub use constants::*;
pub use progression::*;
pub use settings::*;
pub use tick::*;
