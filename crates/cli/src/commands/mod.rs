//! Subcommand implementations.

mod fit;
mod gradient;
mod info;

pub use fit::{FitArgs, fit};
pub use gradient::{GradientArgs, gradient};
pub use info::{InfoArgs, info};
