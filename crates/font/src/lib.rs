//! # Variable Font
//!
//! Measurement and glyph outlines of variable fonts, backed by skrifa.
//!
//! ## Example
//!
//! ```no_run
//! use varposter_font::VariableFont;
//! use varposter_layout::{AxisSetting, TextMeasure};
//!
//! let data = std::fs::read("variable.ttf").unwrap();
//! let font = VariableFont::new(&data).unwrap();
//! let width = font.text_width("Hello", 72.0, &[AxisSetting::new("wght", 700.0)]);
//! ```

mod error;
mod font;
mod outline;

pub use error::{Error, Result};
pub use font::{AxisInfo, VariableFont};
