//! # Poster Layout
//!
//! Pure layout computation for variable-font posters.
//!
//! Layout never touches a font file: everything it needs from the font goes
//! through the [`TextMeasure`] trait. The result is a [`PosterPlan`] that a
//! renderer turns into a page.
//!
//! ## Example
//!
//! ```
//! use varposter_layout::{AxisSetting, GradientConfig, TextMeasure, gradient::layout_gradient};
//!
//! struct Monospace;
//!
//! impl TextMeasure for Monospace {
//!     fn advance(&self, _ch: char, size: f64, _axes: &[AxisSetting]) -> f64 {
//!         size * 0.6
//!     }
//! }
//!
//! let layout = layout_gradient(&Monospace, &GradientConfig::default()).unwrap();
//! assert_eq!(layout.plan.runs.len(), 7 * 15);
//! ```

mod axis;
mod error;
pub mod fit;
pub mod gradient;
mod measure;
mod paper;
mod plan;

pub use axis::{AxisSetting, OPSZ, WDTH, WGHT, with_axis};
pub use error::{Error, Result};
pub use fit::{FitConfig, VerticalMetrics};
pub use gradient::GradientConfig;
pub use measure::TextMeasure;
pub use paper::{DEFAULT_FORMAT, Orientation, PaperFormat};
pub use plan::{PageSize, PosterPlan, Rgb, TextRun};
