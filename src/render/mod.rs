//! Chart Rendering
//!
//! SVG renderers for the dashboard. Every render call builds a fresh scene
//! from its inputs; there is no incremental patching.
//!
//! - [`LineChart`]: heart-rate samples against sample index
//! - [`ZPlane`]: filter zeros and poles on the complex plane

pub mod axis;
pub mod curve;
pub mod line_chart;
pub mod scale;
pub mod svg;
pub mod symbol;
pub mod zplane;

pub use line_chart::{LineChart, Margin};
pub use scale::LinearScale;
pub use svg::{Element, Node, PathData, Svg};
pub use zplane::ZPlane;
