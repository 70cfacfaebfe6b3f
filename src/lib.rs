//! bar-chart-kit: deterministic bar chart geometry and scene building.
//!
//! `core` maps a numeric series into pixel geometry (bars, bar tops, value
//! labels, gridlines, axis labels). `render` holds the backend-agnostic scene
//! tree and renderers. `api` wires both behind the `BarChart` component and
//! its serde input contract.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{BarChart, BarChartConfig};
pub use error::{ChartError, ChartResult};
