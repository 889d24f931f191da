//! treatment-dashboard: chart specifications for a comparative treatment dashboard.
//!
//! The crate keeps a strict split between the immutable dataset and its pure
//! transforms (`core`), renderer-agnostic chart descriptions (`api`) and the
//! presentation seam (`render`). Nothing here draws pixels.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartSpec, Dashboard, DashboardConfig, build_dashboard};
pub use core::TreatmentDataset;
pub use error::{DashboardError, DashboardResult};
