mod null_renderer;

pub use null_renderer::NullRenderer;

use crate::api::{ChartSpec, DashboardConfig};
use crate::error::DashboardResult;

/// Contract implemented by any presentation backend.
///
/// Backends receive the dashboard configuration once, then fully materialized
/// `ChartSpec`s, so drawing code stays isolated from the data transforms.
pub trait Renderer {
    fn configure(&mut self, config: &DashboardConfig) -> DashboardResult<()> {
        config.validate()
    }

    fn render(&mut self, chart: &ChartSpec) -> DashboardResult<()>;
}
