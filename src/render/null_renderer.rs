use crate::api::{ChartKind, ChartSpec, DashboardConfig};
use crate::error::DashboardResult;
use crate::render::Renderer;

/// No-op renderer used by tests and headless exports.
///
/// It still validates every chart so tests catch malformed specifications
/// before a real backend is involved.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub configured_title: Option<String>,
    pub rendered_kinds: Vec<ChartKind>,
    pub last_series_count: usize,
}

impl Renderer for NullRenderer {
    fn configure(&mut self, config: &DashboardConfig) -> DashboardResult<()> {
        config.validate()?;
        self.configured_title = Some(config.page_title.clone());
        Ok(())
    }

    fn render(&mut self, chart: &ChartSpec) -> DashboardResult<()> {
        chart.validate()?;
        self.rendered_kinds.push(chart.kind);
        self.last_series_count = chart.series.len();
        Ok(())
    }
}
