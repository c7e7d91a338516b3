//! Turns a [`ForecastSeries`] into a [`DisplayViewModel`] and keeps the chart in step.

use crate::analysis::aggregator::aggregate;
use crate::analysis::comfort::classify;
use crate::analysis::series::extract;
use crate::chart::error::ChartError;
use crate::chart::renderer::{ChartRenderer, ChartState};
use crate::chart::surface::ChartSurface;
use crate::display::view_model::{DisplayViewModel, HIGHLIGHT_HOUR};
use crate::types::field::FieldName;
use crate::types::forecast_series::ForecastSeries;
use log::debug;

/// Drives the summary view and the hourly chart for one drawing surface.
pub struct DisplayController<S: ChartSurface> {
    renderer: ChartRenderer<S>,
}

impl<S: ChartSurface> DisplayController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            renderer: ChartRenderer::new(surface),
        }
    }

    /// Aggregates and classifies `series`, then draws its temperature chart.
    ///
    /// # Errors
    ///
    /// Errors are passed through as they are; no fallback view-model is built.
    /// A chart failure leaves the previous chart in place when it could not be
    /// destroyed, see [`ChartRenderer::render`].
    pub fn present(&mut self, series: &ForecastSeries) -> Result<DisplayViewModel, ChartError> {
        let stats = aggregate(series);
        let label = classify(&stats.average_probabilities());
        let highlight = &series.records()[HIGHLIGHT_HOUR];
        debug!(
            "Summary: {:.2}..{:.2}°C, comfort {}",
            stats.min_temp, stats.max_temp, label
        );

        let view_model = DisplayViewModel::new(&stats, label, highlight);
        self.reselect(series, FieldName::default())?;
        Ok(view_model)
    }

    /// Redraws the chart for `field` without recomputing the summary.
    pub fn reselect(
        &mut self,
        series: &ForecastSeries,
        field: FieldName,
    ) -> Result<(), ChartError> {
        let values = extract(series, field);
        self.renderer.render(&values, field)
    }

    /// Like [`DisplayController::reselect`], for a field identifier coming from the UI.
    ///
    /// # Errors
    ///
    /// An unknown identifier fails before anything is drawn.
    pub fn reselect_named(
        &mut self,
        series: &ForecastSeries,
        field: &str,
    ) -> Result<(), ChartError> {
        let field: FieldName = field.parse()?;
        self.reselect(series, field)
    }

    pub fn chart_state(&self) -> ChartState {
        self.renderer.state()
    }

    pub fn renderer(&self) -> &ChartRenderer<S> {
        &self.renderer
    }
}
