use crate::chart::error::ChartError;
use crate::chart::spec::ChartSpec;

/// A drawing target that can hold a rendered chart.
///
/// Only [`crate::ChartRenderer`] should call these methods: it guarantees a
/// chart is destroyed before the next one is created on the same surface.
pub trait ChartSurface {
    /// Handle to a live chart on this surface.
    type Chart;

    /// Draws `spec` and returns the handle of the new chart.
    fn create(&mut self, spec: &ChartSpec) -> Result<Self::Chart, ChartError>;

    /// Frees everything `chart` holds on the surface.
    fn destroy(&mut self, chart: &Self::Chart) -> Result<(), ChartError>;
}
