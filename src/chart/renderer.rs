//! Owns the single live chart of a drawing surface and redraws it on demand.

use crate::chart::error::ChartError;
use crate::chart::spec::ChartSpec;
use crate::chart::surface::ChartSurface;
use crate::types::field::FieldName;
use crate::types::forecast_series::HOURS_PER_DAY;
use log::{debug, info};

/// What a [`ChartRenderer`] currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartState {
    /// Nothing has been rendered yet, or the chart was cleared.
    Empty,
    /// One live chart of `field` is bound to the surface.
    Rendered { field: FieldName },
}

struct LiveChart<C> {
    field: FieldName,
    chart: C,
}

/// Renders hourly charts onto a [`ChartSurface`], keeping at most one alive.
///
/// Every render goes through the same path: the previous chart, if any, is
/// destroyed first, then the new one is created. `render` takes `&mut self`,
/// so two renders can never interleave.
///
/// # Examples
///
/// ```no_run
/// use weather_outlook::{ChartRenderer, FieldName, SvgSurface};
///
/// # fn main() -> Result<(), weather_outlook::ChartError> {
/// let surface = SvgSurface::builder().target("hourly.svg").build();
/// let mut renderer = ChartRenderer::new(surface);
///
/// renderer.render(&[12.0; 24], FieldName::Temperature)?;
/// renderer.render_named(&[3.5; 24], "wind_speed")?; // replaces the temperature chart
/// # Ok(())
/// # }
/// ```
pub struct ChartRenderer<S: ChartSurface> {
    surface: S,
    live: Option<LiveChart<S::Chart>>,
}

impl<S: ChartSurface> ChartRenderer<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: None,
        }
    }

    /// Draws `values` as the chart of `field`, replacing the current chart.
    ///
    /// # Errors
    ///
    /// If the previous chart cannot be destroyed it stays live and nothing new
    /// is drawn. If drawing the new chart fails, the renderer is left
    /// [`ChartState::Empty`].
    pub fn render(
        &mut self,
        values: &[f64; HOURS_PER_DAY],
        field: FieldName,
    ) -> Result<(), ChartError> {
        let spec = ChartSpec::new(field, *values);

        if let Some(previous) = &self.live {
            debug!("Destroying {} chart before drawing {}", previous.field, field);
            self.surface.destroy(&previous.chart)?;
            self.live = None;
        }

        let chart = self.surface.create(&spec)?;
        self.live = Some(LiveChart { field, chart });
        info!("Rendered {} chart", field);
        Ok(())
    }

    /// Like [`ChartRenderer::render`], with the field given by its UI identifier.
    ///
    /// An unknown field fails with [`ChartError::Series`] before the surface is
    /// touched.
    pub fn render_named(
        &mut self,
        values: &[f64; HOURS_PER_DAY],
        field: &str,
    ) -> Result<(), ChartError> {
        let field: FieldName = field.parse()?;
        self.render(values, field)
    }

    /// Destroys the live chart, if any.
    pub fn clear(&mut self) -> Result<(), ChartError> {
        if let Some(previous) = &self.live {
            self.surface.destroy(&previous.chart)?;
            self.live = None;
        }
        Ok(())
    }

    pub fn state(&self) -> ChartState {
        match &self.live {
            None => ChartState::Empty,
            Some(live) => ChartState::Rendered { field: live.field },
        }
    }

    /// Handle of the live chart.
    pub fn chart(&self) -> Option<&S::Chart> {
        self.live.as_ref().map(|live| &live.chart)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
