//! A [`ChartSurface`] that draws line charts into one SVG file using plotters.

use crate::chart::error::ChartError;
use crate::chart::spec::ChartSpec;
use crate::chart::surface::ChartSurface;
use crate::types::forecast_series::HOURS_PER_DAY;
use bon::bon;
use log::{debug, warn};
use plotters::prelude::*;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 200;

const LINE_COLOR: RGBColor = RGBColor(33, 150, 243);

/// A chart currently written to an [`SvgSurface`] target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgChart {
    pub path: PathBuf,
    pub bytes: usize,
}

/// Binds to a single SVG file. Creating a chart writes the file, destroying
/// it removes the file again.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    target: PathBuf,
    width: u32,
    height: u32,
}

#[bon]
impl SvgSurface {
    /// Creates a surface bound to `target`.
    ///
    /// ```
    /// use weather_outlook::SvgSurface;
    ///
    /// let surface = SvgSurface::builder()
    ///     .target("charts/hourly.svg")
    ///     .width(800)
    ///     .build();
    /// assert_eq!(surface.size(), (800, 200));
    /// ```
    #[builder]
    pub fn new(
        #[builder(into)] target: PathBuf,
        #[builder(default = DEFAULT_WIDTH)] width: u32,
        #[builder(default = DEFAULT_HEIGHT)] height: u32,
    ) -> Self {
        Self {
            target,
            width,
            height,
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw(&self, spec: &ChartSpec) -> Result<String, DrawingAreaErrorKind<io::Error>> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, self.size()).into_drawing_area();
            root.fill(&WHITE)?;

            let (y_min, y_max) = spec.y_range();
            let last_hour = HOURS_PER_DAY as u32 - 1;
            let mut chart = ChartBuilder::on(&root)
                .caption(spec.label, ("sans-serif", 14))
                .margin(10)
                .set_label_area_size(LabelAreaPosition::Left, 40)
                .set_label_area_size(LabelAreaPosition::Bottom, 25)
                .build_cartesian_2d(0u32..last_hour, y_min..y_max)?;

            chart
                .configure_mesh()
                .x_labels(HOURS_PER_DAY)
                .x_label_formatter(&|hour| {
                    spec.labels
                        .get(*hour as usize)
                        .cloned()
                        .unwrap_or_default()
                })
                .y_label_formatter(&|value| format!("{value:.1}"))
                .draw()?;

            chart.draw_series(LineSeries::new(
                spec.values
                    .iter()
                    .enumerate()
                    .map(|(hour, value)| (hour as u32, *value)),
                &LINE_COLOR,
            ))?;

            root.present()?;
        }
        Ok(svg)
    }
}

impl ChartSurface for SvgSurface {
    type Chart = SvgChart;

    fn create(&mut self, spec: &ChartSpec) -> Result<SvgChart, ChartError> {
        let svg = self.draw(spec).map_err(|e| ChartError::Drawing {
            field: spec.field,
            message: e.to_string(),
        })?;

        if let Some(parent) = self.target.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| ChartError::Write(self.target.clone(), e))?;
        }
        std::fs::write(&self.target, &svg)
            .map_err(|e| ChartError::Write(self.target.clone(), e))?;
        debug!(
            "Wrote {} chart ({} bytes) to {}",
            spec.field,
            svg.len(),
            self.target.display()
        );

        Ok(SvgChart {
            path: self.target.clone(),
            bytes: svg.len(),
        })
    }

    fn destroy(&mut self, chart: &SvgChart) -> Result<(), ChartError> {
        match std::fs::remove_file(&chart.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Chart {} was already gone", chart.path.display());
                Ok(())
            }
            Err(e) => Err(ChartError::Remove(chart.path.clone(), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::renderer::{ChartRenderer, ChartState};
    use crate::types::field::FieldName;
    use tempfile::tempdir;

    #[test]
    fn test_render_writes_svg() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let target = dir.path().join("hourly.svg");
        let mut renderer = ChartRenderer::new(SvgSurface::builder().target(&target).build());

        let mut values = [2.0; HOURS_PER_DAY];
        values[14] = 7.5;
        renderer.render(&values, FieldName::WindSpeed)?;

        let svg = std::fs::read_to_string(&target)?;
        assert!(svg.contains("<svg"));
        assert_eq!(renderer.chart().map(|c| c.bytes), Some(svg.len()));
        Ok(())
    }

    #[test]
    fn test_rerender_replaces_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let target = dir.path().join("nested").join("hourly.svg");
        let mut renderer = ChartRenderer::new(SvgSurface::builder().target(&target).build());

        renderer.render(&[-3.0; HOURS_PER_DAY], FieldName::Temperature)?;
        renderer.render(&[0.4; HOURS_PER_DAY], FieldName::Precipitation)?;

        assert!(target.exists());
        assert_eq!(
            renderer.state(),
            ChartState::Rendered {
                field: FieldName::Precipitation
            }
        );
        Ok(())
    }

    #[test]
    fn test_clear_removes_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let target = dir.path().join("hourly.svg");
        let mut renderer = ChartRenderer::new(SvgSurface::builder().target(&target).build());

        renderer.render(&[1.0; HOURS_PER_DAY], FieldName::Temperature)?;
        renderer.clear()?;

        assert!(!target.exists());
        Ok(())
    }

    #[test]
    fn test_destroy_missing_file_is_ok() -> Result<(), ChartError> {
        let mut surface = SvgSurface::builder().target("does-not-exist.svg").build();
        surface.destroy(&SvgChart {
            path: PathBuf::from("does-not-exist.svg"),
            bytes: 0,
        })
    }
}
