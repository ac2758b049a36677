//! Renders a [`DaySeries`] as a line chart.
//!
//! The renderer is an explicit object rather than a handle into any global
//! chart state: construct a [`SeriesPlot`], optionally mark the vaccine
//! introduction day, and call [`SeriesPlot::render`].

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::error::OutbreakError;
use crate::log::debug;
use crate::series::DaySeries;

const PLOT_SIZE: (u32, u32) = (1024, 768);
const CAPTION_FONT: (&str, u32) = ("sans-serif", 30);
const DASH_SIZE: u32 = 8;
const DASH_SPACING: u32 = 6;

fn draw_error<E: std::fmt::Display>(error: E) -> OutbreakError {
    OutbreakError::PlotError(error.to_string())
}

/// A line chart of infected counts over days, written to a PNG file.
pub struct SeriesPlot {
    output: PathBuf,
    label: String,
    vaccine_day: Option<u32>,
}

impl SeriesPlot {
    /// Creates a renderer writing to `output`, with `label` naming the
    /// plotted series in the legend.
    pub fn new<P: AsRef<Path>>(output: P, label: &str) -> Self {
        Self {
            output: output.as_ref().to_path_buf(),
            label: label.to_string(),
            vaccine_day: None,
        }
    }

    /// Marks the vaccine introduction day with a dashed vertical line and a
    /// legend entry.
    #[must_use]
    pub fn vaccine_day(mut self, day: u32) -> Self {
        self.vaccine_day = Some(day);
        self
    }

    /// Draws the chart: x axis "Days", y axis "Number of infected", title
    /// "Disease transmission".
    ///
    /// # Errors
    ///
    /// Returns an `OutbreakError` when the backend fails to draw or write
    /// the output file.
    pub fn render(&self, series: &DaySeries) -> Result<(), OutbreakError> {
        debug!("rendering series plot to {}", self.output.display());
        let max_day = series.last_day().max(1);
        let max_infected = series.last_infected().max(1);

        let drawing_area = BitMapBackend::new(&self.output, PLOT_SIZE).into_drawing_area();
        drawing_area.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(&drawing_area)
            .caption("Disease transmission", CAPTION_FONT)
            .margin(10)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(0..max_day, 0..max_infected + 1)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .x_desc("Days")
            .y_desc("Number of infected")
            .draw()
            .map_err(draw_error)?;

        chart
            .draw_series(LineSeries::new(
                series.records().iter().map(|r| (r.day, r.infected)),
                &RED,
            ))
            .map_err(draw_error)?
            .label(self.label.clone())
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

        if let Some(day) = self.vaccine_day {
            chart
                .draw_series(DashedLineSeries::new(
                    [(day, 0), (day, max_infected + 1)],
                    DASH_SIZE,
                    DASH_SPACING,
                    GREEN.stroke_width(2),
                ))
                .map_err(draw_error)?
                .label("Vaccine introduction")
                .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

            chart
                .configure_series_labels()
                .border_style(BLACK)
                .background_style(WHITE.mix(0.8))
                .draw()
                .map_err(draw_error)?;
        }

        drawing_area.present().map_err(draw_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SeriesPlot;
    use crate::series::DaySeries;
    use tempfile::tempdir;

    fn sample_series() -> DaySeries {
        let mut series = DaySeries::with_starting(10);
        series.push(40);
        series.push(160);
        series.push(640);
        series
    }

    #[test]
    fn renders_png_output() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("series.png");
        SeriesPlot::new(&path, "Infected")
            .render(&sample_series())
            .unwrap();
        assert!(path.exists(), "PNG file should exist");
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn renders_vaccine_marker() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("vaccine_series.png");
        SeriesPlot::new(&path, "Infected")
            .vaccine_day(2)
            .render(&sample_series())
            .unwrap();
        assert!(path.exists(), "PNG file should exist");
    }

    #[test]
    fn renders_single_record_series() {
        // A saturation run can stop before simulating any day; the axis
        // ranges must still be non-degenerate.
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("flat.png");
        SeriesPlot::new(&path, "Infected")
            .render(&DaySeries::with_starting(10))
            .unwrap();
        assert!(path.exists(), "PNG file should exist");
    }
}
