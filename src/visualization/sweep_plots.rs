//! Orbit-image rendering for the rotor sweep (Plotters)

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;

use crate::simulation::rotating_frame::RotatedSeries;

const PLOT_SIZE: u32 = 900; // square canvas, equal axis ranges
const BACKGROUND: RGBColor = RGBColor(16, 16, 16);
const TRACE: RGBColor = RGBColor(120, 200, 255);

/// Render one rotating-frame orbit to `path` as a square dark-background
/// chart with equal x/y ranges. Same-named files are overwritten silently.
pub fn save_orbit_plot(path: &Path, title: &str, orbit: &RotatedSeries) -> Result<()> {
    // symmetric axis range around the origin with a small margin
    let r = orbit.max_radius().max(1e-9) * 1.1;

    let root = BitMapBackend::new(path, (PLOT_SIZE, PLOT_SIZE)).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .caption(title, ("sans-serif", 28).into_font().color(&WHITE))
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(-r..r, -r..r)?;

    chart
        .configure_mesh()
        .x_desc("x [m]")
        .y_desc("y [m]")
        .axis_desc_style(("sans-serif", 20).into_font().color(&WHITE))
        .label_style(("sans-serif", 14).into_font().color(&WHITE))
        .bold_line_style(RGBColor(70, 70, 70).stroke_width(1))
        .light_line_style(RGBColor(40, 40, 40).stroke_width(1))
        .draw()?;

    chart.draw_series(LineSeries::new(orbit.points(), TRACE.stroke_width(1)))?;

    root.present()?;
    Ok(())
}
