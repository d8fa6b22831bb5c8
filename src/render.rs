// Orchestrates one profile chart render: palette, PNG, legend, fallback note
use crate::chart_png;
use crate::legend::build_legend;
use crate::models::ChartInput;
use crate::palette::{rainbow_palette, Phases};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const NO_STATISTICS_MESSAGE: &str = "No statistics yet.";

/// Artifacts written into the output directory. These stand in for the page
/// containers the original script mutated.
#[derive(Debug)]
pub struct RenderedChart {
    pub chart_png: PathBuf,
    pub legend_html: PathBuf,
    /// Present only when the statistics total is zero.
    pub statistics_html: Option<PathBuf>,
    pub total: f64,
}

/// Render the pie chart, write the legend markup, and leave the fallback
/// message when there is nothing to report. The chart is always built first;
/// the zero-total note supplements it rather than replacing it.
pub fn render_pie_chart(input: &ChartInput, out_dir: &Path, phases: &Phases) -> Result<RenderedChart> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir.display()))?;

    let values = input.values();
    let colors = rainbow_palette(values.len(), phases);
    let total = input.total();
    debug!("Rendering {} slices, total {}", values.len(), total);

    let chart_png = out_dir.join("piechart.png");
    chart_png::export_pie_png(input, &colors, &chart_png)?;
    info!("Wrote chart: {}", chart_png.display());

    let legend_html = out_dir.join("piechart-legend.html");
    fs::write(&legend_html, build_legend(input, &colors))
        .with_context(|| format!("Failed to write legend: {}", legend_html.display()))?;
    info!("Wrote legend: {}", legend_html.display());

    let statistics_html = if total == 0.0 {
        let path = out_dir.join("statistics.html");
        fs::write(&path, NO_STATISTICS_MESSAGE)
            .with_context(|| format!("Failed to write fallback note: {}", path.display()))?;
        Some(path)
    } else {
        None
    };

    Ok(RenderedChart {
        chart_png,
        legend_html,
        statistics_html,
        total,
    })
}
