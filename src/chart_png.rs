// Pie chart PNG export - draw the profile statistics chart
use crate::models::ChartInput;
use crate::palette::SliceColor;
use anyhow::Result;
use plotters::prelude::*;
use std::f64::consts::TAU;
use std::path::{Path, PathBuf};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 800;
const TITLE_FONT_SIZE: u32 = 32;
const LABEL_FONT_SIZE: u32 = 20;
const BORDER_WIDTH: u32 = 1;

pub struct PiePngRenderer {
    output_path: PathBuf,
}

impl PiePngRenderer {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Render the pie into the output PNG. The built-in slice labels stay off;
    /// the HTML legend built separately is the legend.
    pub fn render(&self, input: &ChartInput, colors: &[SliceColor]) -> Result<()> {
        let root = BitMapBackend::new(&self.output_path, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let (title_area, chart_area) = root.split_vertically(70);
        self.draw_title(&title_area)?;
        self.draw_slices(&chart_area, input, colors)?;

        root.present()?;
        Ok(())
    }

    fn draw_title(&self, area: &DrawingArea<BitMapBackend, plotters::coord::Shift>) -> Result<()> {
        area.fill(&RGBColor(240, 240, 250))?;

        area.draw_text(
            "Statistics",
            &TextStyle::from(("sans-serif", TITLE_FONT_SIZE).into_font())
                .color(&RGBColor(40, 40, 80)),
            ((WIDTH / 2) as i32 - 60, 40),
        )?;

        Ok(())
    }

    fn draw_slices(
        &self,
        area: &DrawingArea<BitMapBackend, plotters::coord::Shift>,
        input: &ChartInput,
        colors: &[SliceColor],
    ) -> Result<()> {
        let values = input.values();
        let total: f64 = values.iter().sum();

        // A zero or empty dataset still yields a chart image, just a blank one.
        if total == 0.0 {
            area.draw_text(
                "No data to plot",
                &TextStyle::from(("sans-serif", LABEL_FONT_SIZE).into_font())
                    .color(&RGBColor(150, 150, 150)),
                ((WIDTH / 2) as i32 - 60, (HEIGHT / 2) as i32),
            )?;
            return Ok(());
        }

        let center = ((WIDTH / 2) as i32, ((HEIGHT - 70) / 2) as i32);
        let radius = (WIDTH.min(HEIGHT - 70) / 2 - 60) as f64;

        let mut current_angle = 0.0_f64;
        for (i, value) in values.iter().enumerate() {
            let share = value / total;
            let angle = share * TAU;
            if angle == 0.0 {
                continue;
            }

            let color = colors[i];
            let rgb = RGBColor(color.r, color.g, color.b);

            // Sweep the wedge as a polygon fan from the center
            let steps = ((angle * 30.0).ceil() as usize).max(2);
            let mut points = vec![center];
            for j in 0..=steps {
                let step_angle = current_angle + (j as f64 / steps as f64) * angle;
                let x = center.0 + (radius * step_angle.cos()) as i32;
                let y = center.1 + (radius * step_angle.sin()) as i32;
                points.push((x, y));
            }

            area.draw(&Polygon::new(points.clone(), rgb.mix(0.2).filled()))?;
            // Polygon always fills; the border has to be a closed path on top
            let mut outline = points;
            outline.push(center);
            area.draw(&PathElement::new(
                outline,
                ShapeStyle::from(rgb).stroke_width(BORDER_WIDTH),
            ))?;

            current_angle += angle;
        }

        Ok(())
    }
}

pub fn export_pie_png(input: &ChartInput, colors: &[SliceColor], output_path: &Path) -> Result<()> {
    let renderer = PiePngRenderer::new(output_path.to_path_buf());
    renderer.render(input, colors)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Phases;

    fn blend_over_white(channel: u8) -> f64 {
        255.0 * 0.8 + f64::from(channel) * 0.2
    }

    #[test]
    fn test_slice_interior_keeps_translucent_fill() {
        let input: ChartInput = serde_json::from_value(serde_json::json!({
            "labels": ["AC"],
            "datasets": [{ "data": [5.0] }],
        }))
        .unwrap();
        let color = SliceColor::at(0, &Phases::new(0.0));

        let mut buf = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buf, (WIDTH, HEIGHT)).into_drawing_area();
            root.fill(&WHITE).unwrap();
            let renderer = PiePngRenderer::new(PathBuf::from("unused.png"));
            renderer.draw_slices(&root, &input, &[color]).unwrap();
            root.present().unwrap();
        }

        // Inside the single full-circle slice, off the radial start line
        let (x, y) = (WIDTH / 2, (HEIGHT - 70) / 2 + 100);
        let idx = ((y * WIDTH + x) * 3) as usize;
        let pixel = [buf[idx], buf[idx + 1], buf[idx + 2]];

        assert_ne!(
            pixel,
            [color.r, color.g, color.b],
            "interior must be the translucent fill, not the full-alpha slice color"
        );
        for (got, channel) in pixel.iter().zip([color.r, color.g, color.b]) {
            let expected = blend_over_white(channel);
            assert!(
                (f64::from(*got) - expected).abs() <= 4.0,
                "interior channel {} should blend to ~{:.0} over white",
                got,
                expected
            );
        }
    }
}
