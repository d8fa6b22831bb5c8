// HTML legend markup for the pie chart
use crate::models::{format_value, ChartInput};
use crate::palette::SliceColor;

/// Build the legend list the profile page embeds next to the chart: one item
/// per label/value pair, in input order, swatch colors matching the slice.
pub fn build_legend(input: &ChartInput, colors: &[SliceColor]) -> String {
    let mut text = Vec::new();
    text.push(r#"<ul class="pie-legend">"#.to_string());
    for (i, value) in input.values().iter().enumerate() {
        let label = input.labels.get(i).map(String::as_str).unwrap_or("");
        let color = &colors[i];
        text.push(format!(
            r#"<li><span style="background-color:{}; border-color:{}"></span>{}: {}</li>"#,
            color.fill(),
            color.border(),
            label,
            format_value(*value),
        ));
    }
    text.push("</ul>".to_string());
    text.join("")
}
