// Statistics dataset as the profile page supplies it
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Per-user statistics in the shape the server renders:
/// `{ "labels": [string], "datasets": [{ "data": [number] }] }`.
///
/// Labels and the first dataset's values are parallel sequences; no length
/// check is performed and a mismatch surfaces at render time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartInput {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub data: Vec<f64>,
}

impl ChartInput {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read statistics file: {}", path.display()))?;
        let input: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse statistics JSON: {}", path.display()))?;
        Ok(input)
    }

    /// The first dataset, which carries the pie values.
    pub fn values(&self) -> &[f64] {
        self.datasets.first().map(|d| d.data.as_slice()).unwrap_or(&[])
    }

    /// Sum of all values. Only used to detect the no-statistics case.
    pub fn total(&self) -> f64 {
        self.values().iter().sum()
    }
}

/// Format a value the way the page printed it: integral values without a
/// decimal point.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
