//! Color legend layout.
//!
//! Label widths come from a coarse per-length table rather than font metrics.

use serde::Serialize;

use crate::palette::ColorScheme;
use crate::types::{CanvasGeometry, GradientSteps, Rgb, STEP_COUNT};

/// Approximate rendered width of a short label, keyed by character count.
pub fn padding_for(label: &str) -> f64 {
    match label.chars().count() {
        1 => 2.5,
        2 => 10.0,
        3 => 15.5,
        4 => 21.0,
        5 => 29.0,
        6 => 35.0,
        7 => 41.0,
        8 => 47.0,
        _ => 0.0,
    }
}

/// Short label for a step value: `0`, plain decimals (at most two places)
/// in `[1, 10^4)`, otherwise one-decimal scientific notation with a
/// redundant `.0` dropped.
pub fn format_step(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if (1.0..1e4).contains(&value) {
        let fixed = format!("{:.2}", value);
        return fixed.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    let formatted = format!("{:.1e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let mantissa = mantissa.strip_suffix(".0").unwrap_or(mantissa);
            format!("{}e{}", mantissa, exponent)
        }
        None => formatted,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub name: &'static str,
    pub color: Rgb,
    /// Step value at the left edge of this entry's box
    pub boundary_label: String,
    pub box_x: f64,
    pub box_width: f64,
    /// Label x, nudged left so the text straddles the box edge
    pub label_x: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub scheme: ColorScheme,
    pub entries: Vec<LegendEntry>,
    /// Label for the right edge of the last box
    pub end_label: String,
    pub end_label_x: f64,
}

impl Legend {
    pub fn build(scheme: ColorScheme, steps: &GradientSteps, geometry: &CanvasGeometry) -> Self {
        let box_width = geometry.scale_width / STEP_COUNT as f64;
        let origin = geometry.label_width + geometry.margin_width;

        let entries = scheme
            .keys()
            .iter()
            .zip(steps.as_slice())
            .enumerate()
            .map(|(i, (key, step))| {
                let box_x = origin + i as f64 * box_width;
                let boundary_label = format_step(*step);
                LegendEntry {
                    name: key.name,
                    color: key.color,
                    label_x: box_x - padding_for(&boundary_label) / 2.0,
                    boundary_label,
                    box_x,
                    box_width,
                }
            })
            .collect();

        let end_label = format!(">{}", format_step(steps.last()));
        let end_x = origin + geometry.scale_width;
        Self {
            scheme,
            entries,
            end_label_x: end_x - padding_for(&end_label) / 2.0,
            end_label,
        }
    }
}
