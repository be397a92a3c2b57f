//! Score to color mapping.
//!
//! Two modes share the same breakpoints: a continuous hue gradient
//! interpolated in log space, and discrete buckets drawn from the scheme's
//! palette.

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, LayoutResult};
use crate::hsv::hsv_to_rgb;
use crate::palette::ColorScheme;
use crate::types::Rgb;

pub const GRADIENT_SATURATION: f64 = 0.75;
pub const GRADIENT_VALUE: f64 = 1.0;

/// Stand-in for `log10(0)` when an interval starts at zero.
const SMALLEST_POSITIVE: f64 = 5e-324;

/// Returned by bucket mapping when no bucket matches (NaN score or steps).
pub const UNMATCHED_GREY: Rgb = Rgb::new(128, 128, 128);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Gradient,
    Bucket,
}

fn check_lengths(steps: &[f64], scheme: ColorScheme) -> LayoutResult<()> {
    let keys = scheme.keys().len();
    if steps.len() != keys || keys != crate::types::STEP_COUNT {
        return Err(LayoutError::configuration(steps.len(), keys));
    }
    Ok(())
}

/// Continuous color: hue position `h` in `[0, 4]` mapped to hue `h / 6`.
pub fn color_by_gradient(score: f64, steps: &[f64], scheme: ColorScheme) -> LayoutResult<Rgb> {
    check_lengths(steps, scheme)?;
    if score == 0.0 {
        return Ok(scheme.first_color());
    }

    let h = gradient_position(score, steps);
    Ok(hsv_to_rgb(h / 6.0, GRADIENT_SATURATION, GRADIENT_VALUE))
}

fn gradient_position(score: f64, steps: &[f64]) -> f64 {
    let last = steps.len() - 1;
    if score >= steps[last] {
        return last as f64;
    }

    let bucket = steps
        .windows(2)
        .position(|w| w[0] <= score && score < w[1]);

    match bucket {
        Some(i) => {
            let start = if steps[i] == 0.0 { SMALLEST_POSITIVE } else { steps[i] };
            let end = steps[i + 1];
            let frac = (score.log10() - start.log10()) / (end.log10() - start.log10());
            if frac.is_finite() {
                i as f64 + frac
            } else {
                i as f64
            }
        }
        // below the first step, or NaN
        None => 0.0,
    }
}

/// Discrete color: the palette key of the bucket holding `score`.
pub fn color_by_bucket(score: f64, steps: &[f64], scheme: ColorScheme) -> LayoutResult<Rgb> {
    check_lengths(steps, scheme)?;
    let keys = scheme.keys();

    let color = if score == 0.0 || score < steps[1] {
        keys[0].color
    } else if score >= steps[1] && score < steps[2] {
        keys[1].color
    } else if score >= steps[2] && score < steps[3] {
        keys[2].color
    } else if score >= steps[3] && score < steps[4] {
        keys[3].color
    } else if score >= steps[4] {
        keys[4].color
    } else {
        UNMATCHED_GREY
    };
    Ok(color)
}

pub fn color_for(mode: ColorMode, score: f64, steps: &[f64], scheme: ColorScheme) -> LayoutResult<Rgb> {
    match mode {
        ColorMode::Gradient => color_by_gradient(score, steps, scheme),
        ColorMode::Bucket => color_by_bucket(score, steps, scheme),
    }
}

/// Same as [`color_for`], formatted as `rgb(r,g,b)`.
pub fn css_color(mode: ColorMode, score: f64, steps: &[f64], scheme: ColorScheme) -> LayoutResult<String> {
    color_for(mode, score, steps, scheme).map(|c| c.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::compute_steps;
    use crate::types::ScoreRange;

    const FIXED: [f64; 5] = [0.0, 0.1, 1.0, 10.0, 100.0];

    #[test]
    fn test_zero_score_is_first_color() {
        let range = ScoreRange::new(0.0, 1e-3, 1e-20);
        for scheme in ColorScheme::ALL {
            let steps = compute_steps(scheme, &range);
            assert_eq!(color_by_gradient(0.0, steps.as_slice(), scheme).unwrap(), scheme.first_color());
            assert_eq!(color_by_bucket(0.0, steps.as_slice(), scheme).unwrap(), scheme.first_color());
        }
    }

    #[test]
    fn test_step_count_mismatch() {
        let err = color_by_gradient(1.0, &[0.0, 1.0, 2.0], ColorScheme::Fixed).unwrap_err();
        assert_eq!(err, LayoutError::configuration(3, 5));
        assert!(color_by_bucket(1.0, &[0.0; 6], ColorScheme::Fixed).is_err());
    }

    #[test]
    fn test_gradient_hue_positions() {
        // exactly on a boundary lands on the hue anchor of that bucket
        assert_eq!(color_by_gradient(1.0, &FIXED, ColorScheme::Fixed).unwrap(), hsv_to_rgb(2.0 / 6.0, 0.75, 1.0));
        assert_eq!(color_by_gradient(100.0, &FIXED, ColorScheme::Fixed).unwrap(), hsv_to_rgb(4.0 / 6.0, 0.75, 1.0));
        assert_eq!(color_by_gradient(5000.0, &FIXED, ColorScheme::Fixed).unwrap(), hsv_to_rgb(4.0 / 6.0, 0.75, 1.0));
        // sqrt(10) sits halfway through [1, 10) in log space
        let mid = color_by_gradient(10f64.sqrt(), &FIXED, ColorScheme::Fixed).unwrap();
        assert_eq!(mid, hsv_to_rgb(2.5 / 6.0, 0.75, 1.0));
    }

    #[test]
    fn test_gradient_first_interval_from_zero() {
        // interval [0, 0.1) uses the smallest positive float as its start
        let near_top = gradient_position(0.099, &FIXED);
        assert!(near_top > 0.99 && near_top < 1.0, "{}", near_top);
        let tiny = gradient_position(1e-300, &FIXED);
        assert!(tiny > 0.0 && tiny < 0.1, "{}", tiny);
    }

    #[test]
    fn test_gradient_degenerate_steps() {
        let flat = [0.5, 0.5, 0.5, 0.5, 0.5];
        assert_eq!(gradient_position(0.1, &flat), 0.0);
        assert_eq!(gradient_position(0.5, &flat), 4.0);
    }

    #[test]
    fn test_gradient_non_finite_fraction_keeps_interval_index() {
        // log10 of a negative bound is NaN, so only the interval index survives
        let negative = [-10.0, -5.0, -1.0, 3.0, 4.0];
        assert_eq!(gradient_position(-3.0, &negative), 1.0);
        assert_eq!(gradient_position(-7.0, &negative), 0.0);
        assert_eq!(
            color_by_gradient(-3.0, &negative, ColorScheme::Dynamic).unwrap(),
            hsv_to_rgb(1.0 / 6.0, 0.75, 1.0)
        );
    }

    #[test]
    fn test_bucket_assignment() {
        let keys = ColorScheme::NcbiBlast.keys();
        let steps = [0.0, 40.0, 50.0, 80.0, 200.0];
        let cases = [(12.0, 0), (40.0, 1), (49.9, 1), (50.0, 2), (80.0, 3), (199.0, 3), (200.0, 4), (1e6, 4)];
        for (score, expected) in cases {
            assert_eq!(
                color_by_bucket(score, &steps, ColorScheme::NcbiBlast).unwrap(),
                keys[expected].color,
                "score {}",
                score
            );
        }
    }

    #[test]
    fn test_bucket_grey_only_for_nan() {
        assert_eq!(color_by_bucket(f64::NAN, &FIXED, ColorScheme::Fixed).unwrap(), UNMATCHED_GREY);
        let nan_steps = [0.0, f64::NAN, f64::NAN, f64::NAN, f64::NAN];
        assert_eq!(color_by_bucket(3.0, &nan_steps, ColorScheme::Fixed).unwrap(), UNMATCHED_GREY);
    }

    #[test]
    fn test_css_color_format() {
        let css = css_color(ColorMode::Bucket, 250.0, &[0.0, 40.0, 50.0, 80.0, 200.0], ColorScheme::NcbiBlast).unwrap();
        assert_eq!(css, "rgb(232,58,45)");
    }
}
