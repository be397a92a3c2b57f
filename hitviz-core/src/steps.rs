//! Gradient step planning.
//!
//! Turns a score range into five ordered breakpoints. Constant schemes ignore
//! the data; the dynamic scheme bins in log space while scores sit below one
//! and switches to linear bins once the whole range is at or above one.

use crate::palette::ColorScheme;
use crate::types::{GradientSteps, ScoreRange};

/// Exponent anchoring the ladder used when every score is effectively zero.
pub const NEAR_ZERO_EXPONENT: f64 = -304.0;

/// Ranges whose `max` is strictly below this take the near-zero ladder.
pub const NEAR_ZERO_MAX: f64 = 1e-304;

const FIXED_LADDER: [f64; 5] = [0.0, 1e-1, 1.0, 10.0, 100.0];
const NCBIBLAST_LADDER: [f64; 5] = [0.0, 40.0, 50.0, 80.0, 200.0];
const EVALUE_LADDER: [f64; 5] = [0.0, 1e-5, 1e-2, 1.0, 100.0];

/// Compute the five gradient steps for `scheme` over `range`.
///
/// The range is not validated: `min > max` or negative bounds give
/// meaningless steps. See [`ScoreRange::validate`].
pub fn compute_steps(scheme: ColorScheme, range: &ScoreRange) -> GradientSteps {
    match scheme {
        ColorScheme::Fixed => GradientSteps(FIXED_LADDER),
        ColorScheme::NcbiBlast => GradientSteps(NCBIBLAST_LADDER),
        ColorScheme::Dynamic => dynamic_steps(range),
        ColorScheme::BlasterJs => GradientSteps(EVALUE_LADDER),
    }
}

fn dynamic_steps(range: &ScoreRange) -> GradientSteps {
    let ScoreRange { min, max, min_non_zero } = *range;

    if max < NEAR_ZERO_MAX {
        log::debug!("Dynamic steps: max {:e} is near zero, using fixed exponent ladder", max);
        let e = NEAR_ZERO_EXPONENT;
        return GradientSteps([
            0.0,
            NEAR_ZERO_MAX,
            10f64.powf(e / 2.0),
            10f64.powf(e / 4.0),
            10f64.powf(e / 8.0),
        ]);
    }

    let steps = if min < 1.0 {
        if max <= 1.0 {
            log::debug!("Dynamic steps: log bisection over [{:e}, {:e}]", min, max);
            log_bisection(min, max, min_non_zero)
        } else {
            log::debug!("Dynamic steps: range [{:e}, {:e}] straddles one", min, max);
            straddling_one(min, max, min_non_zero)
        }
    } else {
        log::debug!("Dynamic steps: linear split over [{}, {}]", min, max);
        [
            min,
            (3.0 * min + max) / 4.0,
            (min + max) / 2.0,
            (min + 3.0 * max) / 4.0,
            max,
        ]
    };

    GradientSteps(monotone(steps))
}

fn log_bisection(min: f64, max: f64, min_non_zero: f64) -> [f64; 5] {
    let max_log = max.log10();
    let second_exp = if min == 0.0 && min_non_zero > 0.0 {
        // log10(0) is undefined; start one decade below the smallest real score
        min_non_zero.log10() - 1.0
    } else {
        let min_log = min.log10();
        min_log + (max_log - min_log) / 2.0
    };
    let third_exp = second_exp + (max_log - second_exp) / 2.0;
    let fourth_exp = third_exp + (max_log - third_exp) / 2.0;

    [
        min,
        10f64.powf(second_exp),
        10f64.powf(third_exp),
        10f64.powf(fourth_exp),
        max,
    ]
}

fn straddling_one(min: f64, max: f64, min_non_zero: f64) -> [f64; 5] {
    let diff = min_non_zero.log10() - max.log10();
    if diff.abs() <= 2.0 {
        [min, 1.0, (2.0 + max) / 3.0, (2.0 + 2.0 * max) / 3.0, max]
    } else if diff.abs() <= 4.0 {
        [min, 10f64.powf(diff / 2.0), 1.0, (max + 1.0) / 2.0, max]
    } else {
        [min, 10f64.powf(diff / 2.0), 10f64.powf(diff / 4.0), 1.0, max]
    }
}

/// Pull every interior step between its predecessor and the last step.
fn monotone(mut steps: [f64; 5]) -> [f64; 5] {
    let last = steps[4];
    for i in 1..4 {
        steps[i] = steps[i].max(steps[i - 1]).min(last);
    }
    steps
}
