use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LayoutError, LayoutResult};

/// Sequence coordinate (residue offset).
pub type SeqPos = u64;

/// Number of breakpoints produced by the step planner.
pub const STEP_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
    /// Smallest score strictly above zero; stands in for `min` when a log of zero would be taken
    pub min_non_zero: f64,
}

impl ScoreRange {
    pub fn new(min: f64, max: f64, min_non_zero: f64) -> Self {
        Self { min, max, min_non_zero }
    }

    /// Scan a set of scores. Returns `None` for an empty set.
    pub fn from_scores<I>(scores: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut range: Option<ScoreRange> = None;
        for score in scores {
            let r = range.get_or_insert(ScoreRange::new(score, score, 0.0));
            r.min = r.min.min(score);
            r.max = r.max.max(score);
            if score > 0.0 && (r.min_non_zero == 0.0 || score < r.min_non_zero) {
                r.min_non_zero = score;
            }
        }
        range
    }

    /// Check ordering, sign and finiteness. The step planner never calls this itself.
    pub fn validate(&self) -> LayoutResult<()> {
        if !(self.min.is_finite() && self.max.is_finite() && self.min_non_zero.is_finite()) {
            return Err(LayoutError::invalid_range(format!(
                "non-finite bound in {:?}",
                self
            )));
        }
        if self.min < 0.0 || self.min_non_zero < 0.0 {
            return Err(LayoutError::invalid_range("scores must be non-negative"));
        }
        if self.min > self.max {
            return Err(LayoutError::invalid_range(format!(
                "min {} exceeds max {}",
                self.min, self.max
            )));
        }
        if self.min_non_zero > self.max {
            return Err(LayoutError::invalid_range(format!(
                "min_non_zero {} exceeds max {}",
                self.min_non_zero, self.max
            )));
        }
        Ok(())
    }
}

/// Five non-decreasing bin boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientSteps(pub [f64; STEP_COUNT]);

impl GradientSteps {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn first(&self) -> f64 {
        self.0[0]
    }

    pub fn last(&self) -> f64 {
        self.0[STEP_COUNT - 1]
    }
}

/// Horizontal pixel budget of a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasGeometry {
    #[serde(default = "default_content_width")]
    pub content_width: f64,

    #[serde(default = "default_label_width")]
    pub label_width: f64,

    #[serde(default = "default_margin_width")]
    pub margin_width: f64,

    /// Middle column reserved for score text between query and subject tracks
    #[serde(default = "default_scoring_width")]
    pub scoring_width: f64,

    /// Width of the color legend bar
    #[serde(default = "default_scale_width")]
    pub scale_width: f64,
}

fn default_content_width() -> f64 { 1000.0 }
fn default_label_width() -> f64 { 200.0 }
fn default_margin_width() -> f64 { 2.0 }
fn default_scoring_width() -> f64 { 150.0 }
fn default_scale_width() -> f64 { 400.0 }

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self {
            content_width: default_content_width(),
            label_width: default_label_width(),
            margin_width: default_margin_width(),
            scoring_width: default_scoring_width(),
            scale_width: default_scale_width(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub start: SeqPos,
    pub end: SeqPos,
}

impl Feature {
    pub fn new(start: SeqPos, end: SeqPos, parent_len: SeqPos) -> LayoutResult<Self> {
        if start > end || end > parent_len {
            return Err(LayoutError::invalid_feature(start, end, parent_len));
        }
        Ok(Self { start, end })
    }

    pub fn length(&self) -> SeqPos {
        self.end.saturating_sub(self.start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color like "#RRGGBB"
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Absolute pixel endpoints of a track, drawn as a line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackSpan {
    pub start_px: f64,
    pub end_px: f64,
}

impl TrackSpan {
    pub fn width(&self) -> f64 {
        self.end_px - self.start_px
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuerySubjectSpans {
    pub query: TrackSpan,
    pub subject: TrackSpan,
    /// Left edge of the score column sitting between the two tracks
    pub score_px: f64,
}

/// Origin and width of a nested feature, drawn as a rectangle.
/// `width_px` is a width, not an end coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainSpan {
    pub offset_px: f64,
    pub width_px: f64,
}

impl DomainSpan {
    pub fn end_px(&self) -> f64 {
        self.offset_px + self.width_px
    }
}
