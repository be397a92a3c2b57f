//! HitViz Core Library
//!
//! Gradient step planning, score coloring and track coordinate transforms for
//! alignment result diagrams. Everything here is pure: no drawing, no I/O.

pub mod types;
pub mod error;
pub mod hsv;
pub mod palette;
pub mod steps;
pub mod mapper;
pub mod coords;
pub mod legend;
pub mod config;
pub mod plan;

// Re-export commonly used types and functions
pub use types::{CanvasGeometry, DomainSpan, Feature, GradientSteps, QuerySubjectSpans, Rgb, ScoreRange, TrackSpan};
pub use error::{LayoutError, LayoutResult};
pub use hsv::hsv_to_rgb;
pub use palette::{ColorKey, ColorScheme, DomainDatabase, ScoreKind};
pub use steps::compute_steps;
pub use mapper::{color_by_bucket, color_by_gradient, color_for, css_color, ColorMode};
pub use coords::{domain_pixel_span, query_subject_pixel_spans, total_pixels, track_pixel_span};
pub use legend::{padding_for, Legend};
pub use config::DiagramConfig;
pub use plan::{DiagramPlan, Domain, Hit, Hsp, SearchResult};

/// Version information for the HitViz core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
