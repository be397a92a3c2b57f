/*!
# Diagram Planning

Combines step planning, color mapping and coordinate transforms into a
renderer-ready description of a whole result set: one row per hit with its
query/subject tracks, HSP segments with colors, and domain boxes, plus the
color legend. Nothing here draws; the plan is handed to an external renderer,
typically as JSON.
*/

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::DiagramConfig;
use crate::coords::domain_pixel_span;
use crate::error::LayoutResult;
use crate::legend::Legend;
use crate::mapper::color_for;
use crate::palette::{ColorScheme, DomainDatabase, ScoreKind};
use crate::steps::compute_steps;
use crate::types::*;

/// A high-scoring segment pair. Coordinates are 1-based inclusive, as reported by search tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hsp {
    pub query_from: SeqPos,
    pub query_to: SeqPos,
    pub hit_from: SeqPos,
    pub hit_to: SeqPos,
    pub evalue: f64,
    pub bit_score: f64,
}

impl Hsp {
    pub fn score(&self, kind: ScoreKind) -> f64 {
        match kind {
            ScoreKind::EValue => self.evalue,
            ScoreKind::BitScore => self.bit_score,
        }
    }

    fn query_feature(&self) -> Feature {
        ordered_feature(self.query_from, self.query_to)
    }

    fn hit_feature(&self) -> Feature {
        ordered_feature(self.hit_from, self.hit_to)
    }
}

// Reverse-strand HSPs report from > to
fn ordered_feature(a: SeqPos, b: SeqPos) -> Feature {
    Feature {
        start: a.min(b).saturating_sub(1),
        end: a.max(b),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub database: DomainDatabase,
    pub name: String,
    pub feature: Feature,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    pub id: String,
    pub length: SeqPos,
    pub hsps: Vec<Hsp>,
    #[serde(default)]
    pub domains: Vec<Domain>,
}

impl Hit {
    /// Residues of the hit covered by at least one HSP, capped at the hit length.
    pub fn hsp_coverage(&self) -> SeqPos {
        let mut intervals: Vec<Feature> = self.hsps.iter().map(Hsp::hit_feature).collect();
        intervals.sort_by_key(|f| f.start);

        let mut covered = 0;
        let mut current: Option<Feature> = None;
        for interval in intervals {
            current = match current {
                Some(c) if interval.start <= c.end => Some(Feature {
                    start: c.start,
                    end: c.end.max(interval.end),
                }),
                Some(c) => {
                    covered += c.length();
                    Some(interval)
                }
                None => Some(interval),
            };
        }
        if let Some(c) = current {
            covered += c.length();
        }
        covered.min(self.length)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub query_length: SeqPos,
    pub hits: Vec<Hit>,
}

impl SearchResult {
    pub fn score_range(&self, kind: ScoreKind) -> Option<ScoreRange> {
        ScoreRange::from_scores(
            self.hits
                .iter()
                .flat_map(|hit| hit.hsps.iter().map(move |hsp| hsp.score(kind))),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HspSegment {
    pub query: TrackSpan,
    pub subject: TrackSpan,
    pub score: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainBox {
    pub name: String,
    pub database: DomainDatabase,
    pub span: DomainSpan,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitRow {
    pub id: String,
    pub tracks: QuerySubjectSpans,
    pub segments: Vec<HspSegment>,
    pub domains: Vec<DomainBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramPlan {
    pub scheme: ColorScheme,
    pub steps: GradientSteps,
    pub rows: Vec<HitRow>,
    pub legend: Option<Legend>,
}

impl DiagramPlan {
    pub fn build(result: &SearchResult, config: &DiagramConfig) -> LayoutResult<Self> {
        let display = &config.display;
        let scheme = display.color_scheme;
        let kind = scheme.score_kind();

        let range = result
            .score_range(kind)
            .unwrap_or_else(|| ScoreRange::new(0.0, 0.0, 0.0));
        let steps = compute_steps(scheme, &range);
        log::debug!("Gradient steps for {} over {:?}: {:?}", scheme, range, steps);

        let limit = match display.max_hits {
            0 => result.hits.len(),
            n => n.min(result.hits.len()),
        };
        let hits = &result.hits[..limit];

        let rows = hits
            .par_iter()
            .map(|hit| plan_hit(hit, result.query_length, &steps, config))
            .collect::<LayoutResult<Vec<_>>>()?;

        let legend = display
            .show_legend
            .then(|| Legend::build(scheme, &steps, &config.geometry));

        log::debug!("Planned {} of {} hits", rows.len(), result.hits.len());
        Ok(Self { scheme, steps, rows, legend })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn plan_hit(
    hit: &Hit,
    query_length: SeqPos,
    steps: &GradientSteps,
    config: &DiagramConfig,
) -> LayoutResult<HitRow> {
    let geometry = &config.geometry;
    let display = &config.display;
    let scheme = display.color_scheme;
    let kind = scheme.score_kind();

    let tracks = geometry.query_subject_spans(query_length, hit.length, hit.hsp_coverage());

    let segments = hit
        .hsps
        .iter()
        .map(|hsp| {
            let score = hsp.score(kind);
            let color = color_for(display.color_mode, score, steps.as_slice(), scheme)?;
            Ok(HspSegment {
                query: segment_span(&tracks.query, query_length, &hsp.query_feature()),
                subject: segment_span(&tracks.subject, hit.length, &hsp.hit_feature()),
                score,
                color: color.to_string(),
            })
        })
        .collect::<LayoutResult<Vec<_>>>()?;

    let domains = if display.show_domains {
        hit.domains
            .iter()
            .map(|domain| {
                let feature = Feature::new(domain.feature.start, domain.feature.end, hit.length)?;
                Ok(DomainBox {
                    name: domain.name.clone(),
                    database: domain.database,
                    span: geometry.feature_span(&tracks.subject, hit.length, &feature),
                    color: domain.database.color().to_string(),
                })
            })
            .collect::<LayoutResult<Vec<_>>>()?
    } else {
        Vec::new()
    };

    Ok(HitRow {
        id: hit.id.clone(),
        tracks,
        segments,
        domains,
    })
}

/// HSP lines take endpoints, so convert the origin + width form back.
fn segment_span(track: &TrackSpan, parent_len: SeqPos, feature: &Feature) -> TrackSpan {
    if parent_len == 0 {
        return TrackSpan { start_px: track.start_px, end_px: track.start_px };
    }
    let span = domain_pixel_span(
        track.start_px,
        track.end_px,
        parent_len as f64,
        feature.start.min(parent_len) as f64,
        feature.end.min(parent_len) as f64,
        0.0,
    );
    TrackSpan {
        start_px: span.offset_px,
        end_px: span.end_px(),
    }
}
