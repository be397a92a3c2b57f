use crate::types::*;

/// Pixels allotted to `var_len` out of the combined query + subject length,
/// after reserving the score column.
pub fn total_pixels(
    query_len: f64,
    subj_len: f64,
    var_len: f64,
    content_width: f64,
    scoring_width: f64,
) -> f64 {
    (var_len * content_width - scoring_width) / (query_len + subj_len)
}

/// Span of a single full-width track.
pub fn track_pixel_span(content_width: f64, label_width: f64, margin_width: f64) -> TrackSpan {
    TrackSpan {
        start_px: label_width + margin_width,
        end_px: label_width + content_width - margin_width,
    }
}

/// Query and subject tracks laid out left to right with the score column between them.
pub fn query_subject_pixel_spans(
    query_len: f64,
    subj_len: f64,
    subj_hsp_len: f64,
    content_width: f64,
    scoring_width: f64,
    label_width: f64,
    margin_width: f64,
) -> QuerySubjectSpans {
    let query_px = total_pixels(query_len, subj_len, query_len, content_width, scoring_width);
    let subj_px = total_pixels(query_len, subj_len, subj_hsp_len, content_width, scoring_width);

    let query = TrackSpan {
        start_px: label_width + margin_width,
        end_px: label_width + query_px - margin_width,
    };
    let subject_origin = label_width + query_px + scoring_width;
    let subject = TrackSpan {
        start_px: subject_origin + margin_width,
        end_px: subject_origin + subj_px - margin_width,
    };

    QuerySubjectSpans {
        query,
        subject,
        score_px: label_width + query_px + margin_width,
    }
}

/// Rescale `[domain_start, domain_end]` (out of `hit_len`) into a track.
///
/// Returns an origin and a width: the width is measured from the computed
/// origin, so callers hand it straight to a rectangle.
pub fn domain_pixel_span(
    track_start_px: f64,
    track_end_px: f64,
    hit_len: f64,
    domain_start: f64,
    domain_end: f64,
    margin_width: f64,
) -> DomainSpan {
    let scale = (track_end_px - track_start_px) / hit_len;
    let offset_px = track_start_px + domain_start * scale + margin_width;
    let width_px = track_start_px + domain_end * scale - margin_width - offset_px;
    DomainSpan { offset_px, width_px }
}

impl CanvasGeometry {
    pub fn total_pixels(&self, query_len: SeqPos, subj_len: SeqPos, var_len: SeqPos) -> f64 {
        total_pixels(
            query_len as f64,
            subj_len as f64,
            var_len as f64,
            self.content_width,
            self.scoring_width,
        )
    }

    pub fn track_span(&self) -> TrackSpan {
        track_pixel_span(self.content_width, self.label_width, self.margin_width)
    }

    pub fn query_subject_spans(
        &self,
        query_len: SeqPos,
        subj_len: SeqPos,
        subj_hsp_len: SeqPos,
    ) -> QuerySubjectSpans {
        query_subject_pixel_spans(
            query_len as f64,
            subj_len as f64,
            subj_hsp_len as f64,
            self.content_width,
            self.scoring_width,
            self.label_width,
            self.margin_width,
        )
    }

    pub fn feature_span(&self, track: &TrackSpan, parent_len: SeqPos, feature: &Feature) -> DomainSpan {
        domain_pixel_span(
            track.start_px,
            track.end_px,
            parent_len as f64,
            feature.start as f64,
            feature.end as f64,
            self.margin_width,
        )
    }

    /// Canvas x bounds of the drawable content area.
    pub fn content_bounds(&self) -> (f64, f64) {
        (self.label_width, self.label_width + self.content_width)
    }
}
