use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hitviz_core::{
    color_by_bucket, color_by_gradient, compute_steps, ColorScheme, DiagramConfig,
    DiagramPlan, Hit, Hsp, ScoreRange, SearchResult,
};

fn generate_scores(count: usize) -> Vec<f64> {
    // E-values spread across ~200 decades, with a few exact zeros
    (0..count)
        .map(|i| if i % 97 == 0 { 0.0 } else { 10f64.powi(-((i % 200) as i32)) })
        .collect()
}

fn generate_result(hits: usize) -> SearchResult {
    let scores = generate_scores(hits);
    SearchResult {
        query_length: 450,
        hits: scores
            .iter()
            .enumerate()
            .map(|(i, &evalue)| Hit {
                id: format!("hit{}", i),
                length: 300 + (i as u64 % 700),
                hsps: vec![Hsp {
                    query_from: 1,
                    query_to: 450,
                    hit_from: 10,
                    hit_to: 290,
                    evalue,
                    bit_score: 30.0 + (i % 250) as f64,
                }],
                domains: vec![],
            })
            .collect(),
    }
}

fn bench_steps(c: &mut Criterion) {
    let range = ScoreRange::new(0.0, 1e-2, 1e-180);

    c.bench_function("dynamic_steps", |b| {
        b.iter(|| black_box(compute_steps(ColorScheme::Dynamic, black_box(&range))))
    });
}

fn bench_color_mapping(c: &mut Criterion) {
    let scores = generate_scores(10_000);
    let range = ScoreRange::from_scores(scores.iter().copied()).unwrap();
    let steps = compute_steps(ColorScheme::Dynamic, &range);

    c.bench_function("gradient_10k", |b| {
        b.iter(|| {
            for &score in &scores {
                black_box(color_by_gradient(score, steps.as_slice(), ColorScheme::Dynamic).unwrap());
            }
        })
    });

    c.bench_function("bucket_10k", |b| {
        b.iter(|| {
            for &score in &scores {
                black_box(color_by_bucket(score, steps.as_slice(), ColorScheme::Dynamic).unwrap());
            }
        })
    });
}

fn bench_plan(c: &mut Criterion) {
    let result = generate_result(1_000);
    let mut config = DiagramConfig::default();
    config.display.max_hits = 0;

    c.bench_function("plan_1k_hits", |b| {
        b.iter(|| black_box(DiagramPlan::build(black_box(&result), &config).unwrap()))
    });
}

criterion_group!(benches, bench_steps, bench_color_mapping, bench_plan);
criterion_main!(benches);
