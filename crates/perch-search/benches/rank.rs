//! Ranking pipeline benchmarks.
//!
//! Measures how `rank` scales with collection size, with and without the
//! full filter set.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Duration, TimeZone, Utc};
use perch_core::{BenchRating, BenchRecord, Coordinates, ViewCategory};
use perch_search::{rank, SearchQuery, SortKey};

/// Deterministic synthetic collection: cheap arithmetic spread instead of an
/// RNG so successive runs measure the same workload.
fn synthetic_records(count: usize) -> Vec<BenchRecord> {
    let categories = ViewCategory::all();
    let base = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();

    (0..count)
        .map(|i| {
            let latitude = ((i * 37) % 180) as f64 - 90.0 + 0.123;
            let longitude = ((i * 91) % 360) as f64 - 180.0 + 0.456;
            let ratings = (0..(i % 4))
                .map(|j| BenchRating::new((j % 5) as u8 + 1, ((i + j) % 5) as u8 + 1))
                .collect();
            BenchRecord {
                id: format!("bench-{i:05}"),
                title: format!("Bench {} with a view", i),
                description: None,
                location: Coordinates::new(latitude, longitude),
                category: categories[i % categories.len()],
                created_at: base + Duration::minutes(i as i64),
                ratings,
            }
        })
        .collect()
}

fn bench_rank_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_scaling");
    let origin = Coordinates::new(48.1351, 11.5820);

    for &n in &[100usize, 1_000, 10_000] {
        let records = synthetic_records(n);
        let query = SearchQuery::new()
            .with_origin(origin)
            .with_sort_key(SortKey::Distance);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(
            BenchmarkId::new("distance_sort", n),
            &records,
            |b, records| {
                b.iter(|| rank(black_box(records), black_box(&query)));
            },
        );
    }

    group.finish();
}

fn bench_rank_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_filters");
    let records = synthetic_records(10_000);
    group.throughput(Throughput::Elements(records.len() as u64));

    let all_filters = SearchQuery::new()
        .with_free_text("view")
        .with_category(ViewCategory::Mountain)
        .with_max_distance_km(500.0)
        .with_min_average_rating(2.0)
        .with_origin(Coordinates::new(48.1351, 11.5820));
    group.bench_with_input(
        BenchmarkId::new("all_filters", records.len()),
        &records,
        |b, records| {
            b.iter(|| rank(black_box(records), black_box(&all_filters)));
        },
    );

    let rating_sort = SearchQuery::new().with_sort_key(SortKey::Rating);
    group.bench_with_input(
        BenchmarkId::new("rating_sort_unfiltered", records.len()),
        &records,
        |b, records| {
            b.iter(|| rank(black_box(records), black_box(&rating_sort)));
        },
    );

    group.finish();
}

criterion_group!(rank_benches, bench_rank_scaling, bench_rank_filters);
criterion_main!(rank_benches);
