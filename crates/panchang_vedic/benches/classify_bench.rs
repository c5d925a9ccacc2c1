use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_vedic::{
    karana_from_elongation, nakshatra_from_longitude, tithi_from_elongation, yoga_from_sum,
};

fn classify_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.bench_function("tithi", |b| b.iter(|| tithi_from_elongation(black_box(187.3))));
    group.bench_function("karana", |b| b.iter(|| karana_from_elongation(black_box(187.3))));
    group.bench_function("nakshatra", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(245.7)))
    });
    group.bench_function("yoga", |b| b.iter(|| yoga_from_sum(black_box(512.4))));
    group.finish();
}

criterion_group!(benches, classify_bench);
criterion_main!(benches);
