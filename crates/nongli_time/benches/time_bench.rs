use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nongli_time::{SolarDate, beijing_date, calendar_to_jd, civil_from_days, delta_t_seconds};

fn civil_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("civil");
    group.bench_function("days_from_civil_round_trip", |b| {
        b.iter(|| {
            let d = SolarDate::new_unchecked(black_box(2025), black_box(10), black_box(6));
            civil_from_days(black_box(d.day_number()))
        })
    });
    group.bench_function("calendar_to_jd", |b| {
        b.iter(|| calendar_to_jd(black_box(2025), black_box(10), black_box(6.5)))
    });
    group.finish();
}

fn delta_t_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("delta_t");
    group.bench_function("delta_t_seconds", |b| {
        b.iter(|| delta_t_seconds(black_box(1987.3)))
    });
    group.bench_function("beijing_date", |b| {
        b.iter(|| beijing_date(black_box(2_460_676.5)))
    });
    group.finish();
}

criterion_group!(benches, civil_bench, delta_t_bench);
criterion_main!(benches);
