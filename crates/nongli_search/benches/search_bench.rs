use criterion::{Criterion, black_box, criterion_group, criterion_main};
use nongli_search::{
    SolarTerm, compile_lunar_year, new_moon_on_or_after, solar_term_jde, solar_terms_for_year,
};

fn solar_term_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_solar_term");
    group.bench_function("dongzhi_2024", |b| {
        b.iter(|| {
            solar_term_jde(black_box(SolarTerm::Dongzhi), black_box(2024)).expect("converges")
        })
    });
    group.sample_size(20);
    group.bench_function("all_terms_2024", |b| {
        b.iter(|| solar_terms_for_year(black_box(2024)).expect("converges"))
    });
    group.finish();
}

fn new_moon_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_new_moon");
    group.bench_function("on_or_after", |b| {
        b.iter(|| new_moon_on_or_after(black_box(2_460_676.5)))
    });
    group.finish();
}

fn compiler_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_lunar_year");
    group.sample_size(20);
    group.bench_function("2033", |b| {
        b.iter(|| compile_lunar_year(black_box(2033)).expect("year compiles"))
    });
    group.finish();
}

criterion_group!(benches, solar_term_bench, new_moon_bench, compiler_bench);
criterion_main!(benches);
