criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        analyzing_random_small,
        analyzing_random_large,
        analyzing_morra_nine,
        constructing_morra_nine,
        analyzing_demo_catalog,
}

fn analyzing_random_small(c: &mut criterion::Criterion) {
    c.bench_function("analyze a random matrix up to 8x8", |b| {
        let matrix = PayoffMatrix::random();
        b.iter(|| matrix.equilibrium())
    });
}

fn analyzing_random_large(c: &mut criterion::Criterion) {
    c.bench_function("analyze a random 512x512 matrix", |b| {
        let matrix = PayoffMatrix::from_fn(512, 512, |_, _| rand::random_range(-100..=100));
        b.iter(|| matrix.equilibrium())
    });
}

fn analyzing_morra_nine(c: &mut criterion::Criterion) {
    c.bench_function("analyze 9-finger Morra (81x81)", |b| {
        let matrix = morra(9).expect("valid finger count");
        b.iter(|| matrix.equilibrium())
    });
}

fn constructing_morra_nine(c: &mut criterion::Criterion) {
    c.bench_function("construct 9-finger Morra (81x81)", |b| {
        b.iter(|| morra(9))
    });
}

fn analyzing_demo_catalog(c: &mut criterion::Criterion) {
    c.bench_function("analyze every demonstration game", |b| {
        let catalog = Catalog::demo().expect("demonstration parameters are valid");
        b.iter(|| {
            catalog
                .iter()
                .map(|entry| entry.matrix().equilibrium())
                .filter(Equilibrium::exists)
                .count()
        })
    });
}

use saddlepoint::*;
