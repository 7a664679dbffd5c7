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
        building_payoff_matrix,
        solving_pure_equilibria,
        solving_mixed_equilibrium,
        scanning_tipping_point,
        testing_robustness,
        reporting_from_cold_session,
        reporting_from_warm_session,
}

fn building_payoff_matrix(c: &mut criterion::Criterion) {
    let dataset = Dataset::random();
    let policy = Policy::default();
    c.bench_function("build a payoff Matrix from one period", |b| {
        b.iter(|| Builder::new(&policy, 1.5).build(within(dataset.as_ref(), Period::from(2023))))
    });
}

fn solving_pure_equilibria(c: &mut criterion::Criterion) {
    let matrix = Matrix::random();
    c.bench_function("find best responses, equilibria and dominance", |b| {
        b.iter(|| Analysis::from(&matrix))
    });
}

fn solving_mixed_equilibrium(c: &mut criterion::Criterion) {
    let matrix = Matrix::random();
    c.bench_function("solve the 2x2 indifference conditions", |b| {
        b.iter(|| Mixed::indifferent(&matrix))
    });
}

fn scanning_tipping_point(c: &mut criterion::Criterion) {
    let dataset = Dataset::random();
    let policy = Policy::default();
    c.bench_function("scan 81 cost multipliers for a tipping point", |b| {
        b.iter(|| TippingPoint::scan(&policy, dataset.as_ref(), Period::from(2022)))
    });
}

fn testing_robustness(c: &mut criterion::Criterion) {
    let dataset = Dataset::random();
    let policy = Policy::default();
    let robustness = Robustness::new(&policy, dataset.as_ref(), Period::from(2024), 1.);
    let baseline = Pair(Strategy::Aggressive, Strategy::Aggressive);
    c.bench_function("re-solve one period under both demand tilts", |b| {
        b.iter(|| robustness.is_robust(baseline))
    });
}

fn reporting_from_cold_session(c: &mut criterion::Criterion) {
    let dataset = Dataset::random();
    c.bench_function("report one period from an empty cache", |b| {
        b.iter(|| Session::new(Policy::default(), dataset.clone()).report(Period::from(2025), 1.25))
    });
}

fn reporting_from_warm_session(c: &mut criterion::Criterion) {
    let session = Session::new(Policy::default(), Dataset::random());
    session.report(Period::from(2025), 1.25);
    c.bench_function("report one period from a warm cache", |b| {
        b.iter(|| session.report(Period::from(2025), 1.25))
    });
}

use pricewar::Analysis;
use pricewar::Arbitrary;
use pricewar::Builder;
use pricewar::Dataset;
use pricewar::Matrix;
use pricewar::Mixed;
use pricewar::Pair;
use pricewar::Period;
use pricewar::Policy;
use pricewar::Robustness;
use pricewar::Session;
use pricewar::Strategy;
use pricewar::TippingPoint;
use pricewar::within;
