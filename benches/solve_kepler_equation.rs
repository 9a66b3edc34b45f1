use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use moonphase::constants::SUN_ECCENTRICITY;
use moonphase::kepler::solve_kepler;

/// Uniform random in [0, 2π)
#[inline]
fn rand_angle(rng: &mut StdRng) -> f64 {
    let two_pi = std::f64::consts::TAU;
    rng.random::<f64>() * two_pi
}

/// Solar orbit: e = 0.016718, random mean anomalies
fn bench_solar_orbit(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/solar_e=0.016718", |b| {
        b.iter_batched(
            || (0..samples).map(|_| rand_angle(&mut rng)).collect::<Vec<_>>(),
            |seeds| {
                for m in seeds {
                    let sol = solve_kepler(black_box(m), SUN_ECCENTRICITY, 1e-12, 50).unwrap();
                    black_box(sol);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// Higher eccentricities, still elliptic: e ∈ [0.1, 0.7]
fn bench_eccentric(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let samples = 10_000usize;

    c.bench_function("solve_kepler_equation/e_0.1..0.7", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| (rand_angle(&mut rng), rng.random_range(0.1..=0.7)))
                    .collect::<Vec<_>>()
            },
            |cases| {
                for (m, e) in cases {
                    let _ = solve_kepler(black_box(m), black_box(e), 1e-12, 50);
                }
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_solar_orbit, bench_eccentric
);
criterion_main!(benches);
