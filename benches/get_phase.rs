use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use moonphase::{get_phase, phase::phase_at_julian_offset, CivilMoment, PhaseParams};

fn random_moment(rng: &mut StdRng) -> CivilMoment {
    CivilMoment::new(
        rng.random_range(1900..=2100),
        rng.random_range(1..=12),
        rng.random_range(1..=28),
        rng.random_range(0..24),
        rng.random_range(0..60),
        rng.random_range(0..60),
    )
}

fn bench_get_phase(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let samples = 10_000usize;

    c.bench_function("get_phase/civil_moment", |b| {
        b.iter_batched(
            || {
                (0..samples)
                    .map(|_| random_moment(&mut rng))
                    .collect::<Vec<_>>()
            },
            |moments| {
                for moment in moments {
                    black_box(get_phase(black_box(&moment)).unwrap());
                }
            },
            BatchSize::LargeInput,
        )
    });
}

fn bench_julian_offset(c: &mut Criterion) {
    let params = PhaseParams::default();

    c.bench_function("get_phase/julian_offset_fixed", |b| {
        b.iter(|| {
            let phase = phase_at_julian_offset(black_box(16_081.5), &params);
            black_box(phase.ok());
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_get_phase, bench_julian_offset
);
criterion_main!(benches);
