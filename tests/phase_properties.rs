use hifitime::{Epoch, Unit};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use moonphase::{
    constants::{RADEG, SUN_ECCENTRICITY, SYNODIC_MONTH},
    get_phase,
    kepler::solve_kepler,
    CivilMoment, MoonPhase,
};

mod common;
use common::{angle_abs_diff, shifted};

fn phase_of(moment: &CivilMoment) -> MoonPhase {
    get_phase(moment).unwrap_or_else(|err| panic!("{moment:?}: {err}"))
}

#[test]
fn test_outputs_stay_in_range() {
    let start = Epoch::from_gregorian_utc_at_midnight(1900, 1, 1);
    let mut rng = StdRng::seed_from_u64(0x5EED_1900);

    for _ in 0..20_000 {
        // Uniform over 1900–2100
        let moment = shifted(start, rng.random_range(0.0..73_000.0));
        let phase = phase_of(&moment);

        assert!(phase.angle < 360, "{moment:?}: {phase:?}");
        assert!(
            (0.0..=1.0).contains(&phase.percent_lit),
            "{moment:?}: {phase:?}"
        );
    }
}

#[test]
fn test_determinism() {
    let moment = CivilMoment::new(2031, 7, 4, 9, 41, 17);
    let first = phase_of(&moment);
    for _ in 0..10 {
        assert_eq!(phase_of(&moment), first);
    }
}

#[test]
fn test_synodic_periodicity() {
    for date in [
        "2024-01-11T11:57:00",
        "2024-01-18T03:53:00",
        "2024-01-25T17:54:00",
        "2024-02-02T23:18:00",
        "2024-02-09T22:59:00",
        "2000-01-06T18:14:00",
        "2000-01-21T04:40:00",
        "1980-01-01T00:00:00",
    ] {
        let epoch: Epoch = date.parse().unwrap();
        let now = phase_of(&CivilMoment::from(epoch));
        let next = phase_of(&shifted(epoch, SYNODIC_MONTH));

        assert!(
            (now.percent_lit - next.percent_lit).abs() < 0.03,
            "{date}: {} vs {}",
            now.percent_lit,
            next.percent_lit
        );
    }
}

#[test]
fn test_one_minute_continuity() {
    let start = Epoch::from_gregorian_utc_at_midnight(2023, 1, 1);

    for step in 0..5_000 {
        let epoch = start + Unit::Minute * (97 * step) as f64;
        let before = phase_of(&CivilMoment::from(epoch));
        let after = phase_of(&CivilMoment::from(epoch + Unit::Minute * 1.0));

        // Truncation to whole degrees can add one degree; 359 → 0 is a single degree apart
        let d_angle = angle_abs_diff(after.angle as f64, before.angle as f64);
        assert!(d_angle <= 2.0, "{epoch}: {before:?} → {after:?}");
        assert!(
            (after.percent_lit - before.percent_lit).abs() < 1e-3,
            "{epoch}: {before:?} → {after:?}"
        );
    }
}

#[test]
fn test_lunation_brackets_full_moon() {
    // Noon after the new moon of 2024-01-11 11:57 UTC
    let new_moon = Epoch::from_gregorian_utc_hms(2024, 1, 11, 12, 0, 0);
    let lit: Vec<f64> = (0..30)
        .map(|day| phase_of(&shifted(new_moon, day as f64)).percent_lit)
        .collect();

    assert!(lit[0] < 0.01);
    assert!(lit[14] > 0.99, "full moon: {}", lit[14]);
    assert!(lit[29] < 0.01, "next new moon: {}", lit[29]);

    for day in 1..=14 {
        assert!(lit[day] > lit[day - 1], "waxing at day {day}: {lit:?}");
    }
    for day in 15..30 {
        assert!(lit[day] < lit[day - 1], "waning at day {day}: {lit:?}");
    }
}

#[test]
fn test_kepler_converges_for_random_seeds() {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    for _ in 0..10_000 {
        let seed = rng.random_range(0.0..360.0) * RADEG;
        let sol = solve_kepler(seed, SUN_ECCENTRICITY, 1e-12, 50).unwrap();
        assert!(sol.residual.abs() < 1e-12);
        assert!(sol.iterations < 50);
    }
}
