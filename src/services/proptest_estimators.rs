//! Property-based tests for the impact and deflection estimators.

use proptest::prelude::*;

use super::deflection::{
    DeflectionEstimator, IMPACTOR_MAX_PROBABILITY, LASER_MAX_PROBABILITY, TRACTOR_MAX_PROBABILITY,
};
use super::impact::{ImpactEstimator, DEFAULT_POPULATION_DENSITY};
use crate::domain::{
    DeflectionStrategy, DeflectionTarget, ImpactInput, ImpactLocation, StrategyKind,
};

fn ceiling(kind: StrategyKind) -> f64 {
    match kind {
        StrategyKind::KineticImpactor => IMPACTOR_MAX_PROBABILITY,
        StrategyKind::GravityTractor => TRACTOR_MAX_PROBABILITY,
        StrategyKind::LaserAblation => LASER_MAX_PROBABILITY,
    }
}

fn strategy_kind() -> impl Strategy<Value = StrategyKind> {
    prop_oneof![
        Just(StrategyKind::KineticImpactor),
        Just(StrategyKind::GravityTractor),
        Just(StrategyKind::LaserAblation),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Bigger, denser or faster bodies always carry more energy.
    #[test]
    fn prop_energy_monotonic(
        size in 1.0f64..10_000.0,
        density in 500.0f64..8000.0,
        velocity in 11.0f64..72.0,
        factor in 1.01f64..10.0,
    ) {
        let base = ImpactEstimator::energy(size, density, velocity).joules;
        prop_assert!(ImpactEstimator::energy(size * factor, density, velocity).joules > base);
        prop_assert!(ImpactEstimator::energy(size, density * factor, velocity).joules > base);
        prop_assert!(ImpactEstimator::energy(size, density, velocity * factor).joules > base);
    }

    /// Magnitude never exceeds the cap, however large the energy.
    #[test]
    fn prop_seismic_magnitude_capped(exponent in 0.0f64..300.0) {
        let seismic = ImpactEstimator::seismic(10f64.powf(exponent));
        prop_assert!(seismic.magnitude <= 12.0);
        prop_assert!(seismic.radius >= 0.0);
    }

    #[test]
    fn prop_tsunami_capped(exponent in -6.0f64..20.0) {
        let tsunami = ImpactEstimator::tsunami(10f64.powf(exponent));
        prop_assert!(tsunami.wave_height >= 0.0 && tsunami.wave_height <= 500.0);
        prop_assert!(tsunami.affected_radius >= 0.0 && tsunami.affected_radius <= 10_000.0);
    }

    #[test]
    fn prop_casualties_bounded_by_population(overpressure in 0.0f64..500.0) {
        let casualties = ImpactEstimator::casualties(overpressure, DEFAULT_POPULATION_DENSITY);
        prop_assert!(casualties.estimated <= casualties.affected_population);
        prop_assert_eq!(casualties.estimated, casualties.affected_population / 2);
    }

    /// Tsunami block exists exactly for water impacts; all radii stay non-negative.
    #[test]
    fn prop_report_shape(
        size in 1.0f64..5000.0,
        density in 500.0f64..8000.0,
        velocity in 11.0f64..72.0,
        is_water_impact in any::<bool>(),
    ) {
        let input = ImpactInput {
            size,
            density,
            velocity,
            angle: 45.0,
            impact_location: ImpactLocation { lat: 0.0, lng: 0.0 },
            is_water_impact,
        };
        let report = ImpactEstimator::estimate(&input);

        prop_assert_eq!(report.tsunami.is_some(), is_water_impact);
        prop_assert!(report.energy.joules > 0.0);
        prop_assert!(report.crater.diameter >= 0.0 && report.crater.depth >= 0.0);
        prop_assert!(report.seismic.radius >= 0.0);
        prop_assert!(report.atmospheric.fireball_radius >= 0.0);
        prop_assert!(report.atmospheric.thermal_radiation >= 0.0);
        prop_assert!(report.atmospheric.overpressure >= 0.0);
        prop_assert_eq!(report, ImpactEstimator::estimate(&input));
    }

    #[test]
    fn prop_required_missions_at_least_one(
        kind in strategy_kind(),
        days in 0.0f64..5000.0,
        mass_exponent in -3.0f64..20.0,
    ) {
        let target = DeflectionTarget::new(days, 10f64.powf(mass_exponent)).unwrap();
        let report = DeflectionEstimator::evaluate(&DeflectionStrategy::new(kind, target));
        prop_assert!(report.required_missions >= 1);
        prop_assert!(report.delta_v >= 0.0);
    }

    /// More lead time never lowers the odds, and the odds never pass the ceiling.
    #[test]
    fn prop_success_probability_monotonic_and_capped(
        kind in strategy_kind(),
        days in 0.0f64..2000.0,
        extra in 0.0f64..2000.0,
        mass in 1.0f64..1e15,
    ) {
        let shorter = DeflectionEstimator::evaluate(&DeflectionStrategy::new(
            kind,
            DeflectionTarget::new(days, mass).unwrap(),
        ));
        let longer = DeflectionEstimator::evaluate(&DeflectionStrategy::new(
            kind,
            DeflectionTarget::new(days + extra, mass).unwrap(),
        ));

        prop_assert!(longer.success_probability >= shorter.success_probability);
        prop_assert!(shorter.success_probability >= 0.0);
        prop_assert!(longer.success_probability <= ceiling(kind));
    }
}
