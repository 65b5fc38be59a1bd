//! Deflection strategy calculators.
//!
//! Three mission models share one input and output shape:
//! - Kinetic impactor: momentum transfer `Δv = β·m·v / M`
//! - Gravity tractor: station-keeping spacecraft pulling on the target
//! - Laser ablation: photon-pressure style thrust approximation
//!
//! Mission design constants are fixed; only lead time and target mass vary.

use crate::domain::{
    DeflectionReport, DeflectionRequest, DeflectionStrategy, DeflectionTarget, StrategyDescriptor,
    StrategyKind,
};
use crate::errors::EstimationError;

/// Newtonian constant of gravitation (m³ kg⁻¹ s⁻²).
pub const G: f64 = 6.67430e-11;

/// Speed of light, rounded (m/s).
pub const SPEED_OF_LIGHT: f64 = 3e8;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

// --- Kinetic impactor ---

/// Impactor spacecraft mass (kg).
pub const IMPACTOR_MASS: f64 = 1000.0;
/// Relative velocity at impact (m/s).
pub const IMPACTOR_VELOCITY: f64 = 10_000.0;
/// Momentum enhancement factor from ejecta recoil.
pub const IMPACTOR_BETA: f64 = 2.0;
pub const IMPACTOR_NOMINAL_DAYS: f64 = 180.0;
pub const IMPACTOR_MAX_PROBABILITY: f64 = 0.85;

// --- Gravity tractor ---

/// Tractor spacecraft mass (kg).
pub const TRACTOR_MASS: f64 = 20_000.0;
/// Hover distance from the target's centre (m).
pub const TRACTOR_STANDOFF: f64 = 100.0;
pub const TRACTOR_NOMINAL_DAYS: f64 = 365.0;
pub const TRACTOR_MAX_PROBABILITY: f64 = 0.95;

// --- Laser ablation ---

/// Laser output power (W).
pub const LASER_POWER: f64 = 100_000.0;
pub const LASER_EFFICIENCY: f64 = 0.1;
pub const LASER_NOMINAL_DAYS: f64 = 270.0;
pub const LASER_MAX_PROBABILITY: f64 = 0.70;
/// Target mass handled per laser platform (kg).
pub const LASER_MASS_PER_MISSION: f64 = 1e9;

/// Fixed metadata for every supported strategy.
pub const STRATEGY_CATALOG: [StrategyDescriptor; 3] = [
    StrategyDescriptor {
        id: StrategyKind::KineticImpactor,
        name: "Kinetic Impactor",
        description: "Ram the asteroid with a spacecraft to change its velocity vector",
        effectiveness: 0.8,
        min_time_required_days: 180,
        technology_readiness: "proven",
        example: "NASA DART mission (2022)",
    },
    StrategyDescriptor {
        id: StrategyKind::GravityTractor,
        name: "Gravity Tractor",
        description: "Use spacecraft's gravitational pull to slowly alter orbit",
        effectiveness: 0.9,
        min_time_required_days: 365,
        technology_readiness: "theoretical",
        example: "None (proposed concept)",
    },
    StrategyDescriptor {
        id: StrategyKind::LaserAblation,
        name: "Laser Ablation",
        description: "Vaporize surface material with laser to create thrust",
        effectiveness: 0.7,
        min_time_required_days: 270,
        technology_readiness: "experimental",
        example: "DE-STAR concept",
    },
];

/// Stateless deflection calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeflectionEstimator;

impl DeflectionEstimator {
    /// Parse and validate a wire request, then evaluate it.
    pub fn estimate(request: &DeflectionRequest) -> Result<DeflectionReport, EstimationError> {
        let strategy = DeflectionStrategy::try_from(request)?;
        Ok(Self::evaluate(&strategy))
    }

    pub fn evaluate(strategy: &DeflectionStrategy) -> DeflectionReport {
        match strategy {
            DeflectionStrategy::KineticImpactor(target) => Self::kinetic_impactor(target),
            DeflectionStrategy::GravityTractor(target) => Self::gravity_tractor(target),
            DeflectionStrategy::LaserAblation(target) => Self::laser_ablation(target),
        }
    }

    pub fn list_strategies() -> &'static [StrategyDescriptor] {
        &STRATEGY_CATALOG
    }

    /// Momentum transfer from a single high-speed impactor.
    pub fn kinetic_impactor(target: &DeflectionTarget) -> DeflectionReport {
        let delta_v = (IMPACTOR_BETA * IMPACTOR_MASS * IMPACTOR_VELOCITY) / target.asteroid_mass_kg;
        let success_probability = success_probability(
            target.time_available_days,
            IMPACTOR_NOMINAL_DAYS,
            IMPACTOR_MAX_PROBABILITY,
        );
        // One extra impactor per 100 t of target mass
        let required_missions = mission_count(target.asteroid_mass_kg / (IMPACTOR_MASS * 100.0));

        DeflectionReport {
            delta_v,
            success_probability,
            required_missions,
            new_orbital_data: None,
        }
    }

    /// Continuous gravitational tug over the whole lead time.
    pub fn gravity_tractor(target: &DeflectionTarget) -> DeflectionReport {
        let force = G * TRACTOR_MASS * target.asteroid_mass_kg / TRACTOR_STANDOFF.powi(2);
        let acceleration = force / target.asteroid_mass_kg;
        let delta_v = acceleration * target.time_available_days * SECONDS_PER_DAY;

        DeflectionReport {
            delta_v,
            success_probability: success_probability(
                target.time_available_days,
                TRACTOR_NOMINAL_DAYS,
                TRACTOR_MAX_PROBABILITY,
            ),
            required_missions: 1,
            new_orbital_data: None,
        }
    }

    /// Surface ablation thrust, approximated as `P·η / c`.
    pub fn laser_ablation(target: &DeflectionTarget) -> DeflectionReport {
        let thrust = LASER_POWER * LASER_EFFICIENCY / SPEED_OF_LIGHT;
        let delta_v =
            thrust * (target.time_available_days * SECONDS_PER_DAY) / target.asteroid_mass_kg;

        DeflectionReport {
            delta_v,
            success_probability: success_probability(
                target.time_available_days,
                LASER_NOMINAL_DAYS,
                LASER_MAX_PROBABILITY,
            ),
            required_missions: mission_count(target.asteroid_mass_kg / LASER_MASS_PER_MISSION),
            new_orbital_data: None,
        }
    }
}

/// Scales linearly with lead time up to the nominal duration, then saturates at `ceiling`.
fn success_probability(time_available_days: f64, nominal_days: f64, ceiling: f64) -> f64 {
    (time_available_days / nominal_days).min(1.0) * ceiling
}

fn mission_count(ratio: f64) -> u64 {
    (ratio.floor() as u64).max(1)
}
