//! Impact effect estimation.
//!
//! Chains empirical scaling laws to turn an asteroid's size, density and
//! speed into energy, crater, seismic, tsunami, atmospheric and casualty
//! estimates. Every function here is pure.
//!
//! References for the scaling forms: Collins et al. (2005) crater scaling,
//! Holsapple (1993) cratering equations, Schultz & Gault (1975) seismic effects.

use std::f64::consts::PI;

use crate::domain::{
    Atmospheric, Casualties, Crater, Energy, EnergyEstimate, ImpactInput, ImpactReport, Seismic,
    Tsunami,
};

/// Joules per kiloton of TNT as used by the energy conversion.
pub const TNT_JOULES_PER_KILOTON: f64 = 4.184e9;

/// Hiroshima yield (Mt).
pub const HIROSHIMA_MEGATONS: f64 = 0.015;

/// Crater scaling constant for land impacts.
pub const CRATER_K_LAND: f64 = 1.2;
/// Crater scaling constant for water impacts.
pub const CRATER_K_WATER: f64 = 1.8;
/// Crater diameter-to-depth ratio.
pub const CRATER_DEPTH_RATIO: f64 = 5.0;

pub const MAX_SEISMIC_MAGNITUDE: f64 = 12.0;

/// Wave height cap (m).
pub const MAX_TSUNAMI_WAVE_HEIGHT: f64 = 500.0;
/// Tsunami reach cap (km), roughly Pacific scale.
pub const MAX_TSUNAMI_RADIUS: f64 = 10_000.0;

/// People per km² assumed inside the blast zone.
pub const DEFAULT_POPULATION_DENSITY: f64 = 50.0;
/// Fraction of the affected population counted as casualties.
pub const CASUALTY_RATE: f64 = 0.5;

/// Stateless impact effects calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpactEstimator;

impl ImpactEstimator {
    /// Run the full pipeline for validated input.
    ///
    /// Order: energy → crater → seismic → tsunami (water only) → atmospheric → casualties.
    pub fn estimate(input: &ImpactInput) -> ImpactReport {
        let energy = Self::energy(input.size, input.density, input.velocity);
        let crater = Self::crater(energy.megatons_tnt, input.is_water_impact);
        let seismic = Self::seismic(energy.joules);
        let tsunami = input
            .is_water_impact
            .then(|| Self::tsunami(energy.megatons_tnt));
        let atmospheric = Self::atmospheric(energy.megatons_tnt);
        // Blast-zone casualties use land assumptions even for water impacts.
        let casualties = Self::casualties(atmospheric.overpressure, DEFAULT_POPULATION_DENSITY);

        ImpactReport {
            energy,
            crater,
            seismic,
            tsunami,
            atmospheric,
            casualties,
        }
    }

    /// Kinetic energy of a spherical body.
    ///
    /// `size` is the diameter (m), `density` in kg/m³, `velocity` in km/s.
    pub fn energy(size: f64, density: f64, velocity: f64) -> Energy {
        let radius = size / 2.0;
        let volume = (4.0 / 3.0) * PI * radius.powi(3);
        let mass = volume * density;
        let velocity_ms = velocity * 1000.0;

        let joules = 0.5 * mass * velocity_ms.powi(2);
        let megatons_tnt = joules / (TNT_JOULES_PER_KILOTON * 1000.0);

        Energy {
            joules,
            megatons_tnt,
        }
    }

    /// Energy figures plus a Hiroshima-bomb ratio.
    pub fn energy_estimate(size: f64, density: f64, velocity: f64) -> EnergyEstimate {
        let Energy {
            joules,
            megatons_tnt,
        } = Self::energy(size, density, velocity);

        EnergyEstimate {
            joules,
            megatons_tnt,
            hiroshima_equivalent: megatons_tnt / HIROSHIMA_MEGATONS,
        }
    }

    /// Crater diameter and depth (m) from `D = K · E^(1/3.4)` calibrated in km.
    ///
    /// Requires `energy_mt > 0`.
    pub fn crater(energy_mt: f64, is_water: bool) -> Crater {
        let k = if is_water {
            CRATER_K_WATER
        } else {
            CRATER_K_LAND
        };

        let diameter = k * energy_mt.powf(1.0 / 3.4) * 1000.0;
        Crater {
            diameter,
            depth: diameter / CRATER_DEPTH_RATIO,
        }
    }

    /// Richter-like magnitude and felt radius (km).
    ///
    /// Magnitude is capped at [`MAX_SEISMIC_MAGNITUDE`] but has no floor.
    pub fn seismic(energy_joules: f64) -> Seismic {
        let magnitude = ((2.0 / 3.0) * (energy_joules.log10() - 4.8)).min(MAX_SEISMIC_MAGNITUDE);
        // Shaking felt above Modified Mercalli III
        let radius = 10f64.powf(0.5 * magnitude - 0.8);

        Seismic { magnitude, radius }
    }

    /// Wave height (m) and affected radius (km) for an ocean impact.
    pub fn tsunami(energy_mt: f64) -> Tsunami {
        let wave_height = ((energy_mt / 1000.0).powf(0.25) * 10.0).min(MAX_TSUNAMI_WAVE_HEIGHT);
        let affected_radius = (energy_mt.sqrt() * 15.0).min(MAX_TSUNAMI_RADIUS);

        Tsunami {
            wave_height,
            affected_radius,
        }
    }

    /// Fireball, third-degree-burn and 5 psi overpressure radii (km).
    pub fn atmospheric(energy_mt: f64) -> Atmospheric {
        Atmospheric {
            fireball_radius: energy_mt.powf(0.4) * 0.28,
            thermal_radiation: energy_mt.powf(0.41) * 2.2,
            overpressure: energy_mt.powf(0.33) * 2.2,
        }
    }

    /// Population inside the overpressure circle and the casualties among it.
    pub fn casualties(overpressure_km: f64, population_density: f64) -> Casualties {
        let affected_area = PI * overpressure_km.powi(2);
        let affected_population = (affected_area * population_density).floor() as u64;
        let estimated = (affected_population as f64 * CASUALTY_RATE).floor() as u64;

        Casualties {
            estimated,
            affected_population,
        }
    }
}
