//! Domain models for the application
use crate::errors::EstimationError;
use crate::utils::{check_non_negative, check_positive, check_range};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Ground-zero coordinates (degrees)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Physical parameters of an incoming asteroid.
///
/// `angle` and `impact_location` are range-checked but do not feed any
/// estimate yet; they are reserved for an angle-dependent coupling model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactInput {
    /// Diameter (m)
    pub size: f64,
    /// Bulk density (kg/m³)
    pub density: f64,
    /// Entry velocity (km/s)
    pub velocity: f64,
    /// Entry angle from horizontal (degrees)
    pub angle: f64,
    pub impact_location: ImpactLocation,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_water_impact: bool,
}

/// Missing and `null` both mean a land impact
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl ImpactInput {
    /// Reject values outside the physical domain of the estimators
    pub fn validate(&self) -> Result<(), EstimationError> {
        check_positive("size", self.size)?;
        check_positive("density", self.density)?;
        check_positive("velocity", self.velocity)?;
        check_range("angle", self.angle, 0.0, 90.0)?;
        check_range("impact_location.lat", self.impact_location.lat, -90.0, 90.0)?;
        check_range("impact_location.lng", self.impact_location.lng, -180.0, 180.0)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Energy {
    pub joules: f64,
    pub megatons_tnt: f64,
}

/// Crater dimensions (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Crater {
    pub diameter: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Seismic {
    /// Richter-like magnitude, capped at 12
    pub magnitude: f64,
    /// Felt radius (km)
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tsunami {
    /// Wave height (m), capped at 500
    pub wave_height: f64,
    /// Affected radius (km), capped at 10000
    pub affected_radius: f64,
}

/// Blast and thermal radii (km)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Atmospheric {
    pub fireball_radius: f64,
    pub thermal_radiation: f64,
    /// 5 psi overpressure radius
    pub overpressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Casualties {
    pub estimated: u64,
    pub affected_population: u64,
}

/// Full set of derived impact effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactReport {
    pub energy: Energy,
    pub crater: Crater,
    pub seismic: Seismic,
    /// Present only for water impacts
    pub tsunami: Option<Tsunami>,
    pub atmospheric: Atmospheric,
    pub casualties: Casualties,
}

/// Quick energy estimate with a Hiroshima comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    pub joules: f64,
    pub megatons_tnt: f64,
    pub hiroshima_equivalent: f64,
}

/// Deflection request as received on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeflectionRequest {
    #[serde(rename = "type")]
    pub strategy_type: String,
    /// Lead time before impact (days)
    pub time_available: f64,
    /// Target mass (kg)
    pub asteroid_mass: f64,
}

/// Supported deflection techniques
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    KineticImpactor,
    GravityTractor,
    LaserAblation,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::KineticImpactor,
        StrategyKind::GravityTractor,
        StrategyKind::LaserAblation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::KineticImpactor => "kinetic-impactor",
            StrategyKind::GravityTractor => "gravity-tractor",
            StrategyKind::LaserAblation => "laser-ablation",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = EstimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EstimationError::UnsupportedStrategy(s.to_string()))
    }
}

/// Mission constraints shared by every strategy.
///
/// Invariant: `asteroid_mass_kg > 0` and `time_available_days >= 0`, both finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeflectionTarget {
    pub time_available_days: f64,
    pub asteroid_mass_kg: f64,
}

impl DeflectionTarget {
    pub fn new(time_available_days: f64, asteroid_mass_kg: f64) -> Result<Self, EstimationError> {
        Ok(Self {
            time_available_days: check_non_negative("time_available", time_available_days)?,
            asteroid_mass_kg: check_positive("asteroid_mass", asteroid_mass_kg)?,
        })
    }
}

/// A validated deflection plan
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeflectionStrategy {
    KineticImpactor(DeflectionTarget),
    GravityTractor(DeflectionTarget),
    LaserAblation(DeflectionTarget),
}

impl DeflectionStrategy {
    pub fn new(kind: StrategyKind, target: DeflectionTarget) -> Self {
        match kind {
            StrategyKind::KineticImpactor => DeflectionStrategy::KineticImpactor(target),
            StrategyKind::GravityTractor => DeflectionStrategy::GravityTractor(target),
            StrategyKind::LaserAblation => DeflectionStrategy::LaserAblation(target),
        }
    }
}

impl TryFrom<&DeflectionRequest> for DeflectionStrategy {
    type Error = EstimationError;

    fn try_from(request: &DeflectionRequest) -> Result<Self, Self::Error> {
        let kind = request.strategy_type.parse::<StrategyKind>()?;
        let target = DeflectionTarget::new(request.time_available, request.asteroid_mass)?;
        Ok(DeflectionStrategy::new(kind, target))
    }
}

/// Keplerian elements after deflection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalData {
    /// Semi-major axis (AU)
    pub a: f64,
    pub e: f64,
    /// Inclination (degrees)
    pub i: f64,
    /// Argument of periapsis (degrees)
    pub omega: f64,
    /// Longitude of ascending node (degrees)
    #[serde(rename = "Omega")]
    pub ascending_node: f64,
    /// Mean anomaly (degrees)
    #[serde(rename = "M")]
    pub mean_anomaly: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionReport {
    /// Velocity change imparted (m/s)
    pub delta_v: f64,
    pub success_probability: f64,
    pub required_missions: u64,
    pub new_orbital_data: Option<OrbitalData>,
}

/// Static catalog entry describing a deflection technique
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyDescriptor {
    pub id: StrategyKind,
    pub name: &'static str,
    pub description: &'static str,
    pub effectiveness: f64,
    pub min_time_required_days: u32,
    pub technology_readiness: &'static str,
    pub example: &'static str,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}
