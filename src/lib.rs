//! Asteroid impact effects and deflection estimation service.
//!
//! - `services::impact` chains scaling laws from asteroid size, density and
//!   speed to energy, crater, seismic, tsunami, blast and casualty estimates.
//! - `services::deflection` models kinetic impactor, gravity tractor and laser
//!   ablation missions.
//! - `clients` / `services::NeoService` proxy NASA's NeoWs catalog.
//!
//! The estimators hold no state; the HTTP layer in `handlers` and `routes`
//! validates input before calling them.

pub mod clients;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
