//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – run driver options (progress logging)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   log_every: 30           # progress line every 30 steps, omit for silent
//!
//! parameters:
//!   timestep: 86400.0       # seconds simulated per step (one day)
//!   t_end: 31536000.0       # stop time, one year
//!   g: 6.67428e-11          # gravitational constant, optional
//!   orbit_retention: 10000  # keep only the last K orbit points, optional
//!
//! bodies:
//!   - name: sun
//!     x: [ 0.0, 0.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.98892e30
//!     radius: 30.0
//!     color: [ 255, 255, 0 ]
//!     anchor: true
//!   - name: earth
//!     x: [ -1.496e11, 0.0 ]
//!     v: [ 0.0, 29783.0 ]
//!     m: 5.9742e24
//!     radius: 16.0
//!     color: [ 100, 149, 237 ]
//! ```
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation, with validation applied during the mapping.

use serde::Deserialize;

/// Run driver configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub log_every: Option<u64>, // progress line cadence in steps, None/0 = silent
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub timestep: f64, // seconds simulated per step, must be positive and finite
    pub t_end: f64,    // stop time for headless runs (s)
    pub g: Option<f64>, // gravitational constant, defaults to the SI value
    pub orbit_retention: Option<usize>, // cap on stored orbit points per body
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,   // display label
    pub x: [f64; 2],    // initial position (m)
    pub v: [f64; 2],    // initial velocity (m/s)
    pub m: f64,         // mass (kg), must be strictly positive
    pub radius: f64,    // display radius, opaque to the physics
    pub color: [u8; 3], // display color, opaque to the physics
    #[serde(default)]
    pub anchor: bool,   // treat this body as the gravitational center
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig, // run driver configuration
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub bodies: Vec<BodyConfig>, // list of bodies that define the initial state of the system
}
