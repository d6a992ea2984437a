//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`ForceSet`)
//!
//! Validation happens here, before the first step: body masses must be
//! strictly positive, step size and end time positive and finite.

use thiserror::Error;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::{Parameters, G};
use crate::simulation::states::{Body, BodyError, NVec2, System};

/// Configuration rejected while building a [`Scenario`]
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Body(#[from] BodyError),
    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),
    #[error("t_end must be positive and finite, got {0}")]
    InvalidEndTime(f64),
}

/// Fully-initialized runtime bundle for one simulation run.
///
/// Contains the engine settings, numerical parameters, current system state,
/// and the set of active force laws. The headless driver consumes it
/// directly; a rendering front end would hold it the same way and read the
/// bodies' positions, radii, colors and orbit trails between steps.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ScenarioError> {
        // Parameters (runtime) from ParametersConfig, checked before the
        // system is built
        let p_cfg = cfg.parameters;
        if !(p_cfg.timestep > 0.0 && p_cfg.timestep.is_finite()) {
            return Err(ScenarioError::InvalidTimestep(p_cfg.timestep));
        }
        if !(p_cfg.t_end > 0.0 && p_cfg.t_end.is_finite()) {
            return Err(ScenarioError::InvalidEndTime(p_cfg.t_end));
        }
        let parameters = Parameters {
            timestep: p_cfg.timestep,
            t_end: p_cfg.t_end,
            g: p_cfg.g.unwrap_or(G),
            orbit_retention: p_cfg.orbit_retention,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`; the constructor
        // rejects non-positive masses
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                let body = Body::new(
                    bc.name.clone(),
                    NVec2::new(bc.x[0], bc.x[1]),
                    NVec2::new(bc.v[0], bc.v[1]),
                    bc.m,
                    bc.radius,
                    bc.color,
                    bc.anchor,
                )?;
                Ok(match parameters.orbit_retention {
                    Some(cap) => body.with_retention(cap),
                    None => body,
                })
            })
            .collect::<Result<Vec<Body>, BodyError>>()?;

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            log_every: cfg.engine.log_every.unwrap_or(0),
        };

        // Forces: construct a ForceSet and register Newtonian gravity
        let forces = ForceSet::new().with(NewtonianGravity { g: parameters.g });

        Ok(Self {
            engine,
            parameters,
            system,
            forces,
        })
    }
}
