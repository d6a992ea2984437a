//! High-level runtime engine settings and the headless stepping driver
//!
//! The engine owns the tick loop: it calls the integrator exactly once per
//! simulated step until the configured end time is reached. Rendering front
//! ends drive the same integrator from their own frame loop instead.

use log::info;

use crate::simulation::forces::ForceError;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::scenario::Scenario;

#[derive(Debug, Clone)]
pub struct Engine {
    pub log_every: u64, // progress line every this many steps, 0 = silent
}

/// Step the scenario until `t >= t_end`, returning the number of completed
/// steps. Fails on the first degenerate step, with state left at the last
/// good tick.
pub fn run_headless(scenario: &mut Scenario) -> Result<u64, ForceError> {
    // Split &mut Scenario into &mut fields in one destructuring step
    let Scenario {
        engine,
        parameters,
        system,
        forces,
    } = scenario;

    let mut steps: u64 = 0;
    while system.t < parameters.t_end {
        euler_integrator(system, forces, parameters)?;
        steps += 1;

        if engine.log_every > 0 && steps % engine.log_every == 0 {
            info!("t = {:.4e} s, {} steps", system.t, steps);
        }
    }

    Ok(steps)
}
