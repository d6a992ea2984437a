pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyError, Color, NVec2, OrbitHistory, System};
pub use simulation::forces::{anchor_distances, newtonian_pair, Force, ForceError, ForceSet, NewtonianGravity};
pub use simulation::integrator::euler_integrator;
pub use simulation::engine::{run_headless, Engine};
pub use simulation::scenario::{Scenario, ScenarioError};
pub use simulation::params::{Parameters, AU, DAY, G, SIZE_SCALE};

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_step};
