use orbitsim::{run_headless, Scenario, ScenarioConfig, AU};
use orbitsim::{bench_gravity, bench_step};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "solar_system.yaml")]
    file_name: String,

    /// Run the force/step benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    info!(
        "stepping {} bodies to t = {:.4e} s",
        scenario.system.bodies.len(),
        scenario.parameters.t_end
    );

    let steps = run_headless(&mut scenario)?;

    info!("finished after {} steps", steps);
    for b in &scenario.system.bodies {
        if b.is_anchor {
            info!("{}: at ({:.4e}, {:.4e}) m", b.name, b.x.x, b.x.y);
        } else {
            info!(
                "{}: at ({:.4e}, {:.4e}) m, {:.4} AU from anchor, |v| = {:.1} m/s",
                b.name,
                b.x.x,
                b.x.y,
                b.distance_to_anchor / AU,
                b.v.norm()
            );
        }
    }

    Ok(())
}
