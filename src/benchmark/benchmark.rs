use std::time::Instant;

use crate::simulation::forces::{Force, ForceSet, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::params::{Parameters, AU};
use crate::simulation::states::{Body, NVec2, OrbitHistory, System};

/// Helper to build a deterministic System of size `n`
/// Bodies are scattered over a few AU; no rand needed
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec2::new((i_f * 0.37).sin() * 5.0 * AU, (i_f * 0.13).cos() * 5.0 * AU);

        bodies.push(Body {
            name: format!("b{i}"),
            x,
            v: NVec2::zeros(),
            m: 1.0e24,
            radius: 1.0,
            color: [255, 255, 255],
            is_anchor: false,
            distance_to_anchor: 0.0,
            orbit: OrbitHistory::with_retention(16),
        });
    }

    System { bodies, t: 0.0 }
}

/// Time one direct O(n^2) force evaluation for a range of system sizes
pub fn bench_gravity() {
    let ns = [8, 16, 32, 64, 128, 256, 512, 1024, 2048];

    let params = Parameters::default();

    for n in ns {
        let sys = make_system(n);
        let gravity = NewtonianGravity { g: params.g };

        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity
            .force(0.0, &sys, &mut out)
            .expect("bench bodies are pairwise distinct");

        let t0 = Instant::now();
        gravity
            .force(0.0, &sys, &mut out)
            .expect("bench bodies are pairwise distinct");
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {dt_direct:10.6} s");
    }
}

/// Time full integrator steps for a range of system sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_step() {
    println!("N,step_ms");

    let params = Parameters::default();

    for n in (64..=2048).step_by(64) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 512 { 5 } else { 1 };

        let mut sys = make_system(n);
        let forces = ForceSet::new().with(NewtonianGravity { g: params.g });

        // Warm-up one step
        euler_integrator(&mut sys, &forces, &params).expect("bench bodies are pairwise distinct");

        let t0 = Instant::now();
        for _ in 0..steps {
            euler_integrator(&mut sys, &forces, &params).expect("bench bodies are pairwise distinct");
        }
        let elapsed = t0.elapsed().as_secs_f64() * 1000.0; // ms total
        let ms_step = elapsed / steps as f64;

        println!("{n},{ms_step:.6}");
    }
}
