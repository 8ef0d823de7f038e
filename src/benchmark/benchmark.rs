use std::time::Instant;

use crate::simulation::forces::ForcingSet;
use crate::simulation::integrator::euler_semi_implicit;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::State;

/// Nominal parameters for benchmarking, step count filled in per run
fn bench_params(steps: usize, freq: f64, dt: f64) -> Parameters {
    Parameters {
        m: 1.0,
        k: 100_000.0,
        c: 15.0,
        dt,
        steps,
        exc_amp: 0.002,
        exc_freq: freq,
    }
}

fn time_steps(params: &Parameters, forcing: &ForcingSet) -> f64 {
    let mut state = State::at_rest();

    // Warm up
    euler_semi_implicit(&mut state, forcing, params);

    let t0 = Instant::now();
    for _ in 0..params.steps {
        euler_semi_implicit(&mut state, forcing, params);
    }
    t0.elapsed().as_secs_f64()
}

/// Time the bare integrator loop for both forcing sets over a range of
/// step counts. Paste output directly into excel to graph
pub fn bench_integrator() {
    println!("steps,oscillator_ms,rotor_ms");

    for steps in [10_000, 50_000, 100_000, 500_000, 1_000_000] {
        let osc = Scenario::oscillator(bench_params(steps, 18.82, 1e-6));
        let osc_s = time_steps(&osc.parameters, &osc.forcing);

        let rot = Scenario::rotor(bench_params(steps, 26.0, 2e-5));
        let rot_s = time_steps(&rot.parameters, &rot.forcing);

        println!("{},{:.6},{:.6}", steps, osc_s * 1000.0, rot_s * 1000.0);
    }
}
