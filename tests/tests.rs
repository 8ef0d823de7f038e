use std::f64::consts::TAU;

use vibrosim::simulation::forces::{BaseExcitation, Forcing, ForcingSet, ShaftRestoring, Unbalance};
use vibrosim::simulation::integrator::{euler_semi_implicit, integrate};
use vibrosim::simulation::params::Parameters;
use vibrosim::simulation::rotating_frame::{derotate_orbit, rotate_phase_portrait};
use vibrosim::simulation::scenario::Scenario;
use vibrosim::simulation::states::{NVec2, State, TimeSeries};
use vibrosim::simulation::sweep::{run_sweep, sweep_frequencies};
use vibrosim::configuration::config::SweepConfig;

/// Nominal oscillator parameters with an overridable frequency, step and
/// duration (steps = t_end / dt)
fn oscillator_params(freq_hz: f64, dt: f64, t_end: f64) -> Parameters {
    Parameters {
        m: 1.0,
        k: 100_000.0,
        c: 15.0,
        dt,
        steps: (t_end / dt) as usize,
        exc_amp: 0.002,
        exc_freq: freq_hz,
    }
}

/// Nominal rotor parameters (eccentricity in exc_amp)
fn rotor_params(freq_hz: f64, dt: f64, t_end: f64) -> Parameters {
    oscillator_params(freq_hz, dt, t_end)
}

/// Closed-form steady-state relative displacement amplitude of the
/// base-excited oscillator: A w^2 / sqrt((wn^2 - w^2)^2 + (c w / m)^2)
fn relative_response_amplitude(p: &Parameters) -> f64 {
    let w = p.omega();
    let wn2 = p.k / p.m;
    p.exc_amp * w * w / ((wn2 - w * w).powi(2) + (p.c * w / p.m).powi(2)).sqrt()
}

/// Largest |u[1] - u[0]| over the last 20% of the log
fn tail_relative_amplitude(log: &TimeSeries) -> f64 {
    let start = log.len() * 4 / 5;
    (start..log.len())
        .map(|i| (log.u[i][1] - log.u[i][0]).abs())
        .fold(0.0, f64::max)
}

/// Largest |u[1]| over the last 20% of the log
fn tail_mass_amplitude(log: &TimeSeries) -> f64 {
    let start = log.len() * 4 / 5;
    (start..log.len())
        .map(|i| log.u[i][1].abs())
        .fold(0.0, f64::max)
}

// ==================================================================================
// Forcing tests
// ==================================================================================

#[test]
fn base_excitation_prescribes_base_motion() {
    let p = oscillator_params(18.82, 1e-6, 0.13);
    let exc = BaseExcitation {
        k: p.k,
        c: p.c,
        m: p.m,
        amp: p.exc_amp,
        freq_hz: p.exc_freq,
    };

    let w = p.omega();
    let t = 0.0123;
    let mut state = State::at_rest();
    exc.prescribe(t, &mut state);

    assert!((state.u[0] - p.exc_amp * (w * t).sin()).abs() < 1e-15);
    assert!((state.v[0] - w * p.exc_amp * (w * t).cos()).abs() < 1e-12);

    // the mass DOF is untouched by the prescription
    assert_eq!(state.u[1], 0.0);
    assert_eq!(state.v[1], 0.0);
}

#[test]
fn unbalance_rotates_with_spin_phase() {
    let unb = Unbalance {
        m_r: 1.0,
        ecc: 0.002,
        spin_hz: 26.0,
    };
    let omega = TAU * 26.0;
    let a_mag = 0.002 * omega * omega; // m_r cancels: F / m_r = e W^2

    let state = State::at_rest();

    // at t = 0 the force points along +x
    let mut a0 = NVec2::zeros();
    unb.acceleration(0.0, &state, &mut a0);
    assert!((a0[0] - a_mag).abs() < 1e-9);
    assert!(a0[1].abs() < 1e-12);

    // magnitude is constant at any phase
    let mut a1 = NVec2::zeros();
    unb.acceleration(0.0137, &state, &mut a1);
    assert!((a1.norm() - a_mag).abs() < 1e-9);
}

#[test]
fn shaft_restoring_opposes_displacement_and_velocity() {
    let shaft = ShaftRestoring {
        k: 100_000.0,
        c: 15.0,
        m: 1.0,
    };

    let mut state = State::at_rest();
    state.u = NVec2::new(1e-3, -2e-3);
    state.v = NVec2::new(0.5, 0.1);

    let mut a = NVec2::zeros();
    shaft.acceleration(0.0, &state, &mut a);

    // restoring acceleration does negative work against both components
    assert!(a.dot(&state.u) < 0.0, "spring does not oppose displacement");
    let expected = -(100_000.0 * state.u + 15.0 * state.v);
    assert!((a - expected).norm() < 1e-9);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

/// Constant pull on the first coordinate, for kinematics checks
struct ConstantPull {
    a: f64,
}

impl Forcing for ConstantPull {
    fn acceleration(&self, _t: f64, _state: &State, out: &mut NVec2) {
        out[0] += self.a;
    }
}

#[test]
fn single_step_uses_updated_velocity() {
    let p = oscillator_params(18.82, 1e-3, 1.0);
    let forcing = ForcingSet::new().with(ConstantPull { a: 3.0 });

    let mut state = State::at_rest();
    euler_semi_implicit(&mut state, &forcing, &p);

    // velocity first, then position from the *updated* velocity:
    // v = dt a and u = dt * (dt a), not the naive-Euler u = 0
    assert_eq!(state.v[0], p.dt * 3.0);
    assert_eq!(state.u[0], p.dt * p.dt * 3.0);
    assert_eq!(state.t, p.dt);
}

#[test]
fn integration_is_composable() {
    let p = rotor_params(26.0, 2e-5, 2.0);
    let full = Parameters { steps: 150, ..p.clone() };

    let scenario = Scenario::rotor(full.clone());
    let log = integrate(&full, &scenario.forcing);

    // stepping 100 times by hand lands exactly on log entry 100
    let mut state = State::at_rest();
    for _ in 0..100 {
        euler_semi_implicit(&mut state, &scenario.forcing, &full);
    }
    assert_eq!(state.u, log.u[100]);
    assert_eq!(state.v, log.v[100]);
    assert_eq!(state.t, log.t[100]);

    // a further 50 steps equals a straight 150-step run, bit for bit
    for _ in 0..50 {
        euler_semi_implicit(&mut state, &scenario.forcing, &full);
    }
    let mut straight = State::at_rest();
    for _ in 0..150 {
        euler_semi_implicit(&mut straight, &scenario.forcing, &full);
    }
    assert_eq!(state.u, straight.u);
    assert_eq!(state.v, straight.v);
    assert_eq!(state.t, straight.t);
}

#[test]
fn oscillator_matches_closed_form_below_resonance() {
    // one decade below the ~50.3 Hz natural frequency
    let p = oscillator_params(5.0, 2e-5, 2.0);
    let scenario = Scenario::oscillator(p.clone());
    let log = scenario.run();

    let expected = relative_response_amplitude(&p);
    let measured = tail_relative_amplitude(&log);

    assert!(
        (measured - expected).abs() / expected < 0.05,
        "relative amplitude {measured:e} vs closed form {expected:e}"
    );
}

#[test]
fn oscillator_response_vanishes_above_resonance() {
    // one decade above the natural frequency
    let p = oscillator_params(503.3, 2e-6, 1.0);
    let scenario = Scenario::oscillator(p.clone());
    let log = scenario.run();

    // relative motion still follows the closed form...
    let expected = relative_response_amplitude(&p);
    let measured = tail_relative_amplitude(&log);
    assert!(
        (measured - expected).abs() / expected < 0.05,
        "relative amplitude {measured:e} vs closed form {expected:e}"
    );

    // ...while the absolute mass motion is nearly isolated from the base
    let mass_amp = tail_mass_amplitude(&log);
    assert!(
        mass_amp < 0.05 * p.exc_amp,
        "mass amplitude {mass_amp:e} not small vs base amplitude {:e}",
        p.exc_amp
    );
}

#[test]
fn oscillator_response_bounded_for_nominal_parameters() {
    // regression guard against accidental integrator instability
    let p = oscillator_params(18.82, 1e-6, 0.13);
    let scenario = Scenario::oscillator(p.clone());
    let log = scenario.run();

    let max_u = log.u.iter().map(|u| u[1].abs()).fold(0.0, f64::max);
    assert!(max_u < 10.0 * p.exc_amp, "mass displacement {max_u:e} escaped envelope");
}

#[test]
fn rotor_response_bounded_for_nominal_parameters() {
    let p = rotor_params(26.0, 2e-5, 2.0);
    let scenario = Scenario::rotor(p.clone());
    let log = scenario.run();

    let max_u = log.u.iter().map(|u| u.norm()).fold(0.0, f64::max);
    assert!(max_u < 10.0 * p.exc_amp, "whirl radius {max_u:e} escaped envelope");
}

#[test]
fn too_large_step_diverges() {
    // dt far past the 1/omega_n stability bound: divergence is the expected
    // (and undetected) outcome, not an integrator bug
    let p = oscillator_params(18.82, 1e-2, 10.0);
    let scenario = Scenario::oscillator(p.clone());
    let log = scenario.run();

    let last = log.u[log.len() - 1][1];
    assert!(
        !last.is_finite() || last.abs() > 1.0,
        "expected divergence, got {last:e}"
    );
}

// ==================================================================================
// Rotating-frame tests
// ==================================================================================

#[test]
fn transforms_are_identity_at_t_zero() {
    let mut series = TimeSeries::with_capacity(1);
    series.push(0.0, NVec2::new(0.3, -0.2), NVec2::new(1.5, 0.4));

    // oscillator convention: (x, v/w) on the mass DOF, phase 0
    let w = TAU * 18.82;
    let rotated = rotate_phase_portrait(&series, 18.82);
    assert_eq!(rotated.re[0], -0.2);
    assert_eq!(rotated.im[0], 0.4 / w);

    // rotor convention: (x, y) unchanged
    let orbit = derotate_orbit(&series, 26.0);
    assert_eq!(orbit.re[0], 0.3);
    assert_eq!(orbit.im[0], -0.2);
}

#[test]
fn synchronous_orbit_collapses_to_point() {
    let spin_hz = 26.0;
    let omega = TAU * spin_hz;
    let radius = 7.5e-4;

    for delta in [0.0, 0.7, 2.0, -1.2] {
        let mut series = TimeSeries::with_capacity(200);
        for i in 0..200 {
            let t = i as f64 * 1e-4;
            let phase = omega * t + delta;
            series.push(
                t,
                NVec2::new(radius * phase.cos(), radius * phase.sin()),
                NVec2::zeros(),
            );
        }

        let orbit = derotate_orbit(&series, spin_hz);
        for i in 0..orbit.len() {
            assert!(
                (orbit.re[i] - radius * delta.cos()).abs() < 1e-12,
                "delta {delta}: drifting real part at entry {i}"
            );
            assert!(
                (orbit.im[i] - radius * delta.sin()).abs() < 1e-12,
                "delta {delta}: drifting imaginary part at entry {i}"
            );
        }
    }
}

#[test]
fn derotation_does_not_alter_the_log() {
    let p = rotor_params(26.0, 2e-5, 0.01);
    let scenario = Scenario::rotor(p);
    let log = scenario.run();

    let before = log.clone();
    let _ = derotate_orbit(&log, 26.0);

    assert_eq!(log.u, before.u);
    assert_eq!(log.v, before.v);
    assert_eq!(log.t, before.t);
}

// ==================================================================================
// Sweep tests
// ==================================================================================

#[test]
fn sweep_frequencies_are_linspace() {
    let freqs = sweep_frequencies(3.0, 57.0, 100);

    assert_eq!(freqs.len(), 100);
    assert_eq!(freqs[0], 3.0);
    assert!((freqs[99] - 57.0).abs() < 1e-9);

    let step = (57.0 - 3.0) / 99.0;
    for pair in freqs.windows(2) {
        assert!(pair[1] > pair[0], "frequencies not strictly increasing");
        assert!((pair[1] - pair[0] - step).abs() < 1e-9, "spacing not uniform");
    }
}

#[test]
fn sweep_writes_one_plot_per_frequency() {
    let out_dir = std::env::temp_dir().join("vibrosim_sweep_test");
    let _ = std::fs::remove_dir_all(&out_dir);

    // short runs keep the test quick; the pipeline per iteration is the same
    let base = rotor_params(26.0, 2e-4, 0.04);
    let sweep = SweepConfig {
        f_start: 3.0,
        f_end: 57.0,
        count: 7,
        output_dir: out_dir.to_string_lossy().into_owned(),
    };

    let written = run_sweep(&base, &sweep).expect("sweep failed");
    assert_eq!(written.len(), 7);

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();

    // unique, and zero-padded filenames sort in frequency order
    for pair in names.windows(2) {
        assert!(pair[0] < pair[1], "filenames not ordered: {:?}", pair);
    }
    for path in &written {
        let meta = std::fs::metadata(path).expect("plot file missing");
        assert!(meta.len() > 0, "empty plot file {}", path.display());
    }

    let _ = std::fs::remove_dir_all(&out_dir);
}
