//! Numerical and physical parameters for one simulation run
//!
//! `Parameters` is built once per run (once per sweep iteration for the
//! rotor) and never mutated afterwards:
//! - mass, stiffness, damping,
//! - fixed integration step and step count,
//! - excitation amplitude (base amplitude or rotor eccentricity),
//! - excitation / spin frequency in Hz

use std::f64::consts::TAU;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub m: f64,        // mass [kg]
    pub k: f64,        // stiffness [N/m]
    pub c: f64,        // viscous damping [N s/m]
    pub dt: f64,       // fixed step size [s]
    pub steps: usize,  // step count
    pub exc_amp: f64,  // base amplitude or eccentricity [m]
    pub exc_freq: f64, // excitation / spin frequency [Hz]
}

impl Parameters {
    /// Excitation angular frequency, 2*pi*f [rad/s].
    pub fn omega(&self) -> f64 {
        TAU * self.exc_freq
    }

    /// Undamped natural frequency sqrt(k/m)/(2*pi) [Hz].
    /// The fixed step must satisfy dt << 1/omega_n or the explicit
    /// scheme diverges; this is a parameterization duty, not checked here.
    pub fn natural_frequency_hz(&self) -> f64 {
        (self.k / self.m).sqrt() / TAU
    }
}
