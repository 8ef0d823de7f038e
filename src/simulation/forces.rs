//! Forcing contributors for the vibration models
//!
//! Defines the [`Forcing`] trait and the two excitation laws: prescribed
//! base motion for the oscillator, and rotating unbalance plus the shaft
//! spring-damper for the Jeffcott rotor. Terms are pure functions of the
//! current state and time; their acceleration contributions are summed
//! into a single vector per step.

use std::f64::consts::TAU;

use crate::simulation::states::{NVec2, State};

/// Collection of forcing terms acting on one model
/// Each term implements [`Forcing`] and their acceleration contributions
/// are summed into a single acceleration vector
pub struct ForcingSet {
    terms: Vec<Box<dyn Forcing + Send + Sync>>,
}

impl ForcingSet {
    /// Create an empty forcing set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a forcing term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Forcing + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Apply kinematic prescriptions at time `t` before force evaluation
    /// Terms without a prescribed DOF leave the state untouched
    pub fn prescribe(&self, t: f64, state: &mut State) {
        for term in &self.terms {
            term.prescribe(t, state);
        }
    }

    /// Compute the total acceleration at time `t` for the current state
    /// - `out` is zeroed, then every term adds its contribution
    pub fn accumulate_accel(&self, t: f64, state: &State, out: &mut NVec2) {
        *out = NVec2::zeros();
        for term in &self.terms {
            term.acceleration(t, state, out);
        }
    }
}

impl Default for ForcingSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for forcing sources operating on [`State`]
/// Implementations add their acceleration contribution into `out`;
/// `prescribe` may overwrite kinematically driven DOFs first
pub trait Forcing {
    fn prescribe(&self, _t: f64, _state: &mut State) {}

    fn acceleration(&self, t: f64, state: &State, out: &mut NVec2);
}

/// Base-excited spring-mass-damper
///
/// The base DOF (index 0) is kinematically prescribed each step:
///   u0 = A sin(w t),  v0 = w A cos(w t)
/// Only the mass DOF (index 1) is dynamically integrated, driven by the
/// spring and damper acting on the relative motion mass - base
pub struct BaseExcitation {
    pub k: f64,       // stiffness [N/m]
    pub c: f64,       // damping [N s/m]
    pub m: f64,       // suspended mass [kg]
    pub amp: f64,     // base motion amplitude [m]
    pub freq_hz: f64, // excitation frequency [Hz]
}

impl Forcing for BaseExcitation {
    fn prescribe(&self, t: f64, state: &mut State) {
        let w = TAU * self.freq_hz;
        // base is overwritten, not integrated
        state.u[0] = self.amp * (w * t).sin();
        state.v[0] = w * self.amp * (w * t).cos();
    }

    fn acceleration(&self, _t: f64, state: &State, out: &mut NVec2) {
        // relative motion between mass and base
        let rel_u = state.u[1] - state.u[0];
        let rel_v = state.v[1] - state.v[0];

        // spring + damping forces, net force on the mass opposes both
        let f_spring = self.k * rel_u;
        let f_damp = self.c * rel_v;
        let f_total = -(f_spring + f_damp);

        out[1] += f_total / self.m;
    }
}

/// Shaft spring-damper restoring term of the Jeffcott rotor
/// Acts on both lateral coordinates: a += -(k u + c v) / m
pub struct ShaftRestoring {
    pub k: f64, // shaft stiffness [N/m]
    pub c: f64, // viscous damping [N s/m]
    pub m: f64, // disk mass [kg]
}

impl Forcing for ShaftRestoring {
    fn acceleration(&self, _t: f64, state: &State, out: &mut NVec2) {
        *out += -(self.k * state.u + self.c * state.v) / self.m;
    }
}

/// Synchronous unbalance excitation of the Jeffcott rotor
/// Force F = m_r e Omega^2 [cos Omega t, sin Omega t] on the disk mass
pub struct Unbalance {
    pub m_r: f64,     // rotating (disk) mass [kg]
    pub ecc: f64,     // eccentricity [m]
    pub spin_hz: f64, // spin frequency [Hz]
}

impl Forcing for Unbalance {
    fn acceleration(&self, t: f64, _state: &State, out: &mut NVec2) {
        let omega = TAU * self.spin_hz;
        let f_mag = self.m_r * self.ecc * omega * omega;
        let phase = omega * t;
        *out += NVec2::new(phase.cos(), phase.sin()) * (f_mag / self.m_r);
    }
}
