//! Core state types for the vibration simulations.
//!
//! Both models track two coordinates in one `NVec2` per quantity:
//! - oscillator: index 0 = base, index 1 = mass (base is kinematically
//!   prescribed each step, only the mass is integrated dynamically)
//! - rotor: index 0 = x, index 1 = y (both integrated)
//!
//! `State` is owned exclusively by one simulation run; `TimeSeries` is the
//! per-step log of that run, read-only once the loop finishes.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct State {
    pub u: NVec2, // displacement
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration from the last forcing evaluation
    pub t: f64,   // time
}

impl State {
    /// Zero displacement, zero velocity, t = 0.
    pub fn at_rest() -> Self {
        Self {
            u: NVec2::zeros(),
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            t: 0.0,
        }
    }
}

/// Column-wise log of an integration run, one entry per step.
/// Entries are sampled at the top of each step, so entry 0 is the
/// initial state at t = 0.
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub t: Vec<f64>,
    pub u: Vec<NVec2>,
    pub v: Vec<NVec2>,
}

impl TimeSeries {
    pub fn with_capacity(steps: usize) -> Self {
        Self {
            t: Vec::with_capacity(steps),
            u: Vec::with_capacity(steps),
            v: Vec::with_capacity(steps),
        }
    }

    pub fn push(&mut self, t: f64, u: NVec2, v: NVec2) {
        self.t.push(t);
        self.u.push(u);
        self.v.push(v);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}
