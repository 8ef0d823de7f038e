//! Rotating-frame transforms applied to a completed integration log
//!
//! Both transforms run as post-processing over the full [`TimeSeries`];
//! they never run interleaved with integration and leave the source log
//! untouched. At t = 0 the phase is zero and the rotated pair equals the
//! raw pair.
//!
//! The two sign conventions are deliberately different and must stay so:
//! the oscillator rotates its raw phase portrait *into* a display basis
//! spinning with the excitation (e^{+i w t}), while the rotor *de-rotates*
//! its spinning whirl response into a quasi-stationary frame (e^{-i W t}).

use std::f64::consts::TAU;

use num_complex::Complex64;

use super::states::TimeSeries;

/// Trajectory expressed in a rotating frame, one (re, im) pair per
/// logged step.
#[derive(Debug, Clone)]
pub struct RotatedSeries {
    pub re: Vec<f64>,
    pub im: Vec<f64>,
}

impl RotatedSeries {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            re: Vec::with_capacity(n),
            im: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, z: Complex64) {
        self.re.push(z.re);
        self.im.push(z.im);
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }

    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    /// Iterate over (re, im) points, for plotting.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.re.iter().copied().zip(self.im.iter().copied())
    }

    /// Largest distance from the origin, for axis scaling.
    pub fn max_radius(&self) -> f64 {
        self.points()
            .map(|(x, y)| x.hypot(y))
            .fold(0.0, f64::max)
    }
}

/// Rotate the oscillator's mass phase portrait into the excitation frame
///
/// Per entry: z = (x + i v/w) e^{+i w t} with w = 2 pi exc_freq_hz and the
/// velocity scaled by w so both axes carry comparable units. A synchronous
/// steady-state response traces a fixed shape in this basis.
pub fn rotate_phase_portrait(series: &TimeSeries, exc_freq_hz: f64) -> RotatedSeries {
    let omega = TAU * exc_freq_hz;
    let mut out = RotatedSeries::with_capacity(series.len());

    for i in 0..series.len() {
        let x = series.u[i][1];
        let v_scaled = series.v[i][1] / omega;
        let phi = omega * series.t[i];
        out.push(Complex64::new(x, v_scaled) * Complex64::cis(phi));
    }

    out
}

/// De-rotate the rotor's whirl orbit by the spin phase
///
/// Per entry: z = (x + i y) e^{-i W t} with W = 2 pi spin_hz. A purely
/// synchronous response collapses to a stationary point; non-synchronous
/// content remains as residual orbit motion around it.
pub fn derotate_orbit(series: &TimeSeries, spin_hz: f64) -> RotatedSeries {
    let omega = TAU * spin_hz;
    let mut out = RotatedSeries::with_capacity(series.len());

    for i in 0..series.len() {
        let z = Complex64::new(series.u[i][0], series.u[i][1]);
        out.push(z * Complex64::cis(-omega * series.t[i]));
    }

    out
}
