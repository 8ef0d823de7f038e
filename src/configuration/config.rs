//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ModelConfig`]      – which vibration model to run
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`SweepConfig`]      – optional spin-frequency sweep (rotor only)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The nominal rotor sweep scenario matching these types:
//!
//! ```yaml
//! model: rotor
//!
//! parameters:
//!   m: 1.0            # disk mass [kg]
//!   k: 100000.0       # shaft stiffness [N/m]
//!   c: 15.0           # viscous damping [N s/m]
//!   dt: 2.0e-5        # fixed step size [s]
//!   t_end: 2.0        # run duration [s], steps = t_end / dt
//!   exc_amp: 0.002    # eccentricity [m]
//!   exc_freq: 26.0    # spin frequency [Hz], ignored while sweeping
//!
//! sweep:
//!   f_start: 3.0
//!   f_end: 57.0
//!   count: 100
//!   output_dir: "jeffcott_plots"
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! `Scenario` representation.

use serde::Deserialize;

/// Which vibration model the scenario runs
/// `model: "oscillator"` or `model: "rotor"`
#[derive(Deserialize, Debug, Clone)]
pub enum ModelConfig {
    #[serde(rename = "oscillator")] // base-excited single-DOF spring-mass-damper
    Oscillator,

    #[serde(rename = "rotor")] // Jeffcott rotor with synchronous unbalance
    Rotor,
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub m: f64,        // mass [kg]
    pub k: f64,        // stiffness [N/m]
    pub c: f64,        // viscous damping [N s/m]
    pub dt: f64,       // fixed step size [s]
    pub t_end: f64,    // run duration [s]
    pub exc_amp: f64,  // base amplitude or eccentricity [m]
    pub exc_freq: f64, // excitation / spin frequency [Hz]
}

/// Spin-frequency sweep settings (rotor only)
#[derive(Deserialize, Debug, Clone)]
pub struct SweepConfig {
    pub f_start: f64,       // first spin frequency [Hz]
    pub f_end: f64,         // last spin frequency [Hz], inclusive
    pub count: usize,       // number of linearly spaced frequencies
    pub output_dir: String, // directory for the per-frequency images
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub model: ModelConfig,           // which model to run
    pub parameters: ParametersConfig, // numerical and physical parameters
    pub sweep: Option<SweepConfig>,   // rotor sweep; absent for single runs
}
