//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the integrator:
//! - numerical parameters (`Parameters`)
//! - the active forcing set (`ForcingSet`)
//!
//! The state vector itself is not part of the bundle; every run starts
//! from rest and owns its state locally, so nothing aliases across runs.

use crate::configuration::config::{ParametersConfig, ScenarioConfig};
use crate::simulation::forces::{BaseExcitation, ForcingSet, ShaftRestoring, Unbalance};
use crate::simulation::integrator::integrate;
use crate::simulation::params::Parameters;
use crate::simulation::states::TimeSeries;

/// Runtime bundle for one simulation run: immutable parameters plus the
/// forcing terms that drive it.
pub struct Scenario {
    pub parameters: Parameters,
    pub forcing: ForcingSet,
}

impl Scenario {
    /// Base-excited oscillator: one prescribed base DOF plus the dynamic mass.
    pub fn oscillator(parameters: Parameters) -> Self {
        let forcing = ForcingSet::new().with(BaseExcitation {
            k: parameters.k,
            c: parameters.c,
            m: parameters.m,
            amp: parameters.exc_amp,
            freq_hz: parameters.exc_freq,
        });

        Self { parameters, forcing }
    }

    /// Jeffcott rotor: shaft restoring plus synchronous unbalance, both
    /// lateral coordinates dynamically integrated.
    pub fn rotor(parameters: Parameters) -> Self {
        let forcing = ForcingSet::new()
            .with(ShaftRestoring {
                k: parameters.k,
                c: parameters.c,
                m: parameters.m,
            })
            .with(Unbalance {
                m_r: parameters.m,
                ecc: parameters.exc_amp,
                spin_hz: parameters.exc_freq,
            });

        Self { parameters, forcing }
    }

    /// Runtime parameters from the YAML-facing config. The step count is
    /// derived from the configured duration and fixed step size; an optional
    /// frequency override serves the sweep loop.
    pub fn parameters_from(cfg: &ParametersConfig, freq_override: Option<f64>) -> Parameters {
        Parameters {
            m: cfg.m,
            k: cfg.k,
            c: cfg.c,
            dt: cfg.dt,
            steps: (cfg.t_end / cfg.dt) as usize,
            exc_amp: cfg.exc_amp,
            exc_freq: freq_override.unwrap_or(cfg.exc_freq),
        }
    }

    /// Build the runtime bundle matching the configured model.
    pub fn build_scenario(cfg: &ScenarioConfig) -> Self {
        use crate::configuration::config::ModelConfig;

        let parameters = Self::parameters_from(&cfg.parameters, None);
        match cfg.model {
            ModelConfig::Oscillator => Self::oscillator(parameters),
            ModelConfig::Rotor => Self::rotor(parameters),
        }
    }

    /// Integrate the scenario from rest, returning the full log.
    pub fn run(&self) -> TimeSeries {
        integrate(&self.parameters, &self.forcing)
    }
}
