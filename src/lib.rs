pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{State, TimeSeries, NVec2};
pub use simulation::params::Parameters;
pub use simulation::forces::{Forcing, ForcingSet, BaseExcitation, ShaftRestoring, Unbalance};
pub use simulation::integrator::{euler_semi_implicit, integrate};
pub use simulation::rotating_frame::{RotatedSeries, rotate_phase_portrait, derotate_orbit};
pub use simulation::scenario::Scenario;
pub use simulation::sweep::{orbit_plot_path, run_sweep, sweep_frequencies};

pub use configuration::config::{ScenarioConfig, ModelConfig, ParametersConfig, SweepConfig};

pub use visualization::{phase_view::run_phase_view, sweep_plots::save_orbit_plot};

pub use benchmark::benchmark::bench_integrator;
