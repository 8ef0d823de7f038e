//! Spin-frequency sweep for the rotor model
//!
//! Re-runs the whole parameter/state/integration/transform pipeline from a
//! fresh zero state for every frequency in an inclusive linspace and writes
//! one rotating-frame orbit image per frequency. Iterations are fully
//! independent (each owns its state and log); the loop runs sequentially.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::configuration::config::SweepConfig;
use crate::simulation::params::Parameters;
use crate::simulation::rotating_frame::derotate_orbit;
use crate::simulation::scenario::Scenario;
use crate::visualization::sweep_plots::save_orbit_plot;

/// `count` linearly spaced frequencies over [start, end], endpoints included.
pub fn sweep_frequencies(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + i as f64 * step).collect()
}

/// Image path for one sweep iteration. The frequency is zero-padded to two
/// decimals so lexicographic filename order matches frequency order.
pub fn orbit_plot_path(out_dir: &Path, f_spin: f64) -> PathBuf {
    out_dir.join(format!("response_{f_spin:06.2}_hz.png"))
}

/// Run the full sweep, one image per frequency, and return the written
/// paths in frequency order. Any directory or file failure is fatal for
/// the sweep; there is no retry or partial-result salvage.
pub fn run_sweep(base: &Parameters, sweep: &SweepConfig) -> Result<Vec<PathBuf>> {
    let out_dir = Path::new(&sweep.output_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut written = Vec::with_capacity(sweep.count);

    for f_spin in sweep_frequencies(sweep.f_start, sweep.f_end, sweep.count) {
        // fresh parameters and zero initial state per iteration
        let parameters = Parameters {
            exc_freq: f_spin,
            ..base.clone()
        };
        let scenario = Scenario::rotor(parameters);
        let log = scenario.run();

        let orbit = derotate_orbit(&log, f_spin);

        let path = orbit_plot_path(out_dir, f_spin);
        let title = format!("Response in rotating frame {f_spin:.2} Hz");
        save_orbit_plot(&path, &title, &orbit)
            .with_context(|| format!("failed to write {}", path.display()))?;

        written.push(path);
    }

    Ok(written)
}
