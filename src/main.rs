use vibrosim::{ModelConfig, Scenario, ScenarioConfig};
use vibrosim::{derotate_orbit, rotate_phase_portrait};
use vibrosim::{orbit_plot_path, run_sweep};
use vibrosim::{run_phase_view, save_orbit_plot};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "oscillator.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(&file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let cfg = load_scenario_from_yaml()?;

    match cfg.model {
        ModelConfig::Oscillator => {
            let scenario = Scenario::build_scenario(&cfg);
            let log = scenario.run();
            let rotated = rotate_phase_portrait(&log, scenario.parameters.exc_freq);
            // blocks until the display window is closed
            run_phase_view(rotated);
        }
        ModelConfig::Rotor => match &cfg.sweep {
            Some(sweep) => {
                let base = Scenario::parameters_from(&cfg.parameters, None);
                let written = run_sweep(&base, sweep)?;
                println!("sweep: wrote {} plots to {}", written.len(), sweep.output_dir);
            }
            None => {
                // single-frequency run, one orbit image
                let scenario = Scenario::build_scenario(&cfg);
                let log = scenario.run();
                let orbit = derotate_orbit(&log, scenario.parameters.exc_freq);

                let out_dir = Path::new("jeffcott_plots");
                fs::create_dir_all(out_dir).with_context(|| {
                    format!("failed to create output directory {}", out_dir.display())
                })?;
                let f_spin = scenario.parameters.exc_freq;
                let path = orbit_plot_path(out_dir, f_spin);
                let title = format!("Response in rotating frame {f_spin:.2} Hz");
                save_orbit_plot(&path, &title, &orbit)?;
                println!("wrote {}", path.display());
            }
        },
    }

    //bench_integrator();

    Ok(())
}
