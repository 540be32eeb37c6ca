//! Command-line front end for the RBE sandbox.
//!
//! Every command renders to a `String` so output can be tested without a
//! terminal; `main` only prints it.

pub mod cli;
pub mod format;
pub mod logging;
pub mod scenario_file;

pub use cli::{Cli, Command, ScenarioArgs};
pub use logging::init_logging;
pub use scenario_file::ScenarioFile;

use color_eyre::eyre::WrapErr;
use rbe_core::{PRESETS, ScenarioReport, sweep_dial};

/// Run a parsed command and return what it would print.
pub fn execute(command: &Command) -> color_eyre::Result<String> {
    match command {
        Command::Presets { json } => {
            if *json {
                serde_json::to_string_pretty(&PRESETS).wrap_err("Failed to encode presets")
            } else {
                Ok(format::render_presets(&PRESETS))
            }
        }
        Command::Run {
            scenario,
            horizon,
            save,
            json,
        } => {
            let inputs = scenario.resolve()?;
            let report = ScenarioReport::build(inputs, *horizon);
            tracing::info!(
                classification = report.classification.label(),
                horizon,
                "evaluated scenario"
            );

            if let Some(path) = save {
                ScenarioFile::from_inputs(scenario.preset.clone(), inputs).save(path)?;
                tracing::info!(path = %path.display(), "saved scenario");
            }

            if *json {
                serde_json::to_string_pretty(&report).wrap_err("Failed to encode report")
            } else {
                Ok(format::render_report(&report))
            }
        }
        Command::Sweep {
            dial,
            steps,
            scenario,
            json,
        } => {
            let base = scenario.resolve()?;
            let points = sweep_dial(&base, *dial, *steps)?;

            if *json {
                serde_json::to_string_pretty(&points).wrap_err("Failed to encode sweep")
            } else {
                Ok(format::render_sweep(*dial, &points))
            }
        }
    }
}
