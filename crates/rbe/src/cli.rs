use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rbe_core::seed::seed_numeric;
use rbe_core::{DEFAULT_HORIZON, PolicyDial, PolicyInputs, find_preset};

use crate::scenario_file::ScenarioFile;

#[derive(Parser, Debug)]
#[command(name = "rbe", version)]
#[command(about = "Explore the RBE sandbox scenario model from the terminal")]
pub struct Cli {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the built-in preset scenarios
    Presets {
        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
    /// Evaluate a scenario and print its trajectory
    Run {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Years to project (0-200)
        #[arg(
            long,
            default_value_t = DEFAULT_HORIZON,
            value_parser = clap::value_parser!(u32).range(0..=200)
        )]
        horizon: u32,

        /// Write the resolved dials to a YAML scenario file
        #[arg(long)]
        save: Option<PathBuf>,

        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
    /// Step one dial from 0 to 100 with the others held fixed
    Sweep {
        /// Dial to sweep (e.g. commonsLevel or commons-level)
        dial: PolicyDial,

        /// Number of evenly spaced points, endpoints included
        #[arg(long, default_value_t = 11)]
        steps: usize,

        #[command(flatten)]
        scenario: ScenarioArgs,

        #[arg(long, help = "Output machine-readable JSON")]
        json: bool,
    },
}

/// Where a scenario's dials come from.
///
/// Defaults first, then a preset or scenario file, then explicit dial flags.
#[derive(Args, Debug, Default, Clone)]
pub struct ScenarioArgs {
    /// Start from a preset (key or name)
    #[arg(long, conflicts_with = "scenario")]
    pub preset: Option<String>,

    /// Start from a YAML scenario file
    #[arg(long)]
    pub scenario: Option<PathBuf>,

    #[arg(long, allow_hyphen_values = true)]
    pub profit_priority: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub commons_level: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub automation_level: Option<f64>,

    #[arg(long, allow_hyphen_values = true)]
    pub eco_constraint: Option<f64>,
}

impl ScenarioArgs {
    pub fn resolve(&self) -> color_eyre::Result<PolicyInputs> {
        let mut inputs = PolicyInputs::default();

        if let Some(name) = &self.preset {
            inputs = find_preset(name)?.inputs;
            tracing::debug!(preset = %name, "starting from preset");
        } else if let Some(path) = &self.scenario {
            inputs = ScenarioFile::load(path)?.apply(inputs);
            tracing::debug!(path = %path.display(), "starting from scenario file");
        }

        Ok(seed_numeric(
            inputs,
            [
                (PolicyDial::ProfitPriority, self.profit_priority),
                (PolicyDial::CommonsLevel, self.commons_level),
                (PolicyDial::AutomationLevel, self.automation_level),
                (PolicyDial::EcoConstraint, self.eco_constraint),
            ],
        ))
    }
}
