use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use std::fs;
use std::path::PathBuf;

use planet_orbits::{batch, render, Scenario};

#[derive(Parser, Debug)]
#[command(about = "Newtonian orbits of a star and its planets")]
struct Args {
    /// Scenario YAML, the classic inner solar system if omitted
    #[arg(short, long, global = true)]
    scenario: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate the system in a window
    Window,
    /// Run without a window and write the position history as YAML
    Batch {
        /// Steps to run, overriding the scenario
        #[arg(long)]
        steps: Option<u64>,
        /// Output file, stdout if omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the scenario in use as YAML
    Scenario,
}

fn load_scenario(path: Option<&PathBuf>) -> Result<Scenario> {
    match path {
        Some(path) => Scenario::from_path(path),
        None => Ok(Scenario::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = load_scenario(args.scenario.as_ref())?;
    let mut system = scenario.build_system().context("invalid scenario")?;
    info!("Loaded {} bodies", system.len());

    match args.command.unwrap_or(Command::Window) {
        Command::Window => render::run_window(&mut system, &scenario.display)?,
        Command::Batch { steps, output } => {
            let steps = steps.unwrap_or(scenario.batch.steps);
            let history = batch::run(&mut system, steps)?;
            let yaml = history.to_yaml()?;
            match output {
                Some(path) => {
                    fs::write(&path, yaml).with_context(|| format!("failed to write {}", path.display()))?;
                    info!("History written to {}", path.display());
                }
                None => print!("{}", yaml),
            }
        }
        Command::Scenario => print!("{}", scenario.to_yaml()?),
    }

    Ok(())
}
