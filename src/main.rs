//! Headless runner: loads a level and plays it with scripted input.
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tandem::input::ControllerBindings;
use tandem::map::{read_level, verify_level};
use tandem::{init_logging, load_level, BodyColor, PhysicsSettings, ScriptedController, Simulation};

/// A cooperative two-character platformer simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level text file
    #[arg(default_value = "levels/level1.txt")]
    level: PathBuf,
    /// JSON physics settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Fixed steps to simulate
    #[arg(short, long, default_value_t = 600)]
    steps: u64,
    /// Input script for the red character (`.LRJlr`)
    #[arg(long, default_value = "")]
    red: String,
    /// Input script for the blue character (`.LRJlr`)
    #[arg(long, default_value = "")]
    blue: String,
    /// Verify the level text and exit
    #[arg(long)]
    check: bool,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn settings(args: &Args) -> Result<PhysicsSettings> {
    match &args.config {
        Some(path) => PhysicsSettings::from_path(path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => Ok(PhysicsSettings::default()),
    }
}

#[expect(
    clippy::print_stdout,
    reason = "The level report is the command's output."
)]
fn check(args: &Args, settings: &PhysicsSettings) -> Result<ExitCode> {
    let text = read_level(&args.level)?;
    let report = verify_level(&text, settings.dimensions);
    println!("{}: {report}", args.level.display());
    Ok(if report.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run(args: &Args, settings: PhysicsSettings) -> Result<()> {
    let level = load_level(&args.level, &settings);
    let mut simulation = Simulation::new(level, settings);
    let mut bindings = ControllerBindings::new();
    for (color, script) in [(BodyColor::Red, &args.red), (BodyColor::Blue, &args.blue)] {
        let controller = ScriptedController::parse(script)
            .with_context(|| format!("parsing {color:?} input script"))?;
        if let Some(body) = simulation.body_by_color(color) {
            bindings.bind(body.id(), controller);
        }
    }

    for _ in 0..args.steps {
        let intents = bindings.sample(simulation.bodies().len());
        let outcome = simulation.step(&intents);
        for event in simulation.drain_events() {
            info!("step {}: {event}", simulation.step_count());
        }
        if outcome.level_complete {
            info!("level complete after {} steps", simulation.step_count());
            simulation.reset_all_bodies();
            simulation.drain_events();
        }
    }
    for body in simulation.bodies() {
        let position = body.position();
        info!(
            "{:?} finished at ({:.1}, {:.1}), grounded: {}",
            body.color(),
            position.x,
            position.y,
            body.is_grounded()
        );
    }
    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);
    let settings = settings(&args)?;
    if args.check {
        return check(&args, &settings);
    }
    run(&args, settings)?;
    Ok(ExitCode::SUCCESS)
}
