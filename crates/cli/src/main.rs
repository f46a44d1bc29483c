#![deny(unsafe_code)]
//! CLI binary for the glyphdust particle simulation.
//!
//! Subcommands:
//! - `render` — run the simulation N ticks headless, write a PNG snapshot
//! - `params` — print the parameter schema

mod error;
mod silhouette;

use clap::{Parser, Subcommand};
use error::CliError;
use glam::DVec2;
use glyphdust_core::Scenario;
use glyphdust_sim::{SimConfig, Simulation};
use std::path::PathBuf;
use std::process;

/// Frame period of the simulated 60 Hz host loop, in milliseconds.
const TICK_MS: f64 = 1000.0 / 60.0;

#[derive(Parser)]
#[command(name = "glyphdust", about = "Text-silhouette particle field CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the simulation for N ticks and write a PNG snapshot.
    Render {
        /// Canvas width in logical units.
        #[arg(short = 'W', long, default_value_t = 800.0)]
        width: f64,

        /// Canvas height in logical units.
        #[arg(short = 'H', long, default_value_t = 600.0)]
        height: f64,

        /// Number of simulation ticks at 60 per simulated second.
        #[arg(short, long, default_value_t = 600)]
        ticks: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Simulation parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Scenario file overriding width/height/ticks/seed/params.
        #[arg(long)]
        scenario: Option<PathBuf>,

        /// Homes file: a JSON array of [x, y] pairs from a glyph sampler.
        /// Without it, a stand-in four-bar silhouette is generated.
        #[arg(long)]
        homes: Option<PathBuf>,

        /// Grid pitch of the stand-in silhouette.
        #[arg(long, default_value_t = 6.0)]
        gap: f64,

        /// Drive a scripted pointer sweep for this many leading ticks, then
        /// hold still and let idle mode take over.
        #[arg(long, default_value_t = 0)]
        interactive_ticks: usize,

        /// Output file path.
        #[arg(short, long, default_value = "frame.png")]
        output: PathBuf,
    },
    /// Print the parameter schema.
    Params,
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Params => {
            let schema = SimConfig::schema();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&schema)?);
            } else {
                let entries = schema.as_object().into_iter().flatten();
                for (name, entry) in entries {
                    let description = entry["description"].as_str().unwrap_or("");
                    println!("{name}: {} (default {})", description, entry["default"]);
                }
            }
        }
        Command::Render {
            width,
            height,
            ticks,
            seed,
            params,
            scenario,
            homes,
            gap,
            interactive_ticks,
            output,
        } => {
            let scenario = match scenario {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
                    serde_json::from_str::<Scenario>(&text)
                        .map_err(|e| CliError::Input(format!("invalid scenario file: {e}")))?
                }
                None => {
                    let params: serde_json::Value = serde_json::from_str(&params)
                        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
                    let mut s = Scenario::new(width, height, seed);
                    s.ticks = ticks;
                    s.params = params;
                    s
                }
            };
            scenario.validate()?;

            let mut sim = Simulation::from_scenario(&scenario)?;
            let bounds = sim.bounds();

            let home_points = match homes {
                Some(path) => read_homes(&path)?,
                None => {
                    if !(gap > 0.0 && gap.is_finite()) {
                        return Err(CliError::Input(format!("invalid --gap {gap}: must be > 0")));
                    }
                    silhouette::banded_homes(&bounds, gap)
                }
            };
            sim.seed_text(&home_points);

            for tick in 0..scenario.ticks {
                let now = tick as f64 * TICK_MS;
                if tick < interactive_ticks {
                    // Diagonal sweep across the canvas.
                    let progress = tick as f64 / interactive_ticks as f64;
                    sim.pointer_moved(
                        progress * bounds.width(),
                        progress * bounds.height(),
                        now,
                    );
                }
                sim.tick(now);
            }

            let frame = sim.frame();
            glyphdust_snapshot::snapshot::write_png(&frame, &bounds, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": bounds.width(),
                    "height": bounds.height(),
                    "ticks": scenario.ticks,
                    "seed": scenario.seed,
                    "text_particles": home_points.len(),
                    "idle": sim.idle(scenario.ticks.saturating_sub(1) as f64 * TICK_MS),
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {}x{} ({} ticks, seed {}, {} text particles) -> {}",
                    bounds.width(),
                    bounds.height(),
                    scenario.ticks,
                    scenario.seed,
                    home_points.len(),
                    output.display()
                );
            }
        }
    }

    Ok(())
}

/// Reads a homes file: a JSON array of `[x, y]` pairs.
fn read_homes(path: &std::path::Path) -> Result<Vec<DVec2>, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid homes file: {e}")))?;
    Ok(pairs.into_iter().map(|[x, y]| DVec2::new(x, y)).collect())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
