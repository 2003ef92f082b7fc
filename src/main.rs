use planetsim::{Camera, Scenario, ScenarioConfig, ViewController};
use planetsim::{bench_gravity, bench_verlet};

use anyhow::Result;
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless driver: run the planetary simulation for a number of ticks and
/// report per-body anchor distances. Rendering lives elsewhere; this binary
/// only exercises the core.
#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML file; the builtin solar-system preset when omitted
    #[arg(short, long)]
    file_name: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 8760)]
    ticks: u64,

    /// Run the timing benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn load_scenario(path: &PathBuf) -> Result<Scenario> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
    Ok(Scenario::build(cfg)?)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_verlet();
        return Ok(());
    }

    let scenario = match &args.file_name {
        Some(path) => load_scenario(path)?,
        None => Scenario::solar_system(),
    };

    let camera = Camera::new(&scenario.parameters);
    let mut controller = ViewController::new(camera);
    let mut sim = scenario.into_simulation();

    info!("running {} ticks over {} bodies", args.ticks, sim.bodies().len());
    for _ in 0..args.ticks {
        sim.tick()?;
        controller.update(&sim);
    }

    let display = controller.display_info(&sim);
    info!(
        "done: t = {:.0} s, zoom {:.1}x, time {:.1}x",
        sim.elapsed(),
        display.zoom_ratio,
        display.time_multiplier
    );
    for body in controller.render_bodies(&sim) {
        if body.is_anchor {
            continue;
        }
        println!("{:8}  {:10.1} Gm from anchor", body.name, body.distance_to_anchor_gm);
    }

    Ok(())
}
