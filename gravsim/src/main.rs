use gravsim::{bench_tick, run_headless, Engine, Preset, RandomSpec, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::path::PathBuf;

/// 2D gravitational N-body simulator with disc collisions
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Scenario YAML file; names not found as given are looked up in scenarios/
    #[arg(short, long, conflicts_with = "preset")]
    file: Option<PathBuf>,
    /// Built-in scenario, used when no file is given
    #[arg(short, long, value_enum, default_value_t = Preset::MutualOrbit)]
    preset: Preset,
    /// Number of bodies for the random preset
    #[arg(long, default_value_t = 4)]
    count: usize,
    /// Seed for the random preset
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Step size for presets in headless mode
    #[arg(long, default_value_t = 0.01)]
    dt: f64,
    /// Simulated time for presets in headless mode
    #[arg(long, default_value_t = 10.0)]
    t_end: f64,
    /// Run without a window
    #[arg(long, default_value_t = false)]
    headless: bool,
    /// Time tick() for growing body counts and exit
    #[arg(long, default_value_t = false)]
    bench: bool,
}

fn resolve_scenario_path(path: PathBuf) -> PathBuf {
    if path.exists() {
        return path;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(path)
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<Scenario> {
    match &args.file {
        Some(file) => {
            let path = resolve_scenario_path(file.clone());
            let cfg = ScenarioConfig::from_path(&path)
                .with_context(|| format!("failed to load scenario {}", path.display()))?;
            Ok(Scenario::build_scenario(&cfg)?)
        }
        None => {
            let random = RandomSpec {
                count: args.count,
                seed: args.seed,
                ..RandomSpec::default()
            };
            let engine = Engine::new(args.dt, args.t_end, 100)?;
            Ok(Scenario::from_preset(args.preset, &random, engine))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let windowed = cfg!(feature = "viewer") && !args.headless && !args.bench;

    // the viewer installs its own log subscriber
    if !windowed {
        env_logger::init();
    }

    if args.bench {
        bench_tick();
        return Ok(());
    }

    let mut scenario = load_scenario(&args)?;

    #[cfg(feature = "viewer")]
    if windowed {
        gravsim::run_2d(scenario);
        return Ok(());
    }

    let report = run_headless(&mut scenario).context("simulation failed")?;
    info!("initial: {}", report.initial);
    info!("final:   {}", report.last);
    println!(
        "{} steps, t = {:.4}, energy {:.6} -> {:.6}",
        report.steps,
        report.elapsed,
        report.initial.total_energy(),
        report.last.total_energy()
    );

    Ok(())
}
