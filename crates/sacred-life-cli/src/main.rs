use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use sacred_life_core::config::SimConfig;
use sacred_life_core::world::World;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

const WARMUP_TICKS: usize = 10;
const BENCHMARK_TICKS: usize = 200;
const TARGET_TPS: f64 = 500.0;

#[derive(Parser)]
#[command(name = "sacred-life")]
#[command(about = "Sacred Life simulation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a headless simulation from a config file
    Run {
        /// Path to config file (JSON)
        #[arg(long)]
        config: PathBuf,

        /// Output directory for the run summary (optional)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Number of full ticks to run
        #[arg(long, default_value_t = 1000)]
        ticks: usize,

        /// Number of randomly placed ants
        #[arg(long, default_value_t = 5)]
        ants: usize,

        /// Initial live-cell density in [0, 1]
        #[arg(long, default_value_t = 0.25)]
        density: f64,
    },
    /// Run the performance benchmark suite
    Benchmark,
    /// Dump the default configuration to stdout
    DumpDefaultConfig,
}

#[derive(Serialize)]
struct RunSummary {
    generations: u64,
    width: usize,
    height: usize,
    live_cells: usize,
    ants_alive: usize,
    distinct_colors: usize,
}

fn summarize(world: &World) -> RunSummary {
    let colors: HashSet<_> = world.ants.iter().map(|a| a.color).collect();
    RunSummary {
        generations: world.generation(),
        width: world.grid.width(),
        height: world.grid.height(),
        live_cells: world.grid.live_cells(),
        ants_alive: world.ants.len(),
        distinct_colors: colors.len(),
    }
}

fn seed_world(config: &SimConfig, ants: usize, density: f64) -> Result<World> {
    let mut world = World::new(config).context("failed to initialize world")?;
    if density > 0.0 {
        world.randomize(density);
    }
    for _ in 0..ants {
        world.add_random_ant(config);
    }
    Ok(world)
}

fn run_benchmark(width: usize, height: usize, ants: usize, seed: u64) -> Result<()> {
    let config = SimConfig {
        width,
        height,
        structures_enabled: true,
        lifecycle_enabled: true,
        color_supremacy_enabled: true,
        seed,
        ..SimConfig::default()
    };
    config
        .validate()
        .context("benchmark config validation error")?;

    let mut world = seed_world(&config, ants, 0.25)?;

    for _ in 0..WARMUP_TICKS {
        world.tick(&config);
    }

    let start = Instant::now();
    for _ in 0..BENCHMARK_TICKS {
        world.tick(&config);
    }
    let elapsed = start.elapsed();

    let avg_tick_us = elapsed.as_micros() as f64 / BENCHMARK_TICKS as f64;
    let ticks_per_sec = 1_000_000.0 / avg_tick_us;
    let verdict = if ticks_per_sec >= TARGET_TPS {
        "GO"
    } else {
        "NO-GO"
    };

    println!("--- {width}x{height} grid, {ants} seed ants ---");
    println!("  Avg tick:  {avg_tick_us:.0} us ({ticks_per_sec:.1} ticks/sec)");
    println!("  Verdict:   {verdict} (target: >={TARGET_TPS} ticks/sec)");
    let summary = summarize(&world);
    println!(
        "  Final:     {} live cells, {} ants, {} colors",
        summary.live_cells, summary.ants_alive, summary.distinct_colors
    );
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::DumpDefaultConfig => {
            let config = SimConfig::default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Benchmark => {
            if cfg!(debug_assertions) {
                eprintln!("WARNING: running in debug mode. Results are not representative.");
                eprintln!("         Use: cargo run -p sacred-life-cli --release -- benchmark");
                eprintln!();
            }
            println!("=== Sacred Life benchmark ===");
            println!("Warmup: {WARMUP_TICKS} ticks, Benchmark: {BENCHMARK_TICKS} ticks");
            println!();
            for (width, height, ants) in [(50, 50, 5), (100, 100, 10), (200, 200, 20)] {
                run_benchmark(width, height, ants, 42)?;
            }
        }
        Commands::Run {
            config,
            out,
            ticks,
            ants,
            density,
        } => {
            ensure!(
                (0.0..=1.0).contains(&density),
                "density must be within [0, 1], got {density}"
            );
            let file = File::open(&config).context("failed to open config file")?;
            let reader = BufReader::new(file);
            let sim_config: SimConfig =
                serde_json::from_reader(reader).context("failed to parse config")?;
            sim_config.validate().context("config validation error")?;

            println!("Loaded config from {config:?}");
            println!("Simulating {ticks} ticks with {ants} ants...");

            let mut world = seed_world(&sim_config, ants, density)?;
            for _ in 0..ticks {
                world.tick(&sim_config);
            }

            let summary = summarize(&world);
            if let Some(out_dir) = out {
                std::fs::create_dir_all(&out_dir).context("failed to create output directory")?;
                let summary_path = out_dir.join("summary.json");
                let file = File::create(&summary_path).context("failed to create summary file")?;
                serde_json::to_writer_pretty(file, &summary).context("failed to write summary")?;
                println!("Run complete. Summary saved to {summary_path:?}");
            } else {
                println!(
                    "Run complete. Generation {}: {} live cells, {} ants alive.",
                    summary.generations, summary.live_cells, summary.ants_alive
                );
            }
        }
    }
    Ok(())
}
