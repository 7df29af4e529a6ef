use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use route_planner::config::Config;
use route_planner::graph::EdgeIndex;
use route_planner::report::{LetterMapping, RouteReport};
use route_planner::route::{DeadEndPolicy, Scheduler};
use route_planner::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "Route Planner Contributors")]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build every route in an edge list and report the fastest one
    Run {
        /// Edge list file
        edges: PathBuf,
        #[clap(short, long)]
        config: Option<PathBuf>,
        #[clap(long)]
        origin: Option<String>,
        #[clap(long)]
        destination: Option<String>,
        #[clap(long, value_enum)]
        dead_end: Option<DeadEndPolicy>,
        #[clap(long)]
        max_rounds: Option<usize>,
    },
    /// Write the default configuration as TOML
    InitConfig {
        #[clap(default_value = "route-planner.toml")]
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            edges,
            config,
            origin,
            destination,
            dead_end,
            max_rounds,
        } => {
            let mut config = match config {
                Some(path) => Config::load(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => Config::default(),
            };
            if let Some(origin) = origin {
                config.route.origin = origin;
            }
            if let Some(destination) = destination {
                config.route.destination = destination;
            }
            if let Some(policy) = dead_end {
                config.route.dead_end = policy;
            }
            if max_rounds.is_some() {
                config.route.max_rounds = max_rounds;
            }

            logging::init(&config.log)?;
            let result = run(&edges, &config);
            logging::shutdown();
            result?;
        }
        Command::InitConfig { path } => {
            Config::default()
                .save(&path)
                .with_context(|| format!("failed to write config {}", path.display()))?;
            println!("Default configuration written to {}", path.display());
        }
    }

    Ok(())
}

fn run(edges: &Path, config: &Config) -> Result<()> {
    let index = EdgeIndex::load(edges, config.input.header_lines)
        .with_context(|| format!("failed to load edges from {}", edges.display()))?;
    log::info!("已加载 {} 条边", index.len());

    let mut scheduler = Scheduler::from_config(&index, &config.route);
    scheduler.run()?;

    let letters = LetterMapping::from(&config.letters);
    let report = RouteReport::build(scheduler.registry(), &letters)?;
    print!("{}", report);
    Ok(())
}
