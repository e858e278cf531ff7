//! city: delivery routing demo for the courier workspace.
//!
//! Generates a random city, takes the first restaurant as the pickup and the
//! first customer as the drop-off, then routes between them with A* and with
//! greedy best-first search and prints both routes side by side.
//!
//! ```text
//! cargo run -p city -- --seed 7 --obstacles 40
//! cargo run -p city -- --config city.toml --heuristic manhattan
//! RUST_LOG=courier_search=debug cargo run -p city
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use courier_core::{Coord, ScenarioConfig, ScenarioRng};
use courier_grid::{CityGrid, generate};
use courier_search::{
    AStarPlanner, Comparison, GreedyPlanner, Heuristic, Planner, SearchLimits, SearchOutcome,
};

/// CLI arguments.  Flags override values from `--config`.
#[derive(Parser, Debug)]
#[command(name = "city")]
#[command(about = "Route a food delivery across a random city grid with A* and greedy search")]
struct Args {
    /// Scenario file (TOML, fields of ScenarioConfig)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Number of restaurants
    #[arg(long)]
    restaurants: Option<usize>,

    /// Number of customers
    #[arg(long)]
    customers: Option<usize>,

    /// Number of traffic cells
    #[arg(long)]
    traffic: Option<usize>,

    /// Number of obstacle cells
    #[arg(long)]
    obstacles: Option<usize>,

    /// RNG seed for scenario generation
    #[arg(long)]
    seed: Option<u64>,

    /// Goal-distance estimate: euclidean or manhattan
    #[arg(long, default_value = "euclidean")]
    heuristic: Heuristic,

    /// Give up after expanding this many cells
    #[arg(long)]
    max_expansions: Option<usize>,
}

impl Args {
    /// Start from the config file (or defaults) and apply CLI overrides.
    fn scenario(&self) -> Result<ScenarioConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))?
            }
            None => ScenarioConfig::default(),
        };

        if let Some(v) = self.width       { cfg.width = v; }
        if let Some(v) = self.height      { cfg.height = v; }
        if let Some(v) = self.restaurants { cfg.restaurants = v; }
        if let Some(v) = self.customers   { cfg.customers = v; }
        if let Some(v) = self.traffic     { cfg.traffic = v; }
        if let Some(v) = self.obstacles   { cfg.obstacles = v; }
        if let Some(v) = self.seed        { cfg.seed = v; }

        cfg.validate()?;
        Ok(cfg)
    }

    fn limits(&self) -> SearchLimits {
        SearchLimits { max_expansions: self.max_expansions }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let cfg = args.scenario()?;
    info!(
        width = cfg.width,
        height = cfg.height,
        seed = cfg.seed,
        heuristic = %args.heuristic,
        "building scenario"
    );

    let grid = generate(&cfg, &mut ScenarioRng::new(cfg.seed))?;

    let (Some(restaurant), Some(customer)) = (grid.restaurants().first(), grid.customers().first())
    else {
        bail!("scenario needs at least one restaurant and one customer");
    };
    let (start, goal) = (restaurant.pos, customer.pos);

    println!("=== city: courier delivery routing ===");
    println!("Delivery from {} to {}", restaurant.name, customer.name);
    println!("Start: {start} -> Goal: {goal}");
    println!();
    println!("City map:");
    print!("{grid}");

    let limits = args.limits();
    let optimal = run_planner(
        "A* Search",
        &AStarPlanner::new(args.heuristic).with_limits(limits),
        &grid,
        start,
        goal,
    )?;
    let greedy = run_planner(
        "Greedy Best-First Search",
        &GreedyPlanner::new(args.heuristic).with_limits(limits),
        &grid,
        start,
        goal,
    )?;

    println!();
    let comparison = Comparison { start, goal, optimal, greedy };
    print!("{comparison}");
    if let Some(gap) = comparison.cost_gap() {
        println!("Greedy route costs {gap} more than the optimal route");
    }

    Ok(())
}

fn run_planner(
    title:   &str,
    planner: &dyn Planner,
    grid:    &CityGrid,
    start:   Coord,
    goal:    Coord,
) -> Result<SearchOutcome> {
    println!();
    println!("--- {title} ---");
    let outcome = planner.search(grid, start, goal)?;
    print_outcome(grid, planner.name(), &outcome);
    Ok(outcome)
}

fn print_outcome(grid: &CityGrid, name: &str, outcome: &SearchOutcome) {
    match outcome.path() {
        Some(path) => {
            println!(
                "Found {} steps (cost {}), visited {} nodes, time {:.2} ms",
                path.len(),
                outcome.cost.unwrap_or_default(),
                outcome.visited,
                outcome.elapsed_ms,
            );
            print!("{}", grid.render(Some(path)));
        }
        None => {
            warn!(planner = name, status = %outcome.status, visited = outcome.visited, "no route");
            println!("No route found by {name} ({}).", outcome.status);
        }
    }
}
