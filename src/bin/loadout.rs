//! Command-line front end: loads a catalog, runs one search, prints the
//! top-ranked loadouts.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use u_loadout::catalog::{load_catalog_from_path, Slot};
use u_loadout::filter::AvailabilityFilter;
use u_loadout::report::render_report;
use u_loadout::scoring::Dimension;
use u_loadout::search::{SearchRequest, SearchRunner, WeightClass};
use u_loadout::LoadoutError;

/// Find the best armor combinations that keep you under a roll threshold
#[derive(Parser, Debug)]
#[command(name = "loadout", version)]
#[command(about = "Ranks armor combinations by chosen stats under a weight-class ceiling")]
struct Args {
    /// Path to the JSON armor catalog
    #[arg(long, default_value = "data/armor.json")]
    catalog: PathBuf,

    /// Maximum equip load
    #[arg(long)]
    max_load: f64,

    /// Equip load already carried, excluding armor
    #[arg(long, default_value_t = 0.0)]
    current_load: f64,

    /// Slots to fill, comma separated (head, torso, hands, legs)
    #[arg(long, value_delimiter = ',', default_value = "head,torso,hands,legs")]
    slots: Vec<Slot>,

    /// Weight class to stay under (light, medium, heavy)
    #[arg(long, default_value = "medium")]
    weight_class: WeightClass,

    /// Stats to rank by in priority order, comma separated
    #[arg(long, value_delimiter = ',', default_value = "poise", value_parser = known_dimension)]
    dimensions: Vec<String>,

    /// Number of top combinations to show
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..=100))]
    top: u16,

    /// Availability tag to restrict to, or "all"
    #[arg(long, default_value = "all")]
    availability: String,

    /// Stop after evaluating this many assignments (0 = no limit)
    #[arg(long, default_value_t = 0)]
    max_evaluations: usize,

    /// Log level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, default_value = "warn")]
    log_level: String,
}

/// Rejects unknown dimension names but keeps the spelling for display.
fn known_dimension(name: &str) -> Result<String, LoadoutError> {
    name.parse::<Dimension>()?;
    Ok(name.trim().to_string())
}

fn init_tracing(log_level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("u_loadout={log_level},loadout={log_level}")));
    fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let catalog = load_catalog_from_path(&args.catalog)
        .with_context(|| format!("loading {}", args.catalog.display()))?;
    info!(items = catalog.len(), path = %args.catalog.display(), "catalog loaded");

    let request = SearchRequest::default()
        .with_max_capacity(args.max_load)
        .with_carried_load(args.current_load)
        .with_slots(args.slots)
        .with_weight_class(args.weight_class)
        .with_dimension_names(&args.dimensions)
        .with_availability(AvailabilityFilter::new(&args.availability))
        .with_max_evaluations(args.max_evaluations);

    let report = SearchRunner::run_ranked(&catalog, &request).context("running search")?;
    info!(
        evaluated = report.evaluated,
        admissible = report.len(),
        "search complete"
    );

    print!("{}", render_report(&report, &request, usize::from(args.top)));
    Ok(())
}
