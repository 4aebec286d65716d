use std::sync::Arc;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use serde::Serialize;
use uuid::Uuid;

use business::domain::shopping::use_cases::aggregate_demand::AggregateDemandParams;
use business::domain::shopping::use_cases::allocate_cooking_groups::AllocateCookingGroupsParams;
use business::domain::shopping::use_cases::group_by_category::GroupShoppingListParams;
use business::domain::shopping::use_cases::plan_purchases::PlanPurchasesParams;
use persistence::store::load_snapshot;

mod config {
    pub mod app_config;
    pub mod planner_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod render;
}

use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;
use setup::render;

/// Camp catering planner: demand, shopping lists and purchase trips
#[derive(Parser)]
#[command(name = "planner")]
#[command(about = "Computes shopping demand and purchase trips for an event", long_about = None)]
struct Cli {
    /// Event snapshot to read (overrides PLANNER_SNAPSHOT_PATH)
    #[arg(long, global = true)]
    snapshot: Option<String>,

    /// Event to plan (defaults to the event exported in the snapshot)
    #[arg(long, global = true)]
    event: Option<Uuid>,

    /// Reference date for participant ages (defaults to today)
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregated demand for the whole event
    Demand {
        /// Portion multiplier replacing the per-recipe eater count
        #[arg(long)]
        multiplier: Option<f64>,
    },
    /// Shopping list grouped by ingredient category
    Categories,
    /// Demand per cooking group for one day
    Groups {
        #[arg(long)]
        day: NaiveDate,
    },
    /// Purchase trips with shelf-life-aware scheduling
    Plan,
}

fn print<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => print!("{}", text(value)),
    }
    Ok(())
}

/// Planner CLI Entry Point
///
/// Loads configuration, reads the event snapshot, wires dependencies and
/// runs one use case. Results go to stdout, logs to stderr.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env().with_snapshot_override(cli.snapshot.clone());

    // 4. Read snapshot
    let store = load_snapshot(&config.snapshot_path)
        .await
        .with_context(|| format!("failed to load snapshot {}", config.snapshot_path))?;
    let store = Arc::new(store);
    let event_id = cli.event.unwrap_or_else(|| store.event_id());
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());

    // 5. Wire dependencies
    let container = DependencyContainer::new(store, config.planner);

    // 6. Run command
    match cli.command {
        Commands::Demand { multiplier } => {
            let lines = container
                .aggregate_demand
                .execute(AggregateDemandParams {
                    event_id,
                    today,
                    multiplier_override: multiplier,
                })
                .await?;
            print(cli.format, &lines, |lines| render::demand_text(lines))?;
        }
        Commands::Categories => {
            let groups = container
                .group_shopping_list
                .execute(GroupShoppingListParams { event_id, today })
                .await?;
            print(cli.format, &groups, |groups| render::categories_text(groups))?;
        }
        Commands::Groups { day } => {
            let groups = container
                .allocate_cooking_groups
                .execute(AllocateCookingGroupsParams {
                    event_id,
                    day,
                    today,
                })
                .await?;
            print(cli.format, &groups, |groups| render::groups_text(groups))?;
        }
        Commands::Plan => {
            let plan = container
                .plan_purchases
                .execute(PlanPurchasesParams { event_id, today })
                .await?;
            print(cli.format, &plan, render::plan_text)?;
        }
    }

    Ok(())
}
