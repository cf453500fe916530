mod occupancy;
mod parking;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "parkfind-cli")]
#[command(about = "Find paid public car parkings from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Nearest paid public parking to a point
    Nearest {
        /// Request point as "lat, lon" (e.g. "55.741834, 37.630808")
        coordinates: String,
        /// Search radius in meters (defaults to PARKFIND_DEFAULT_RADIUS)
        #[arg(long)]
        radius: Option<u32>,
        /// Number of candidates to fetch (defaults to PARKFIND_DEFAULT_LIMIT)
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Resolve one parking by its 2GIS catalog id
    Lookup {
        /// Catalog item id
        id: String,
    },
    /// Estimate how likely a parking is to be full
    Occupancy {
        /// Price in rubles per hour
        #[arg(long)]
        cost: f64,
        /// Distance to the city center in kilometers
        #[arg(long)]
        distance: f64,
        /// Number of parking spaces
        #[arg(long)]
        spots: i64,
        /// Local hour 0-23 (defaults to the current hour)
        #[arg(long)]
        hour: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    // Logs go to stderr; stdout carries only the JSON result.
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("warn"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Nearest {
            coordinates,
            radius,
            limit,
        } => parking::run_nearest(&coordinates, radius, limit).await?,
        Commands::Lookup { id } => parking::run_lookup(&id).await?,
        Commands::Occupancy {
            cost,
            distance,
            spots,
            hour,
        } => occupancy::run_occupancy(cost, distance, spots, hour)?,
    }

    Ok(())
}

/// Pretty-prints `value` as JSON on stdout.
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests;
