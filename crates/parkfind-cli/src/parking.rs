//! `nearest` and `lookup` command handlers.
//!
//! Both load the process configuration first, so `DGIS_API_KEY` must be set.

use anyhow::Context;
use parkfind_resolver::ParkingResolver;

fn build_resolver() -> anyhow::Result<ParkingResolver> {
    let config = parkfind_core::load_app_config().context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    ParkingResolver::from_config(&config).context("failed to build 2GIS client")
}

pub(crate) async fn run_nearest(
    coordinates: &str,
    radius: Option<u32>,
    limit: Option<u32>,
) -> anyhow::Result<()> {
    let resolver = build_resolver()?;
    let nearest = resolver
        .find_nearest(coordinates, radius, limit)
        .await
        .with_context(|| format!("no parking resolved for \"{coordinates}\""))?;
    crate::print_json(&nearest)
}

pub(crate) async fn run_lookup(id: &str) -> anyhow::Result<()> {
    let resolver = build_resolver()?;
    let parking = resolver
        .find_by_id(id)
        .await
        .with_context(|| format!("parking {id} could not be resolved"))?;
    crate::print_json(&parking)
}
