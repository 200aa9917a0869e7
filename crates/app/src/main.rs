use anyhow::Context;

use assetdesk_infra::{AppConfig, EntityStore};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("reading configuration")?;
    assetdesk_observability::init(&config.log_filter);

    let store = EntityStore::from_config(&config).context("loading sample data")?;
    tracing::info!(
        seeded = config.seed_sample_data,
        assets = store.assets().len(),
        movements = store.movements().len(),
        disposals = store.disposals().len(),
        employees = store.reference().employees().len(),
        departments = store.reference().departments().len(),
        conditions = store.reference().conditions().len(),
        "asset store ready"
    );

    let json = serde_json::to_string_pretty(&store.snapshot()).context("serializing snapshot")?;
    println!("{json}");
    Ok(())
}
