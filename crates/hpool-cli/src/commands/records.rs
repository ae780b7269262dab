use hpool_core::{HpoolClient, Miner, MiningIncome, Plot, UtcDateTime};
use serde::Serialize;
use serde_json::Value;

use crate::cli::PoolArgs;
use crate::error::CliError;

/// Record plus its unix timestamp rendered as RFC3339. Out-of-range
/// timestamps are left out rather than failing the whole listing.
#[derive(Debug, Serialize)]
struct Timestamped<'a, T> {
    #[serde(flatten)]
    record: &'a T,
    #[serde(skip_serializing_if = "Option::is_none")]
    at: Option<UtcDateTime>,
}

fn timestamped<'a, T, F>(records: &'a [T], at: F) -> Vec<Timestamped<'a, T>>
where
    F: Fn(&T) -> Option<UtcDateTime>,
{
    records
        .iter()
        .map(|record| Timestamped {
            record,
            at: at(record),
        })
        .collect()
}

pub async fn miners(client: &HpoolClient, args: &PoolArgs) -> Result<Value, CliError> {
    let miners = client.miners(&args.pool).await?;
    let rows = timestamped(&miners, |m: &Miner| m.updated_at().ok());
    Ok(serde_json::to_value(rows)?)
}

pub async fn plots(client: &HpoolClient, args: &PoolArgs) -> Result<Value, CliError> {
    let plots = client.plots(&args.pool).await?;
    let rows = timestamped(&plots, |p: &Plot| p.updated_at_utc().ok());
    Ok(serde_json::to_value(rows)?)
}

pub async fn income(client: &HpoolClient, args: &PoolArgs) -> Result<Value, CliError> {
    let incomes = client.mining_income(&args.pool).await?;
    let rows = timestamped(&incomes, |i: &MiningIncome| i.recorded_at().ok());
    Ok(serde_json::to_value(rows)?)
}

pub async fn assets(client: &HpoolClient) -> Result<Value, CliError> {
    let assets = client.total_assets().await?;
    Ok(serde_json::to_value(assets)?)
}
