use std::str::FromStr;

use hpool_core::{HpoolClient, PoolType};
use serde_json::Value;

use crate::cli::{PoolArgs, PoolsArgs};
use crate::error::CliError;

pub async fn list(client: &HpoolClient, args: &PoolsArgs) -> Result<Value, CliError> {
    let pool_type = PoolType::from_str(&args.pool_type)?;
    let pools = client.pool_list(pool_type).await?;
    tracing::debug!(pool_type = %pool_type, count = pools.len(), "pools fetched");
    Ok(serde_json::to_value(pools)?)
}

pub async fn detail(client: &HpoolClient, args: &PoolArgs) -> Result<Value, CliError> {
    let pool = client.pool_detail(&args.pool).await?;
    Ok(serde_json::to_value(pool)?)
}
