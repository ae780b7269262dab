use serde::{Deserialize, Serialize};

use super::number::{null_as_default, string_or_number};
use super::UtcDateTime;
use crate::ValidationError;

/// Harvester reporting into a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Miner {
    #[serde(rename = "miner_name", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub online: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub update_time: i64,
}

impl Miner {
    pub fn updated_at(&self) -> Result<UtcDateTime, ValidationError> {
        UtcDateTime::from_unix_seconds(self.update_time)
    }
}

/// Plot file registered with a pool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plot {
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub public_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub size: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: i64,
}

impl Plot {
    pub fn updated_at_utc(&self) -> Result<UtcDateTime, ValidationError> {
        UtcDateTime::from_unix_seconds(self.updated_at)
    }
}

/// One mining-income ledger entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningIncome {
    #[serde(deserialize_with = "string_or_number")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub coin: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub record_time: i64,
}

impl MiningIncome {
    pub fn recorded_at(&self) -> Result<UtcDateTime, ValidationError> {
        UtcDateTime::from_unix_seconds(self.record_time)
    }
}

/// Per-coin account balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assets {
    #[serde(deserialize_with = "string_or_number")]
    pub balance: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub cooperation_amount: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub deposit_amount: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub freeze_balance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "string_or_number")]
    pub total_assets: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub withdraw_amount: f64,
}
