use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::number::{null_as_default, string_or_number};
use crate::ValidationError;

/// Selector for the pool-list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoolType {
    /// Pools the account has opened.
    Opened,
    /// Every pool offered by the service.
    All,
}

impl PoolType {
    /// Query-string token sent as the `type` parameter.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opened => "opened",
            Self::All => "all",
        }
    }
}

impl Display for PoolType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PoolType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "opened" => Ok(Self::Opened),
            "all" => Ok(Self::All),
            other => Err(ValidationError::InvalidPoolType {
                value: other.to_owned(),
            }),
        }
    }
}

/// Pool summary as returned by `pool/list` and `pool/detail`.
///
/// Balances arrive as decimal strings except `fee`, which is a JSON number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pool {
    #[serde(deserialize_with = "null_as_default")]
    pub api_key: String,
    #[serde(deserialize_with = "string_or_number")]
    pub block_reward: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub block_time: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub capacity: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub coin: String,
    #[serde(deserialize_with = "string_or_number")]
    pub deposit_mortgage_balance: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub deposit_mortgage_effective_balance: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub deposit_mortgage_free_balance: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub deposit_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub fee: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub loan_mortgage_balance: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub mortgage: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub offline: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub online: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_time: String,
    #[serde(deserialize_with = "string_or_number")]
    pub point_deposit_balance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pool_address: String,
    #[serde(deserialize_with = "string_or_number")]
    pub pool_income: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pool_type: String,
    #[serde(deserialize_with = "string_or_number")]
    pub previous_income_pb: f64,
    #[serde(deserialize_with = "string_or_number")]
    pub theory_mortgage_balance: f64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "string_or_number")]
    pub undistributed_income: f64,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn pool_type_tokens() {
        assert_eq!(PoolType::Opened.as_str(), "opened");
        assert_eq!(PoolType::All.as_str(), "all");
        assert_eq!(PoolType::All.to_string(), "all");
    }

    #[test]
    fn pool_type_parses_case_insensitively() {
        assert_eq!(PoolType::from_str(" Opened "), Ok(PoolType::Opened));
        let err = PoolType::from_str("closed").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidPoolType { .. }));
    }

    #[test]
    fn pool_decodes_mixed_string_and_number_fields() {
        let pool: Pool = serde_json::from_value(json!({
            "api_key": "k-1",
            "block_reward": "2.0",
            "block_time": 18,
            "capacity": 1024,
            "coin": "chia",
            "deposit_mortgage_balance": "1.5",
            "deposit_rate": 0.25,
            "fee": 0.01,
            "name": "HPool-Chia",
            "offline": 1,
            "online": 4,
            "payment_time": "10:00",
            "pool_income": "33.125",
            "type": "chia",
            "undistributed_income": "0"
        }))
        .expect("must decode");

        assert_eq!(pool.api_key, "k-1");
        assert_eq!(pool.block_reward, 2.0);
        assert_eq!(pool.deposit_mortgage_balance, 1.5);
        assert_eq!(pool.deposit_rate, 0.25);
        assert_eq!(pool.fee, 0.01);
        assert_eq!(pool.pool_income, 33.125);
        assert_eq!(pool.kind, "chia");
        assert_eq!(pool.online, 4);
        assert_eq!(pool.mortgage, 0.0);
    }

    #[test]
    fn pool_null_fields_decode_as_defaults() {
        let pool: Pool = serde_json::from_value(json!({
            "api_key": null,
            "pool_address": null,
            "capacity": null,
            "fee": null,
            "type": null,
            "name": "HPool-Chia",
            "pool_income": null
        }))
        .expect("must decode");

        assert_eq!(pool.api_key, "");
        assert_eq!(pool.pool_address, "");
        assert_eq!(pool.capacity, 0);
        assert_eq!(pool.fee, 0.0);
        assert_eq!(pool.kind, "");
        assert_eq!(pool.name, "HPool-Chia");
        assert_eq!(pool.pool_income, 0.0);
    }

    #[test]
    fn pool_fee_must_be_a_number() {
        let result = serde_json::from_value::<Pool>(json!({"fee": "0.01"}));
        assert!(result.is_err());
    }

    #[test]
    fn pool_serializes_with_wire_names() {
        let pool = Pool {
            kind: String::from("chia"),
            ..Pool::default()
        };
        let value = serde_json::to_value(&pool).expect("must serialize");
        assert_eq!(value["type"], "chia");
        assert!(value.get("kind").is_none());
    }
}
