//! # Domain Models
//!
//! Records returned by the pool API. All of them are plain value objects
//! built fresh from each response.
//!
//! | Type | Endpoint |
//! |------|----------|
//! | [`Pool`] | `pool/list`, `pool/detail` |
//! | [`Miner`] | `pool/miner` |
//! | [`Plot`] | `pool/GetPlots` |
//! | [`MiningIncome`] | `pool/miningincomerecord` |
//! | [`Assets`] | `assets/totalassets` |
//! | [`PoolType`] | selector for `pool/list` |
//!
//! ## Numeric fields
//!
//! The API encodes most balances as decimal strings and a few as JSON
//! numbers. Fields the API declares as strings go through
//! [`string_or_number`], which accepts both; the remaining numeric fields
//! accept native numbers only.
//!
//! Every other field goes through [`null_as_default`], so an explicit `null`
//! reads the same as a missing field.

mod models;
mod number;
mod pool;
mod timestamp;

pub use models::{Assets, Miner, MiningIncome, Plot};
pub use number::{null_as_default, string_or_number};
pub use pool::{Pool, PoolType};
pub use timestamp::UtcDateTime;
