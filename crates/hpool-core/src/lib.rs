//! # HPool Core
//!
//! Typed async client for the HPool mining-pool REST API.
//!
//! ## Overview
//!
//! - **Transport** that signs requests with the account access token
//! - **Envelope decoder** that unwraps `{code, message, data}` responses
//! - **Domain records** for pools, miners, plots, income and assets
//! - **Accessors** on [`HpoolClient`], one per endpoint
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | [`HpoolClient`] and its accessors |
//! | [`config`] | Base url, token, timeout and env loading |
//! | [`domain`] | Records and the [`PoolType`] selector |
//! | [`envelope`] | Two-stage envelope decoding |
//! | [`error`] | [`HpoolError`] and [`ValidationError`] |
//! | [`http_client`] | HTTP abstraction and the reqwest backend |
//! | [`transport`] | Signed request dispatch and debug dumps |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hpool_core::{HpoolClient, PoolType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HpoolClient::new("my-access-token")?;
//!
//!     for pool in client.pool_list(PoolType::Opened).await? {
//!         println!("{}: {} online", pool.name, pool.online);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use hpool_core::HpoolError;
//!
//! fn describe(error: &HpoolError) -> String {
//!     match error {
//!         HpoolError::Api { message, .. } => format!("rejected by pool: {message}"),
//!         HpoolError::Decode { stage, .. } => format!("unexpected {stage} payload"),
//!         HpoolError::Transport(inner) => format!("network: {inner}"),
//!         other => other.to_string(),
//!     }
//! }
//! ```
//!
//! Nothing is retried; every error goes straight back to the caller.

pub mod client;
pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod http_client;
pub mod transport;

pub use client::HpoolClient;
pub use config::ClientConfig;
pub use domain::{Assets, Miner, MiningIncome, Plot, Pool, PoolType, UtcDateTime};
pub use envelope::{decode_list, decode_object, Envelope, ListData};
pub use error::{DecodeStage, HpoolError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, ReqwestHttpClient,
};
pub use transport::Transport;
