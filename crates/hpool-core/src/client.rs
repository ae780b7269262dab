//! Typed accessors for the pool API.
//!
//! Every accessor follows the same steps: build the query parameters, send a
//! signed GET through the [`Transport`], unwrap the envelope and decode the
//! payload in the shape that endpoint returns.
//!
//! | Method | Path | Shape |
//! |--------|------|-------|
//! | [`HpoolClient::pool_list`] | `pool/list` | list of [`Pool`] |
//! | [`HpoolClient::pool_detail`] | `pool/detail` | single [`Pool`] |
//! | [`HpoolClient::miners`] | `pool/miner` | list of [`Miner`] |
//! | [`HpoolClient::plots`] | `pool/GetPlots` | list of [`Plot`] |
//! | [`HpoolClient::mining_income`] | `pool/miningincomerecord` | list of [`MiningIncome`] |
//! | [`HpoolClient::total_assets`] | `assets/totalassets` | list of [`Assets`] |
//!
//! Pagination is fixed at the first page (and 100 records where the endpoint
//! takes a count). Identifiers are sent as given; the server rejects bad ones.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::envelope::{decode_list, decode_object};
use crate::http_client::{HttpClient, HttpMethod, ReqwestHttpClient};
use crate::transport::Transport;
use crate::{Assets, HpoolError, Miner, MiningIncome, Plot, Pool, PoolType, ValidationError};

const FIRST_PAGE: &str = "1";
const PAGE_SIZE: &str = "100";

/// Client for the pool API. Cheap to share behind an `Arc`; calls only take
/// `&self`.
#[derive(Debug)]
pub struct HpoolClient {
    transport: Transport,
}

impl HpoolClient {
    /// Client against the public endpoint with the default timeout.
    pub fn new(access_token: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self::from_config(ClientConfig::new(access_token)?))
    }

    /// Client that sends through a caller-configured reqwest client. Its
    /// timeout, if any, is left in force; no per-request timeout is added.
    pub fn with_http_client(
        access_token: impl Into<String>,
        http_client: reqwest::Client,
    ) -> Result<Self, ValidationError> {
        let transport = Transport::new(
            ClientConfig::new(access_token)?,
            Arc::new(ReqwestHttpClient::with_client(http_client)),
        );
        Ok(Self {
            transport: transport.without_timeout(),
        })
    }

    /// Client with a fixed request timeout.
    pub fn with_timeout(
        access_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ValidationError> {
        Ok(Self::from_config(
            ClientConfig::new(access_token)?.with_timeout(timeout)?,
        ))
    }

    pub fn from_config(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestHttpClient::new()))
    }

    /// Client over any [`HttpClient`], e.g. a mock endpoint in tests.
    pub fn with_transport(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            transport: Transport::new(config, http_client),
        }
    }

    /// Enables or disables request/response dumps for subsequent calls.
    pub fn set_debug(&self, enable: bool) {
        self.transport.set_debug(enable);
    }

    pub fn debug_enabled(&self) -> bool {
        self.transport.debug_enabled()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub async fn pool_list(&self, pool_type: PoolType) -> Result<Vec<Pool>, HpoolError> {
        let params = params([("type", pool_type.as_str())]);
        self.fetch_list("pool/list", params).await
    }

    pub async fn pool_detail(&self, pool: &str) -> Result<Pool, HpoolError> {
        let params = params([("type", pool), ("page", FIRST_PAGE)]);
        self.fetch_object("pool/detail", params).await
    }

    pub async fn miners(&self, pool: &str) -> Result<Vec<Miner>, HpoolError> {
        let params = params([("type", pool), ("page", FIRST_PAGE)]);
        self.fetch_list("pool/miner", params).await
    }

    pub async fn plots(&self, pool: &str) -> Result<Vec<Plot>, HpoolError> {
        let params = params([("pool", pool), ("page", FIRST_PAGE), ("count", PAGE_SIZE)]);
        self.fetch_list("pool/GetPlots", params).await
    }

    pub async fn mining_income(&self, pool: &str) -> Result<Vec<MiningIncome>, HpoolError> {
        let params = params([("type", pool), ("page", FIRST_PAGE), ("count", PAGE_SIZE)]);
        self.fetch_list("pool/miningincomerecord", params).await
    }

    pub async fn total_assets(&self) -> Result<Vec<Assets>, HpoolError> {
        self.fetch_list("assets/totalassets", BTreeMap::new()).await
    }

    async fn fetch_object<T>(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> Result<T, HpoolError>
    where
        T: DeserializeOwned,
    {
        let body = self
            .transport
            .call(HttpMethod::Get, path, params, true)
            .await?;
        decode_object(&body)
    }

    async fn fetch_list<T>(
        &self,
        path: &str,
        params: BTreeMap<String, String>,
    ) -> Result<Vec<T>, HpoolError>
    where
        T: DeserializeOwned,
    {
        let body = self
            .transport
            .call(HttpMethod::Get, path, params, true)
            .await?;
        decode_list(&body)
    }
}

fn params<const N: usize>(pairs: [(&str, &str); N]) -> BTreeMap<String, String> {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .collect()
}
