//! Response envelope decoding.
//!
//! Every response is `{code, message, data}`. Decoding happens in two stages:
//! the envelope is parsed with `data` kept as raw JSON, then the call site
//! picks the shape `data` is decoded into. The shape depends on which
//! endpoint was called, not on the bytes.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::value::RawValue;

use crate::error::DecodeStage;
use crate::HpoolError;

/// Envelope code signalling success.
pub const SUCCESS_CODE: i64 = 200;

/// Outer wrapper shared by every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
}

impl Envelope {
    pub fn parse(body: &str) -> Result<Self, HpoolError> {
        serde_json::from_str(body).map_err(|e| HpoolError::decode(DecodeStage::Envelope, e))
    }

    /// Returns the raw `data` payload when `code` is a success, otherwise the
    /// vendor message as an application error.
    pub fn into_data(self) -> Result<Box<RawValue>, HpoolError> {
        if self.code != SUCCESS_CODE {
            return Err(HpoolError::Api {
                code: self.code,
                message: self.message.unwrap_or_default(),
            });
        }

        match self.data {
            Some(data) => Ok(data),
            None => null_payload(),
        }
    }
}

/// Intermediate wrapper used by plural endpoints. `total` is what the server
/// reports; it is never used to truncate or validate `list`. A `null` list
/// means no elements.
#[derive(Debug, Deserialize)]
pub struct ListData {
    #[serde(default)]
    pub total: i64,
    pub list: Box<RawValue>,
}

/// Decodes a direct-object response.
pub fn decode_object<T>(body: &str) -> Result<T, HpoolError>
where
    T: DeserializeOwned,
{
    let data = Envelope::parse(body)?.into_data()?;
    serde_json::from_str(data.get()).map_err(|e| HpoolError::decode(DecodeStage::Data, e))
}

/// Decodes a `{total, list}` response into its list.
pub fn decode_list<T>(body: &str) -> Result<Vec<T>, HpoolError>
where
    T: DeserializeOwned,
{
    let data = Envelope::parse(body)?.into_data()?;
    let list_data: ListData = serde_json::from_str(data.get())
        .map_err(|e| HpoolError::decode(DecodeStage::Data, e))?;
    let list = list_data.list.get();
    if list.trim() == "null" {
        return Ok(Vec::new());
    }
    serde_json::from_str(list).map_err(|e| HpoolError::decode(DecodeStage::List, e))
}

fn null_payload() -> Result<Box<RawValue>, HpoolError> {
    RawValue::from_string(String::from("null"))
        .map_err(|e| HpoolError::decode(DecodeStage::Envelope, e))
}
