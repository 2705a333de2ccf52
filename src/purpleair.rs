use std::fmt;

use serde::{Deserialize, Deserializer};
use thiserror::Error;
use tracing::debug;

use crate::error::{Error, Result};
use crate::http::{HttpClient, TransportError, Url, UrlParseError};

pub const DEFAULT_HOST: &str = "www.purpleair.com";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SensorId(String);

impl SensorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SensorId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        crate::id::deserialize_id(deserializer).map(SensorId)
    }
}

/// One PM2.5 concentration in µg/m³.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub sensor_id: SensorId,

    pub value: f64,
}

/// The stage at which fetching a reading went wrong.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed")]
    Transport(#[from] TransportError),

    #[error("unexpected HTTP status {status}")]
    Status { status: u16 },

    #[error("failed to decode response envelope")]
    Envelope(#[source] serde_json::Error),

    #[error("response contains no results")]
    NoResults,

    #[error("first result has no Stats field")]
    MissingStats,

    #[error("failed to decode Stats payload")]
    Stats(#[source] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    results: Vec<ChannelResult>,
}

#[derive(Debug, Deserialize)]
struct ChannelResult {
    // JSON object encoded as a string.
    #[serde(rename = "Stats")]
    stats: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Stats {
    v1: f64,
}

#[derive(Debug)]
pub struct PurpleAirClient<C> {
    http: C,
    endpoint: Url,
}

impl<C: HttpClient> PurpleAirClient<C> {
    pub fn new(http: C, host: &str) -> std::result::Result<Self, UrlParseError> {
        let endpoint = Url::parse(&format!("https://{host}/json"))?;

        Ok(Self { http, endpoint })
    }

    pub fn http(&self) -> &C {
        &self.http
    }

    /// The sensor id goes into the query string percent-encoded.
    pub fn reading_url(&self, sensor_id: &SensorId) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("show", sensor_id.as_str());
        url
    }

    pub async fn fetch_reading(&self, sensor_id: &SensorId) -> Result<Reading> {
        let value = self
            .fetch_pm25(sensor_id)
            .await
            .map_err(|source| Error::FetchFailed {
                sensor_id: sensor_id.clone(),
                source,
            })?;

        debug!(%sensor_id, value, "fetched reading");

        Ok(Reading {
            sensor_id: sensor_id.clone(),
            value,
        })
    }

    async fn fetch_pm25(&self, sensor_id: &SensorId) -> std::result::Result<f64, FetchError> {
        let response = self.http.get(self.reading_url(sensor_id).as_str()).await?;

        if !response.is_success() {
            return Err(FetchError::Status {
                status: response.status,
            });
        }

        decode_pm25(&response.body)
    }
}

/// Pulls `v1` out of the first result's string-encoded `Stats` object.
pub fn decode_pm25(body: &str) -> std::result::Result<f64, FetchError> {
    let envelope: Envelope = serde_json::from_str(body).map_err(FetchError::Envelope)?;

    let Some(first) = envelope.results.into_iter().next() else {
        return Err(FetchError::NoResults);
    };

    let Some(stats) = first.stats else {
        return Err(FetchError::MissingStats);
    };

    let stats: Stats = serde_json::from_str(&stats).map_err(FetchError::Stats)?;

    Ok(stats.v1)
}
