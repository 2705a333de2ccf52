use thiserror::Error;

use crate::http::{Body, TransportError};
use crate::hue::LightTarget;
use crate::purpleair::{FetchError, SensorId};

#[derive(Error, Debug)]
pub enum Error {
    /// A single sensor could not be read. Not fatal to a run on its own.
    #[error("failed to fetch reading for sensor {sensor_id}")]
    FetchFailed {
        sensor_id: SensorId,
        #[source]
        source: FetchError,
    },

    /// Every sensor failed, or none were configured.
    #[error("no sensor readings available")]
    NoReadingsAvailable,

    /// The bridge did not accept a state update.
    #[error("failed to update {target}{}", describe_response(.status, .body))]
    ControlUpdateFailed {
        target: LightTarget,
        status: Option<u16>,
        body: Option<Body>,
        #[source]
        source: Option<TransportError>,
    },

    /// A read request to the bridge never got a response.
    #[error("bridge request failed: {url}")]
    BridgeRequestFailed {
        url: String,
        #[source]
        source: TransportError,
    },
}

impl Error {
    /// This error followed by each of its causes, joined with `: `.
    pub fn chain(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            message.push_str(": ");
            message.push_str(&err.to_string());
            cause = err.source();
        }
        message
    }
}

fn describe_response(status: &Option<u16>, body: &Option<Body>) -> String {
    match (status, body) {
        (Some(status), Some(body)) => format!(": HTTP {status}: {body}"),
        (Some(status), None) => format!(": HTTP {status}"),
        _ => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;
