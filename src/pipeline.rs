use tracing::info;

use crate::aggregate::aggregate;
use crate::config::Config;
use crate::error::Result;
use crate::http::HttpClient;
use crate::hue::{BridgeResponse, HueClient};
use crate::purpleair::PurpleAirClient;
use crate::quality::{AirQuality, ColorCode};

/// What a successful run measured and applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub pm25: f64,

    pub quality: AirQuality,

    pub hue: ColorCode,

    pub response: BridgeResponse,
}

/// Reads the configured sensors, classifies the mean and sets the target's
/// hue. Nothing is written to the bridge unless the read step succeeds.
pub async fn run<S: HttpClient, B: HttpClient>(
    config: &Config,
    sensors: &PurpleAirClient<S>,
    bridge: &HueClient<B>,
) -> Result<Outcome> {
    info!(sensors = config.sensor_ids.len(), "getting air quality data");
    let pm25 = aggregate(sensors, &config.sensor_ids).await?;

    let quality = AirQuality::from_pm25(pm25);
    let hue = quality.color();

    info!(pm25, %quality, %hue, target = %config.light, "updating light color");
    let response = bridge.set_state(&config.light, hue).await?;

    Ok(Outcome {
        pm25,
        quality,
        hue,
        response,
    })
}
