use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::http::HttpClient;
use crate::purpleair::{PurpleAirClient, Reading, SensorId};

/// Fetches every sensor in order and averages the ones that answered.
pub async fn aggregate<C: HttpClient>(
    client: &PurpleAirClient<C>,
    sensor_ids: &[SensorId],
) -> Result<f64> {
    let mut results = Vec::with_capacity(sensor_ids.len());
    for sensor_id in sensor_ids {
        results.push(client.fetch_reading(sensor_id).await);
    }

    mean_of(results)
}

/// Plain arithmetic mean of the successful readings. Failures are logged and
/// left out.
pub fn mean_of(results: impl IntoIterator<Item = Result<Reading>>) -> Result<f64> {
    let (sum, succeeded, failed) =
        results
            .into_iter()
            .fold((0f64, 0usize, 0usize), |(sum, succeeded, failed), result| {
                match result {
                    Ok(reading) => (sum + reading.value, succeeded + 1, failed),
                    Err(err) => {
                        warn!(error = %err.chain(), "skipping sensor");
                        (sum, succeeded, failed + 1)
                    }
                }
            });

    if succeeded == 0 {
        return Err(Error::NoReadingsAvailable);
    }

    let mean = sum / succeeded as f64;
    info!(succeeded, failed, mean, "aggregated sensor readings");

    Ok(mean)
}
