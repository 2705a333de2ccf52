use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result, bail};
use serde::Deserialize;

use crate::hue::LightTarget;
use crate::id::deserialize_id;
use crate::purpleair::{DEFAULT_HOST, SensorId};

/// Everything a run needs, loaded once and never mutated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub bridge_ip: String,

    #[serde(deserialize_with = "deserialize_id")]
    pub user_id: String,

    pub light: LightTarget,

    pub sensor_ids: Vec<SensorId>,

    #[serde(default = "default_sensor_host")]
    pub sensor_host: String,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {path:?}"))?;

        Self::from_json(&text).with_context(|| format!("invalid config file: {path:?}"))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(text).context("failed to parse config JSON")?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.bridge_ip.trim().is_empty() {
            bail!("bridgeIp must not be empty");
        }

        if self.user_id.trim().is_empty() {
            bail!("userId must not be empty");
        }

        if self.light.id.trim().is_empty() {
            bail!("light.id must not be empty");
        }

        if let Some(i) = self.sensor_ids.iter().position(|id| id.as_str().is_empty()) {
            bail!("sensorIds[{i}] must not be empty");
        }

        Ok(())
    }
}

fn default_sensor_host() -> String {
    DEFAULT_HOST.to_owned()
}
