//! PM2.5 banding and the hue shown for each band.

use std::fmt;

use serde::Serialize;

/// A Hue `hue` value (0..=65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ColorCode(u16);

impl ColorCode {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ColorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Air quality bands ordered from cleanest to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AirQuality {
    Excellent,
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

// Ref: https://www3.epa.gov/airnow/aqi-technical-assistance-document-sept2018.pdf, Table 4
// Upper bounds are inclusive, in µg/m³.
const BREAKPOINTS: [(f64, AirQuality); 6] = [
    (6.0, AirQuality::Excellent),
    (12.0, AirQuality::Good),
    (35.4, AirQuality::Moderate),
    (55.4, AirQuality::UnhealthyForSensitiveGroups),
    (150.4, AirQuality::Unhealthy),
    (250.4, AirQuality::VeryUnhealthy),
];

impl AirQuality {
    /// Bands a PM2.5 concentration. Anything above the last bound, NaN
    /// included, is `Hazardous`.
    pub fn from_pm25(concentration: f64) -> Self {
        BREAKPOINTS
            .iter()
            .find(|(upper, _)| concentration <= *upper)
            .map(|&(_, quality)| quality)
            .unwrap_or(AirQuality::Hazardous)
    }

    pub fn color(self) -> ColorCode {
        let hue = match self {
            AirQuality::Excellent => 19236,
            AirQuality::Good => 14927,
            AirQuality::Moderate => 10922,
            AirQuality::UnhealthyForSensitiveGroups => 4733,
            AirQuality::Unhealthy => 910,
            AirQuality::VeryUnhealthy => 60801,
            AirQuality::Hazardous => 63532,
        };

        ColorCode::new(hue)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AirQuality::Excellent => "excellent",
            AirQuality::Good => "good",
            AirQuality::Moderate => "moderate",
            AirQuality::UnhealthyForSensitiveGroups => "unhealthy for sensitive groups",
            AirQuality::Unhealthy => "unhealthy",
            AirQuality::VeryUnhealthy => "very unhealthy",
            AirQuality::Hazardous => "hazardous",
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn classify(concentration: f64) -> ColorCode {
    AirQuality::from_pm25(concentration).color()
}
