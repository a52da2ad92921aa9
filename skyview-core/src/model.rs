use serde::{Deserialize, Serialize};

/// Icon shown next to a temperature, ordered from coldest to warmest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconCategory {
    Snow,
    Cloud,
    PartlyCloudy,
    Sun,
}

impl IconCategory {
    /// Classify a temperature in Celsius into half-open bins:
    /// `(-inf, 0)` snow, `[0, 10)` cloud, `[10, 20)` partly cloudy, `[20, inf)` sun.
    pub fn from_celsius(temperature: f64) -> Self {
        if temperature < 0.0 {
            IconCategory::Snow
        } else if temperature < 10.0 {
            IconCategory::Cloud
        } else if temperature < 20.0 {
            IconCategory::PartlyCloudy
        } else {
            // NaN falls through to here as well.
            IconCategory::Sun
        }
    }

    /// System symbol name used by graphical front ends.
    pub fn symbol_name(&self) -> &'static str {
        match self {
            IconCategory::Snow => "cloud.snow.fill",
            IconCategory::Cloud => "cloud.fill",
            IconCategory::PartlyCloudy => "cloud.sun.fill",
            IconCategory::Sun => "sun.max.fill",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconCategory::Snow => "🌨",
            IconCategory::Cloud => "☁",
            IconCategory::PartlyCloudy => "⛅",
            IconCategory::Sun => "☀",
        }
    }
}

/// Current conditions as shown in the large header of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentReading {
    pub icon: IconCategory,
    pub temperature_c: i32,
}

impl CurrentReading {
    /// Classify the raw temperature and truncate it toward zero.
    pub fn from_celsius(temperature: f64) -> Self {
        Self {
            icon: IconCategory::from_celsius(temperature),
            temperature_c: truncate_celsius(temperature),
        }
    }
}

impl Default for CurrentReading {
    /// Placeholder shown before the first fetch completes.
    fn default() -> Self {
        Self { icon: IconCategory::PartlyCloudy, temperature_c: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Date as provided by the API, e.g. "2024-01-01".
    pub date: String,
    pub temperature_c: f64,
    /// Days from today; only used to derive the weekday label.
    pub day_offset: i64,
}

impl ForecastEntry {
    pub fn icon(&self) -> IconCategory {
        IconCategory::from_celsius(self.temperature_c)
    }
}

/// Everything one fetch produced. Replaces any earlier snapshot wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub current: CurrentReading,
    pub forecast: Vec<ForecastEntry>,
}

/// Truncate toward zero, saturating at the `i32` range.
pub fn truncate_celsius(temperature: f64) -> i32 {
    temperature.trunc() as i32
}
