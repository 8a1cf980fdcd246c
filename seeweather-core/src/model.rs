use serde::{Deserialize, Serialize};

/// One condition entry as reported by the provider. Providers list the
/// primary condition first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
    /// Provider icon code, e.g. "10d". See [`crate::icon::classify`].
    pub icon: String,
}

/// A single weather observation as fetched from the provider, before any
/// display formatting. Temperature is in Kelvin (the provider default;
/// conversion happens in the view layer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub location_name: String,
    pub temperature_kelvin: f64,
    /// 0-100 expected, but the provider does not enforce the range and
    /// neither does this crate.
    pub humidity_pct: i32,
    pub pressure_hpa: i32,
    pub wind_speed: f64,
    /// Must be non-empty; the view layer reads the first entry only.
    pub conditions: Vec<Condition>,
}
