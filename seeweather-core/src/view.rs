use thiserror::Error;

use crate::icon::{self, IconId};
use crate::model::WeatherReading;

/// The only error the view layer can produce: a reading with no condition
/// entries. The provider contract guarantees at least one, but the builder
/// validates instead of indexing blindly.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("weather reading contains no condition entries")]
pub struct InvalidInputError;

/// A numeric value paired with a fixed unit, ready for rendering.
///
/// `emphasized` asks the rendering layer to visually highlight the value
/// (originally bold markup); the unit stays plain. The concrete markup is
/// the renderer's choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub value: String,
    pub unit: &'static str,
    pub emphasized: bool,
}

impl Measurement {
    fn emphasized(value: String, unit: &'static str) -> Self {
        Self { value, unit, emphasized: true }
    }
}

/// Presentation-ready weather data, free of raw provider formatting quirks.
/// Immutable once built; the rendering layer only reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherViewModel {
    pub location_name: String,
    /// Whole-number Celsius, no decimal places, no grouping separators.
    pub temperature: String,
    /// Title-cased primary condition description.
    pub description: String,
    pub humidity: Measurement,
    pub pressure: Measurement,
    pub wind_speed: Measurement,
    pub icon: IconId,
}

impl WeatherViewModel {
    /// Build a view model from a raw reading.
    ///
    /// A pure function of its input: no I/O, no hidden state, identical
    /// readings produce identical view models. Fails only when the reading
    /// has no condition entries. Out-of-range values (negative humidity,
    /// NaN temperature, empty location name) are not validated and format
    /// through as-is.
    pub fn build(reading: WeatherReading) -> Result<Self, InvalidInputError> {
        let primary = reading.conditions.first().ok_or(InvalidInputError)?;

        let description = title_case(&primary.description);
        let icon = icon::classify(&primary.icon);

        let celsius = reading.temperature_kelvin - 273.15;

        Ok(Self {
            location_name: reading.location_name,
            // f64::round ties away from zero, as the display wants.
            temperature: format!("{:.0}", celsius.round()),
            description,
            humidity: Measurement::emphasized(reading.humidity_pct.to_string(), "%"),
            pressure: Measurement::emphasized(reading.pressure_hpa.to_string(), "hPa"),
            wind_speed: Measurement::emphasized(reading.wind_speed.to_string(), "km/h"),
            icon,
        })
    }
}

/// Upper-case the first character of each space-separated word, but only if
/// it is currently lower-case; the rest of the word is left untouched. An
/// all-caps word or a word starting with a digit passes through unchanged,
/// which makes the transform idempotent.
fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) if first.is_lowercase() => {
                    let mut cased: String = first.to_uppercase().collect();
                    cased.push_str(chars.as_str());
                    cased
                }
                _ => word.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
