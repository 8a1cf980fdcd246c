use chrono::Local;
use clap::{Parser, Subcommand};
use seeweather_core::{Config, Measurement, WeatherViewModel, provider};

/// Fallback location, same as the first-run default offered by `configure`.
const DEFAULT_LOCATION: &str = "Manado";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "seeweather", version, about = "Current weather in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and a default location.
    Configure,

    /// Show current weather.
    Show {
        /// Location name; if absent, the configured default is used.
        location: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location } => show(location).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("OpenWeather API key:").prompt()?;
    let location = inquire::Text::new("Default location:")
        .with_default(config.location.as_deref().unwrap_or(DEFAULT_LOCATION))
        .prompt()?;

    config.api_key = Some(api_key);
    config.location = Some(location);
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(location: Option<String>) -> anyhow::Result<()> {
    let config = Config::load()?;

    let location = location
        .or_else(|| config.location.clone())
        .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

    let provider = provider::provider_from_config(&config)?;
    let reading = provider.current_weather(&location).await?;
    let view = WeatherViewModel::build(reading)?;

    print!("{}", render(&view));
    Ok(())
}

/// Lay out the view model for the terminal, with a date line on top.
fn render(view: &WeatherViewModel) -> String {
    let date = Local::now().format("%A, %b %d, %Y");

    format!(
        "{date}\n\
         {location}  [{icon}]\n\
         \n  {temp}\u{00b0}C  {description}\n\
         \n  Humidity  {humidity}\
         \n  Pressure  {pressure}\
         \n  Wind      {wind}\n",
        location = view.location_name,
        icon = view.icon,
        temp = view.temperature,
        description = view.description,
        humidity = measurement(&view.humidity),
        pressure = measurement(&view.pressure),
        wind = measurement(&view.wind_speed),
    )
}

/// Render a value/unit pair, bolding the value with ANSI escapes when the
/// view model asks for emphasis.
fn measurement(m: &Measurement) -> String {
    if m.emphasized {
        format!("\x1b[1m{}\x1b[0m {}", m.value, m.unit)
    } else {
        format!("{} {}", m.value, m.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seeweather_core::IconId;

    #[test]
    fn emphasized_measurement_is_bolded() {
        let m = Measurement {
            value: "77".to_string(),
            unit: "%",
            emphasized: true,
        };
        assert_eq!(measurement(&m), "\x1b[1m77\x1b[0m %");
    }

    #[test]
    fn plain_measurement_has_no_escapes() {
        let m = Measurement {
            value: "1013".to_string(),
            unit: "hPa",
            emphasized: false,
        };
        assert_eq!(measurement(&m), "1013 hPa");
    }

    #[test]
    fn render_includes_every_field() {
        let view = WeatherViewModel {
            location_name: "Manado".to_string(),
            temperature: "27".to_string(),
            description: "Clear Sky".to_string(),
            humidity: Measurement { value: "77".into(), unit: "%", emphasized: true },
            pressure: Measurement { value: "1013".into(), unit: "hPa", emphasized: true },
            wind_speed: Measurement { value: "3.6".into(), unit: "km/h", emphasized: true },
            icon: IconId::Clear,
        };

        let out = render(&view);
        for needle in ["Manado", "[clear]", "27\u{00b0}C", "Clear Sky", "77", "1013", "3.6"] {
            assert!(out.contains(needle), "missing {needle:?} in {out:?}");
        }
    }
}
