//! Core library for the `seeweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider boundary
//! - Raw readings, icon classification, and the reading -> view-model transform
//!
//! It is used by `seeweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod icon;
pub mod model;
pub mod provider;
pub mod view;

pub use config::Config;
pub use icon::IconId;
pub use model::{Condition, WeatherReading};
pub use provider::WeatherProvider;
pub use view::{InvalidInputError, Measurement, WeatherViewModel};
