//! Weather adapters.
//!
//! Implementations of the `WeatherProvider` port:
//!
//! - `openweather` - Production OpenWeatherMap implementation

mod openweather;

pub use openweather::{OpenWeatherClient, OpenWeatherConfig};
