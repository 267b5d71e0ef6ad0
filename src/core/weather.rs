// src/core/weather.rs

//! Maps the host's raw weather codes to the names exposed on the status endpoint.

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// The weather categories a snapshot can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
pub enum Weather {
    Clear,
    Rain,
    Thunderstorm,
    Unknown,
}

impl Weather {
    /// Converts a raw host weather code. Anything outside `0..=2` is `Unknown`.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Weather::Clear,
            1 => Weather::Rain,
            2 => Weather::Thunderstorm,
            _ => Weather::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Total lookup from weather code to display name.
pub struct WeatherNameResolver;

impl WeatherNameResolver {
    pub fn resolve(code: i64) -> &'static str {
        Weather::from_code(code).as_str()
    }
}
