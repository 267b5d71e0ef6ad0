// src/core/mod.rs

//! The central module containing the sampling and aggregation logic of tickstat.

pub mod aggregator;
pub mod errors;
pub mod host;
pub mod properties;
pub mod providers;
pub mod sampler;
pub mod snapshot;
pub mod ticks;
pub mod weather;

pub use aggregator::StatusAggregator;
pub use errors::StatusError;
pub use sampler::RateSampler;
pub use snapshot::StatusSnapshot;
pub use weather::{Weather, WeatherNameResolver};
