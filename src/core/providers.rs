// src/core/providers.rs

//! Capabilities the status aggregator queries on the host.
//!
//! Calls are expected to be synchronous and fast; they run on the request path.

use crate::core::StatusError;

/// The dimension whose clock is reported as the world time.
pub const OVERWORLD: i32 = 0;

/// Live data supplied by the host application.
pub trait HostProvider: Send + Sync {
    /// Names of the currently connected sessions, in host order.
    fn online_players(&self) -> Result<Vec<String>, StatusError>;

    fn protocol_version(&self) -> Result<i64, StatusError>;

    /// The in-game clock of the given dimension.
    fn world_time(&self, dimension: i32) -> Result<i64, StatusError>;

    fn server_version(&self) -> Result<String, StatusError>;

    /// The raw weather code; see `Weather::from_code`.
    fn weather_code(&self) -> Result<i64, StatusError>;
}

/// Source of the configured player capacity.
///
/// Failures are expected to be `StatusError::ConfigRead` and are recovered by the
/// aggregator with its configured fallback.
pub trait MaxPlayersProvider: Send + Sync {
    fn max_players(&self) -> Result<u32, StatusError>;
}
