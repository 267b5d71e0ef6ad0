// tests/property/snapshot_test.rs

//! Property-based tests for snapshot assembly and weather resolution.

use proptest::prelude::*;
use tickstat::core::{StatusSnapshot, Weather, WeatherNameResolver};

proptest! {
    #[test]
    fn test_weather_resolution_is_total(code in any::<i64>()) {
        let name = WeatherNameResolver::resolve(code);
        match code {
            0 => prop_assert_eq!(name, "Clear"),
            1 => prop_assert_eq!(name, "Rain"),
            2 => prop_assert_eq!(name, "Thunderstorm"),
            _ => prop_assert_eq!(name, "Unknown"),
        }
    }

    #[test]
    fn test_player_count_matches_player_list(
        players in prop::collection::vec("[a-zA-Z0-9_]{1,16}", 0..50),
        tps in 0u32..=20,
        weather in any::<i64>(),
    ) {
        let snapshot = StatusSnapshot::new(
            100,
            players.clone(),
            686,
            0,
            tps,
            "1.21.0".to_string(),
            Weather::from_code(weather),
        );
        prop_assert_eq!(snapshot.player_count(), players.len());

        let value: serde_json::Value =
            serde_json::from_str(&snapshot.to_json_pretty().unwrap()).unwrap();
        prop_assert_eq!(
            value["playerCount"].as_u64().unwrap() as usize,
            value["onlinePlayers"].as_array().unwrap().len()
        );
        prop_assert_eq!(value["onlinePlayers"].as_array().unwrap().len(), players.len());
    }
}
