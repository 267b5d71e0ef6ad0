// tests/integration/concurrency_test.rs

use super::test_helpers::TestServer;
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tickstat::core::RateSampler;
use tokio::task::JoinSet;

const TICK_SPACING: Duration = Duration::from_millis(25);

fn assert_schema(body: &Value) {
    assert!(body["maxPlayers"].is_u64());
    assert!(body["onlinePlayers"].is_array());
    assert_eq!(
        body["playerCount"].as_u64().unwrap() as usize,
        body["onlinePlayers"].as_array().unwrap().len()
    );
    assert!(body["protocol"].is_i64());
    assert!(body["time"].is_i64());
    let tps = body["tps"].as_u64().unwrap();
    assert!(tps <= 20);
    assert!(body["version"].is_string());
    let weather = body["weather"].as_str().unwrap();
    assert!(["Clear", "Rain", "Thunderstorm", "Unknown"].contains(&weather));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_ticks_interleaved_with_concurrent_requests() {
    let sampler = Arc::new(RateSampler::new());
    let first_window = sampler.window().window_start;
    let server = TestServer::start(sampler.clone(), Some(20)).await;

    // The host loop runs on its own OS thread, as it would inside a game server.
    // 50 ticks spaced 25 ms apart span more than one window.
    let tick_sampler = sampler.clone();
    let ticker = thread::spawn(move || {
        for _ in 0..50 {
            tick_sampler.record_tick();
            thread::sleep(TICK_SPACING);
        }
    });

    // Requests are spread over the same span so some land around the window reset.
    let client = reqwest::Client::new();
    let mut requests = JoinSet::new();
    for i in 0..50 {
        let client = client.clone();
        let url = server.url("/");
        requests.spawn(async move {
            tokio::time::sleep(TICK_SPACING * i).await;
            client.get(url).send().await
        });
    }

    let mut ok = 0;
    while let Some(res) = requests.join_next().await {
        let resp = res.unwrap().unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&resp.text().await.unwrap())
            .expect("response must be valid JSON");
        assert_schema(&body);
        ok += 1;
    }
    assert_eq!(ok, 50);

    ticker.join().unwrap();
    assert!(sampler.current_rate() <= 20);
    assert!(
        sampler.window().window_start > first_window,
        "no window boundary was crossed"
    );

    server.stop().await;
}
