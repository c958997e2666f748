mod helpers;

use std::sync::Arc;
use std::time::Duration;

use helpers::ScriptedExecutor;
use ktour_application::ports::TourTransport;
use ktour_domain::config::RetryConfig;
use ktour_domain::KtourError;
use ktour_infrastructure::{HttpExecutor, RetryingTransport};

fn transport_over(executor: Arc<ScriptedExecutor>) -> RetryingTransport {
    RetryingTransport::new(executor, RetryConfig::default())
}

#[tokio::test(start_paused = true)]
async fn test_persistent_failure_stops_after_three_attempts() {
    let executor = Arc::new(ScriptedExecutor::new());
    for _ in 0..3 {
        executor.push_network_err("connection refused");
    }
    let transport = transport_over(Arc::clone(&executor));

    let started = tokio::time::Instant::now();
    let result = transport.fetch("https://api.example.test/x").await;

    assert!(matches!(result, Err(KtourError::Network(_))));
    assert_eq!(executor.attempt_count(), 3);
    assert!(
        started.elapsed() >= Duration::from_millis(1500),
        "two backoff sleeps of 0.5s and 1.0s must pass"
    );
}

#[tokio::test(start_paused = true)]
async fn test_backoff_grows_linearly_between_attempts() {
    let executor = Arc::new(ScriptedExecutor::new());
    for _ in 0..3 {
        executor.push_network_err("connection reset");
    }
    let transport = transport_over(Arc::clone(&executor));

    let _ = transport.fetch("https://api.example.test/x").await;

    let starts = executor.attempt_starts();
    assert_eq!(starts.len(), 3);
    assert_eq!(starts[1] - starts[0], Duration::from_millis(500));
    assert_eq!(starts[2] - starts[1], Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn test_success_on_second_attempt_stops_retrying() {
    let executor = Arc::new(ScriptedExecutor::new());
    executor.push_network_err("connection reset");
    executor.push_ok(200, r#"{"ok":true}"#);
    let transport = transport_over(Arc::clone(&executor));

    let reply = transport.fetch("https://api.example.test/x").await.unwrap();

    assert_eq!(reply.status, 200);
    assert_eq!(executor.attempt_count(), 2);
}

#[tokio::test]
async fn test_error_status_is_returned_without_retrying() {
    let executor = Arc::new(ScriptedExecutor::new());
    executor.push_ok(500, "upstream exploded");
    let transport = transport_over(Arc::clone(&executor));

    // A formed reply is a transport success whatever its status; status
    // policy lives above this seam.
    let reply = transport.fetch("https://api.example.test/x").await.unwrap();

    assert_eq!(reply.status, 500);
    assert_eq!(executor.attempt_count(), 1);
}

#[tokio::test]
async fn test_non_network_errors_short_circuit() {
    let executor = Arc::new(ScriptedExecutor::new());
    executor.push_err(KtourError::InvalidUrl("no scheme".to_string()));
    executor.push_ok(200, "{}");
    let transport = transport_over(Arc::clone(&executor));

    let result = transport.fetch("not a url").await;

    assert!(matches!(result, Err(KtourError::InvalidUrl(_))));
    assert_eq!(executor.attempt_count(), 1);
}

#[tokio::test]
async fn test_zero_retries_means_a_single_attempt() {
    let executor = Arc::new(ScriptedExecutor::new());
    executor.push_network_err("connection refused");
    let transport = RetryingTransport::new(
        Arc::clone(&executor) as Arc<dyn HttpExecutor>,
        RetryConfig {
            max_retries: 0,
            backoff_step_ms: 500,
        },
    );

    let result = transport.fetch("https://api.example.test/x").await;

    assert!(matches!(result, Err(KtourError::Network(_))));
    assert_eq!(executor.attempt_count(), 1);
}
