//! Host-based scenario tests for the switch controller firmware
//! These tests run on the development machine, not on the ESP32

use std::time::Duration;
use supervisor_core::{RetryPolicy, UpdateConfig};

/// Retry timings scaled down so reconnect scenarios finish in milliseconds.
pub fn fast_retry_policy() -> RetryPolicy {
    RetryPolicy {
        attempt_timeout: Duration::from_millis(40),
        connected_poll: Duration::from_millis(10),
        short_backoff: Duration::from_millis(15),
        long_backoff: Duration::from_millis(60),
        max_attempts: 3,
        idle_poll: Duration::from_millis(5),
    }
}

pub fn host_update_config() -> UpdateConfig {
    UpdateConfig {
        io_timeout: Duration::from_millis(200),
        ..UpdateConfig::default()
    }
}
