//! Metrics instrumentation for the gateway.
//!
//! Uses the `metrics` facade; whether and where a recorder is installed is
//! the host's decision.

use metrics::counter;

/// Metric names.
pub mod names {
    pub const PUBLISHES_TOTAL: &str = "beacon_publishes_total";
    pub const PUBLISH_CHANNELS_TOTAL: &str = "beacon_publish_channels_total";
    pub const AUTH_DENIED_TOTAL: &str = "beacon_auth_denied_total";
    pub const TOKENS_ISSUED_TOTAL: &str = "beacon_tokens_issued_total";
    pub const BROADCAST_ERRORS_TOTAL: &str = "beacon_broadcast_errors_total";
}

/// Register metric descriptions.
pub fn init_metrics() {
    metrics::describe_counter!(
        names::PUBLISHES_TOTAL,
        "Total number of batched publish calls sent to the gateway server"
    );
    metrics::describe_counter!(
        names::PUBLISH_CHANNELS_TOTAL,
        "Total number of channels addressed across all publish calls"
    );
    metrics::describe_counter!(
        names::AUTH_DENIED_TOTAL,
        "Total number of denied channel authorizations"
    );
    metrics::describe_counter!(
        names::TOKENS_ISSUED_TOTAL,
        "Total number of access tokens issued"
    );
    metrics::describe_counter!(
        names::BROADCAST_ERRORS_TOTAL,
        "Total number of publish calls rejected by the gateway server"
    );
}

/// Record a batched publish.
pub fn record_publish(channels: usize) {
    counter!(names::PUBLISHES_TOTAL).increment(1);
    counter!(names::PUBLISH_CHANNELS_TOTAL).increment(channels as u64);
}

/// Record a denied authorization.
pub fn record_denied(reason: &str) {
    counter!(names::AUTH_DENIED_TOTAL, "reason" => reason.to_string()).increment(1);
}

/// Record an issued token.
pub fn record_token_issued(scope: &str) {
    counter!(names::TOKENS_ISSUED_TOTAL, "scope" => scope.to_string()).increment(1);
}

/// Record a server-side broadcast rejection.
pub fn record_broadcast_error() {
    counter!(names::BROADCAST_ERRORS_TOTAL).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_without_recorder_is_a_noop() {
        // No recorder installed in tests; calls must not panic.
        init_metrics();
        record_publish(3);
        record_denied("anonymous");
        record_token_issued("subscription");
        record_broadcast_error();
    }
}
