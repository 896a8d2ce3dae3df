use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::{BehaviorVersion, SdkConfig};
use std::time::Duration;

pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Upper bound on one SDK call. The gateway awaits its workflow start inside Discord's three
/// second interaction window, so this stays below it.
pub const OPERATION_TIMEOUT: Duration = Duration::from_secs(2);

/// Every SDK call is made once; the invoking platform owns retries.
pub fn retry_config() -> RetryConfig {
    RetryConfig::disabled()
}

pub fn timeout_config() -> TimeoutConfig {
    TimeoutConfig::builder()
        .connect_timeout(CONNECT_TIMEOUT)
        .operation_timeout(OPERATION_TIMEOUT)
        .build()
}

pub async fn load_sdk_config() -> SdkConfig {
    aws_config::defaults(BehaviorVersion::latest())
        .retry_config(retry_config())
        .timeout_config(timeout_config())
        .load()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_attempt() {
        assert_eq!(retry_config().max_attempts(), 1);
    }

    #[test]
    fn test_operations_are_bounded() {
        let timeouts = timeout_config();

        assert_eq!(timeouts.operation_timeout(), Some(OPERATION_TIMEOUT));
        assert_eq!(timeouts.connect_timeout(), Some(CONNECT_TIMEOUT));
        assert!(OPERATION_TIMEOUT < Duration::from_secs(3));
    }
}
