//! Logging setup utilities for the songcast binaries.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// The filter covers the songcast library crates and the binary itself.
/// The log level can be overridden using the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `binary_name` - The name of the binary (e.g., "songcast_server", "songcast_client")
/// * `default_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use songcast_shared::logger::setup_logger;
///
/// setup_logger("songcast_server", "debug");
/// ```
pub fn setup_logger(binary_name: &str, default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter(binary_name, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the default filter directive used when `RUST_LOG` is not set.
fn default_filter(binary_name: &str, default_log_level: &str) -> String {
    let binary_target = binary_name.replace('-', "_");
    ["songcast_shared", "songcast_server", "songcast_client"]
        .iter()
        .map(|target| format!("{}={}", target, default_log_level))
        .chain(std::iter::once(format!(
            "{}={}",
            binary_target, default_log_level
        )))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_covers_library_crates_and_binary() {
        // テスト項目: デフォルトフィルタがライブラリとバイナリの両方を含む
        // given (前提条件):
        let binary_name = "songcast-server";

        // when (操作):
        let filter = default_filter(binary_name, "debug");

        // then (期待する結果):
        assert!(filter.contains("songcast_server=debug"));
        assert!(filter.contains("songcast_shared=debug"));
        assert!(filter.contains("songcast_client=debug"));
        assert!(!filter.contains("songcast-server"));
    }
}
