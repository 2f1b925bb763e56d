//! Periodic fan-out loop.

use std::{sync::Arc, time::Duration};

use crate::usecase::{BroadcastSongUseCase, TickOutcome};

/// Run one broadcast tick, then wait `interval`, forever.
///
/// A skipped tick still waits out the full interval. The loop only ends when
/// its task is aborted at shutdown.
pub async fn run_broadcaster(usecase: Arc<BroadcastSongUseCase>, interval: Duration) {
    tracing::info!("Broadcaster started (interval {:?})", interval);
    loop {
        match usecase.execute().await {
            TickOutcome::Skipped { category } => {
                tracing::debug!("Tick skipped for '{}'", category);
            }
            TickOutcome::Delivered { category, report } => {
                tracing::debug!(
                    "Tick for '{}' delivered={} dropped={}",
                    category,
                    report.delivered,
                    report.dropped
                );
            }
        }
        tokio::time::sleep(interval).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{domain::MockSongSource, infrastructure::registry::InMemoryConnectionRegistry};

    #[tokio::test]
    async fn test_broadcaster_keeps_ticking_after_skipped_ticks() {
        // テスト項目: 結果なしの tick の後も間隔を空けて tick が続く
        // given (前提条件):
        let calls = Arc::new(AtomicUsize::new(0));
        let mut source = MockSongSource::new();
        let counter = calls.clone();
        source.expect_fetch().returning(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            None
        });
        let usecase = Arc::new(BroadcastSongUseCase::new(
            Arc::new(InMemoryConnectionRegistry::new()),
            Arc::new(source),
            vec!["rock".to_string()],
        ));

        // when (操作):
        let task = tokio::spawn(run_broadcaster(usecase, Duration::from_millis(100)));
        tokio::time::sleep(Duration::from_millis(350)).await;
        task.abort();

        // then (期待する結果):
        let calls = calls.load(Ordering::SeqCst);
        assert!(calls >= 2, "expected at least 2 ticks, got {}", calls);
        assert!(calls <= 5, "expected the interval to be honored, got {}", calls);
    }
}
