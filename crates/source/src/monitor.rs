use crate::client::StatesFile;
use card_core::StateTable;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, MissedTickBehavior};
use tracing::warn;

/// Spawn a background Tokio task that fetches `source` every `interval` and
/// forwards the resulting [`StateTable`]s through the returned channel.
///
/// The first fetch happens one full interval after spawning; callers do
/// their own initial evaluation. A failed fetch is logged and delivered as an
/// empty table, so consumers zero their readings instead of keeping stale
/// ones. The task stops automatically when the receiver is dropped. A zero
/// `interval` is raised to one millisecond.
pub fn spawn_refresh(source: StatesFile, interval: Duration) -> mpsc::Receiver<StateTable> {
    let (tx, rx) = mpsc::channel(4);
    let interval = interval.max(Duration::from_millis(1));

    tokio::spawn(async move {
        let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if tx.is_closed() {
                break;
            }

            let table = source.fetch().await.unwrap_or_else(|e| {
                warn!("Refresh failed, sending empty states: {e}");
                StateTable::new()
            });

            if tx.send(table).await.is_err() {
                break; // all receivers dropped
            }
        }
    });

    rx
}
