use crate::entity::StateTable;

/// Everything that can trigger work in the host loop.
///
/// Sources:
/// - Refresh timer task   → `StatesRefreshed`
/// - States file watcher  → `StatesPushed`
/// - Config watcher task  → `ConfigReloaded`
/// - Ctrl-C               → `Shutdown`
#[derive(Debug, Clone)]
pub enum Message {
    /// Fresh entity states fetched on a timer tick.
    StatesRefreshed(StateTable),
    /// The data source announced new values; fetch and evaluate now.
    StatesPushed,
    /// Config file changed on disk; triggers a reload and re-evaluation.
    ConfigReloaded,
    /// Graceful shutdown requested.
    Shutdown,
}
