//! Background task that purges expired entries on a fixed cadence.

use std::sync::Weak;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use pokedex_core::error::{PokedexError, Result};

use crate::store::TtlStore;

/// Owned handle to a running reap loop.
///
/// The loop holds only a weak reference to its store and exits on its own
/// once the store is dropped. [`Reaper::stop`] and dropping the handle both
/// signal it to exit; [`Reaper::shutdown`] also waits for it.
#[derive(Debug)]
pub struct Reaper {
    interval: Duration,
    shutdown_tx: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
}

impl Reaper {
    /// Starts reaping `store` every `interval`.
    ///
    /// # Errors
    ///
    /// `PokedexError::Config` for a zero interval and `PokedexError::Runtime`
    /// when called outside a Tokio runtime. A cache without a reaper would
    /// grow without bound, so both are construction failures.
    pub fn spawn(store: Weak<TtlStore>, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::Config(
                "reap interval must be greater than zero".into(),
            ));
        }
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| PokedexError::Runtime(format!("reaper needs a Tokio runtime: {e}")))?;

        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = runtime.spawn(reap_loop(store, interval, shutdown_rx));
        debug!(?interval, "Reaper started");

        Ok(Self {
            interval,
            shutdown_tx,
            handle: Mutex::new(Some(handle)),
        })
    }

    /// Returns the time between sweeps.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Signals the loop to exit without waiting for it.
    pub fn stop(&self) {
        // Err only means the loop already exited
        let _ = self.shutdown_tx.send(true);
    }

    /// Signals the loop to exit and waits until it has.
    pub async fn shutdown(&self) {
        self.stop();
        let handle = self.handle.lock().take();
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                warn!(error = %e, "Reaper task ended abnormally");
            }
        }
    }

    /// True while the loop task has not finished.
    pub fn is_running(&self) -> bool {
        self.handle
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for Reaper {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn reap_loop(store: Weak<TtlStore>, interval: Duration, mut shutdown_rx: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // First tick completes immediately; wait a full interval before sweeping
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let Some(live) = store.upgrade() else {
                    debug!("Store dropped, reaper exiting");
                    break;
                };
                let removed = live.sweep();
                if removed > 0 {
                    debug!(removed, "Reaped expired entries");
                }
            }
            changed = shutdown_rx.changed() => {
                if changed.is_err() || *shutdown_rx.borrow() {
                    debug!("Reaper stopped");
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_reaper_sweeps_on_schedule() {
        let store = Arc::new(TtlStore::new(Duration::from_millis(20)));
        let reaper = Reaper::spawn(Arc::downgrade(&store), Duration::from_millis(20)).unwrap();

        store.put("a", &b"1"[..]);
        tokio::time::sleep(Duration::from_millis(120)).await;

        assert!(store.get("a").is_none());
        reaper.shutdown().await;
    }

    #[tokio::test]
    async fn test_shutdown_stops_task() {
        let store = Arc::new(TtlStore::new(Duration::from_millis(10)));
        let reaper = Reaper::spawn(Arc::downgrade(&store), Duration::from_millis(10)).unwrap();
        assert!(reaper.is_running());

        reaper.shutdown().await;
        assert!(!reaper.is_running());

        // No sweeps after shutdown
        store.put("a", &b"1"[..]);
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(store.get("a").is_some());
    }

    #[tokio::test]
    async fn test_exits_when_store_dropped() {
        let store = Arc::new(TtlStore::new(Duration::from_millis(10)));
        let reaper = Reaper::spawn(Arc::downgrade(&store), Duration::from_millis(10)).unwrap();

        drop(store);
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert!(!reaper.is_running());
    }

    #[tokio::test]
    async fn test_zero_interval_rejected() {
        let store = Arc::new(TtlStore::new(Duration::from_secs(1)));
        let result = Reaper::spawn(Arc::downgrade(&store), Duration::ZERO);
        assert!(matches!(result, Err(PokedexError::Config(_))));
    }

    #[test]
    fn test_requires_runtime() {
        let store = Arc::new(TtlStore::new(Duration::from_secs(1)));
        let result = Reaper::spawn(Arc::downgrade(&store), Duration::from_secs(1));
        assert!(matches!(result, Err(PokedexError::Runtime(_))));
    }
}
