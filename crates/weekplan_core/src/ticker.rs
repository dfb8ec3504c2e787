//! Scoped refresh timer for the Day view "now" indicator.
//!
//! # Responsibility
//! - Invoke a callback on a fixed interval while a view is active.
//! - Guarantee the worker thread is stopped and joined on deactivation, so
//!   repeated mount/unmount cycles cannot leak threads.
//!
//! # Invariants
//! - `stop` (explicit or via `Drop`) blocks until the worker has exited.
//! - The callback never fires after `stop` returns.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::JoinHandle;
use std::time::Duration;

/// Refresh cadence of the "now" line.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Handle to a repeating background tick.
///
/// Created on view activation, dropped (or explicitly stopped) on
/// deactivation.
pub struct NowTicker {
    stop_tx: mpsc::Sender<()>,
    worker: Option<JoinHandle<()>>,
}

impl NowTicker {
    /// Starts ticking `on_tick` every `interval` until stopped.
    pub fn start<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, stop_rx) = mpsc::channel();
        let worker = std::thread::spawn(move || loop {
            match stop_rx.recv_timeout(interval) {
                Err(RecvTimeoutError::Timeout) => on_tick(),
                // Stop signal, or the handle was dropped mid-send.
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        });

        Self {
            stop_tx,
            worker: Some(worker),
        }
    }

    /// Stops the ticker and waits for the worker thread to exit.
    ///
    /// Safe to call more than once.
    pub fn stop(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl Drop for NowTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::NowTicker;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn ticks_repeatedly_until_stopped() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let mut ticker = NowTicker::start(Duration::from_millis(5), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });

        std::thread::sleep(Duration::from_millis(80));
        ticker.stop();
        let at_stop = count.load(Ordering::SeqCst);
        assert!(at_stop >= 1);

        // No ticks arrive once stop has returned.
        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(count.load(Ordering::SeqCst), at_stop);
    }

    #[test]
    fn drop_stops_the_worker() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        {
            let _ticker = NowTicker::start(Duration::from_millis(5), move || {
                seen.fetch_add(1, Ordering::SeqCst);
            });
            std::thread::sleep(Duration::from_millis(30));
        }
        let after_drop = count.load(Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(40));
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }

    #[test]
    fn repeated_start_stop_cycles_do_not_leak() {
        for _ in 0..10 {
            let mut ticker = NowTicker::start(Duration::from_millis(2), || {});
            ticker.stop();
            // A second stop on the same handle is a no-op.
            ticker.stop();
        }
    }
}
