//! Periodic simulation clock
//!
//! Drives the sampling loop at a fixed cadence on a spawned tokio task,
//! standing in for the `delay(2000)` of the firmware loop. The clock
//! enforces single-arm discipline: arming always clears any previous
//! clock first, so repeated starts can never stack tick streams.

use std::time::Duration;

use tokio::select;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Cadence of the simulated firmware loop
pub const SAMPLE_INTERVAL: Duration = Duration::from_millis(2000);

/// Fixed-interval trigger for the sampling step.
///
/// Must be armed from within a tokio runtime. The tick callback runs on the
/// clock task; it should read shared state through handles captured by the
/// closure, so every tick observes the latest values rather than a snapshot
/// taken at arm time.
#[derive(Debug, Default)]
pub struct SimulationClock {
    cancel: Option<CancellationToken>,
    task: Option<JoinHandle<()>>,
}

impl SimulationClock {
    /// Create a disarmed clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a clock task is currently armed
    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }

    /// Arm the clock, invoking `on_tick` once per period.
    ///
    /// Any previously armed clock is disarmed first. The first tick fires
    /// one full period after arming, and the cadence is anchored here, so
    /// it is unaffected by anything the callback reads or writes.
    pub fn arm<F>(&mut self, period: Duration, mut on_tick: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.disarm();

        let cancel = CancellationToken::new();
        let token = cancel.clone();

        // Created here, not inside the task, so the cadence is anchored at
        // arm time even if the task is polled late.
        let mut ticker = interval(period);

        let task = tokio::spawn(async move {
            // An interval's first tick completes immediately; swallow it so
            // the first sample lands a full period after arming.
            ticker.tick().await;
            loop {
                select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => on_tick(),
                }
            }
            debug!("simulation clock task exited");
        });

        self.cancel = Some(cancel);
        self.task = Some(task);
        debug!(period_ms = period.as_millis() as u64, "simulation clock armed");
    }

    /// Disarm without waiting for the clock task.
    ///
    /// No new tick is scheduled after this returns; a tick already in flight
    /// may still complete its single append. Idempotent.
    pub fn disarm(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
            debug!("simulation clock disarmed");
        }
        self.task.take();
    }

    /// Disarm and wait for the clock task to finish
    pub async fn shutdown(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
            debug!("simulation clock shut down");
        }
    }
}

impl Drop for SimulationClock {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel.cancel();
        }
    }
}
