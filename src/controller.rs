//! Simulation controller
//!
//! Orchestrates sensor state, alert classification, log formatting, the
//! bounded log buffer and the sampling clock behind a single state machine
//! with two states, `Stopped` and `Running`.
//!
//! Every tick reads the sensor state through a shared handle at invocation
//! time. Parameter edits therefore show up in the very next sample without
//! restarting the clock, and the cadence never resets on a slider move.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::info;

use crate::alert::classify;
use crate::clock::{SimulationClock, SAMPLE_INTERVAL};
use crate::sensor::{SensorField, SensorReading, SensorState};
use crate::serial::{format_sample, LogBuffer, LogEntry, BOOT_MESSAGE, LOG_CAPACITY};

/// Whether the virtual board is powered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationStatus {
    /// Clock disarmed, parameter inputs shown as disabled by the UI
    #[default]
    Stopped,
    /// Clock armed, sampling every interval
    Running,
}

impl SimulationStatus {
    /// Check if the simulation is running
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Simulator configuration
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Sampling cadence (default: 2 s, the firmware's `delay(2000)`)
    pub sample_interval: Duration,
    /// Serial monitor capacity in lines (default: 50)
    pub log_capacity: usize,
    /// Sensor reading at construction and after `reset`
    pub initial_reading: SensorReading,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            sample_interval: SAMPLE_INTERVAL,
            log_capacity: LOG_CAPACITY,
            initial_reading: SensorReading::default(),
        }
    }
}

/// The simulation state machine.
///
/// Owns the sensor state and the serial log; external surfaces interact
/// with both only through the operations here. Created at `Stopped` with an
/// empty log and the default reading; there is no terminal state.
pub struct Simulator {
    sensor: Arc<Mutex<SensorState>>,
    log: Arc<Mutex<LogBuffer>>,
    clock: SimulationClock,
    config: SimulatorConfig,
}

impl Simulator {
    /// Create a simulator with the default configuration
    pub fn new() -> Self {
        Self::with_config(SimulatorConfig::default())
    }

    /// Create a simulator with a custom configuration
    pub fn with_config(config: SimulatorConfig) -> Self {
        Self {
            sensor: Arc::new(Mutex::new(SensorState::with_reading(
                config.initial_reading,
            ))),
            log: Arc::new(Mutex::new(LogBuffer::with_capacity(config.log_capacity))),
            clock: SimulationClock::new(),
            config,
        }
    }

    /// Current state of the machine
    pub fn status(&self) -> SimulationStatus {
        if self.clock.is_armed() {
            SimulationStatus::Running
        } else {
            SimulationStatus::Stopped
        }
    }

    /// Transition `Stopped -> Running`.
    ///
    /// Logs one boot entry (fixed message, independent of the sensor state)
    /// and arms the clock. A no-op while already `Running`: the boot entry
    /// is emitted once per start transition and clocks never stack.
    pub fn start(&mut self) {
        if self.clock.is_armed() {
            return;
        }

        self.log.lock().unwrap().append(LogEntry::new(BOOT_MESSAGE));

        let sensor = Arc::clone(&self.sensor);
        let log = Arc::clone(&self.log);
        self.clock.arm(self.config.sample_interval, move || {
            // Read the *current* state, never a value captured at arm time.
            let reading = sensor.lock().unwrap().reading();
            let level = classify(reading.humidity);
            let line = format_sample(&reading, level);
            log.lock().unwrap().append(LogEntry::new(line));
        });

        info!("simulation started");
    }

    /// Transition `Running -> Stopped`.
    ///
    /// Disarms the clock and waits for its task; an in-flight tick still
    /// completes its single append. A no-op while already `Stopped`.
    pub async fn stop(&mut self) {
        if self.clock.is_armed() {
            self.clock.shutdown().await;
            info!("simulation stopped");
        }
    }

    /// Flip between `Running` and `Stopped` (the power button)
    pub async fn toggle(&mut self) {
        if self.status().is_running() {
            self.stop().await;
        } else {
            self.start();
        }
    }

    /// Write one sensor field, clamped into range.
    ///
    /// Valid in either state. Touches sensor state only: the clock keeps its
    /// cadence and armed status, and the next tick picks the new value up.
    pub fn set(&mut self, field: SensorField, value: i32) {
        self.sensor.lock().unwrap().set(field, value);
    }

    /// Restore the configured initial reading and return it.
    ///
    /// Valid in either state; clears neither the log nor the run state.
    pub fn reset(&mut self) -> SensorReading {
        let mut sensor = self.sensor.lock().unwrap();
        *sensor = SensorState::with_reading(self.config.initial_reading);
        sensor.reading()
    }

    /// Empty the serial log. Valid in either state; touches nothing else.
    pub fn clear_log(&mut self) {
        self.log.lock().unwrap().clear();
    }

    /// Read-only copy of the serial log, oldest line first
    pub fn logs(&self) -> Vec<LogEntry> {
        self.log.lock().unwrap().snapshot()
    }

    /// Current sensor reading
    pub fn reading(&self) -> SensorReading {
        self.sensor.lock().unwrap().reading()
    }

    /// The configuration this simulator was built with
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
