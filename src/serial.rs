//! Serial monitor: log line formatting and the bounded log buffer
//!
//! Log lines reproduce the reference firmware's serial output exactly. The
//! DHT library prints readings as floats, so the temperature always carries
//! a `.00` suffix even though the simulated values are whole degrees; display
//! surfaces and students comparing against a real board depend on that.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Local;

use crate::alert::AlertLevel;
use crate::sensor::SensorReading;

/// Line printed once by the firmware's `setup()`, independent of the sensor
pub const BOOT_MESSAGE: &str = "DHT11 test!";

/// The serial monitor retains at most this many lines
pub const LOG_CAPACITY: usize = 50;

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Format one sample the way the firmware prints it.
///
/// ```
/// use dhtlab::{classify, format_sample, SensorReading};
///
/// let reading = SensorReading::new(25, 60);
/// let line = format_sample(&reading, classify(reading.humidity));
/// assert_eq!(line, "Humidity: 60%  Temperature: 25.00°C");
/// ```
pub fn format_sample(reading: &SensorReading, level: AlertLevel) -> String {
    // Two spaces before "Temperature" and the fixed ".00" are part of the
    // output contract.
    match level.label() {
        Some(label) => format!(
            "Humidity: {}%  Temperature: {}.00°C - {}",
            reading.humidity, reading.temperature, label
        ),
        None => format!(
            "Humidity: {}%  Temperature: {}.00°C",
            reading.humidity, reading.temperature
        ),
    }
}

/// One immutable serial monitor line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    id: u64,
    timestamp: String,
    message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current wall-clock time
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed),
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            message: message.into(),
        }
    }

    /// Opaque unique identifier
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Wall-clock time the entry was created, formatted `HH:MM:SS`
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The formatted serial line
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Bounded FIFO buffer backing the serial monitor display.
///
/// Appends go to the back; once the buffer exceeds its capacity the oldest
/// entries are evicted from the front. Entries are never reordered or
/// mutated after append.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl LogBuffer {
    /// Create a buffer with the standard monitor capacity
    pub fn new() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }

    /// Create a buffer with a custom capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry, evicting from the front once over capacity
    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Drop all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Read-only copy of the current contents, oldest first
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Number of retained entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the buffer holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}
