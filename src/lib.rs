//! # dhtlab - Virtual Arduino + DHT11 Laboratory
//!
//! An educational simulator that mimics an Arduino Uno reading a DHT11
//! humidity/temperature sensor and printing serial-monitor lines.
//!
//! ## Key Pieces
//!
//! - **Live parameters**: sensor values can be edited while the loop runs
//! - **Alert bands**: humidity is classified into four alert levels
//! - **Serial fidelity**: log lines reproduce the DHT library output byte
//!   for byte, including the fixed two-decimal temperature rendering
//! - **Rolling monitor**: the log keeps only the most recent 50 lines
//!
//! ## Quick Start
//!
//! ```rust
//! use dhtlab::{SensorField, Simulator};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut sim = Simulator::new();
//!
//! // Power the virtual board on. A boot line is logged immediately and
//! // the sampling loop starts ticking every two seconds.
//! sim.start();
//! assert_eq!(sim.logs()[0].message(), "DHT11 test!");
//!
//! // Slider moves take effect on the very next sample, no restart needed.
//! sim.set(SensorField::Humidity, 10);
//!
//! sim.stop().await;
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`sensor`]: mutable sensor state with range clamping
//! - [`alert`]: humidity alert classification
//! - [`serial`]: log line formatting and the bounded serial monitor buffer
//! - [`clock`]: the periodic sampling clock
//! - [`controller`]: the simulation state machine tying it all together
//! - [`firmware`]: the reference Arduino sketch the simulation mimics

// Modules
pub mod alert;
pub mod clock;
pub mod controller;
pub mod firmware;
pub mod sensor;
pub mod serial;

// Re-exports for convenient access
pub use alert::{classify, AlertLevel};
pub use clock::{SimulationClock, SAMPLE_INTERVAL};
pub use controller::{SimulationStatus, Simulator, SimulatorConfig};
pub use sensor::{SensorField, SensorReading, SensorState};
pub use serial::{format_sample, LogBuffer, LogEntry, BOOT_MESSAGE, LOG_CAPACITY};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_basic_lifecycle() {
        let mut sim = Simulator::new();
        assert_eq!(sim.status(), SimulationStatus::Stopped);

        sim.start();
        assert_eq!(sim.status(), SimulationStatus::Running);
        assert_eq!(sim.logs().len(), 1);

        sim.stop().await;
        assert_eq!(sim.status(), SimulationStatus::Stopped);
    }
}
