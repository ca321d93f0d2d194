//! Virtual lab demo
//!
//! Powers the virtual board on, moves the humidity slider through the alert
//! bands and prints the serial monitor, the way the web bench displays it.
//!
//! Run with: `cargo run --example virtual_lab`

use std::time::Duration;

use dhtlab::{firmware, SensorField, Simulator, SimulatorConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== dhtlab Virtual Lab ===\n");
    println!("Reference sketch ({} lines):\n", firmware::line_count());
    println!("{}", firmware::numbered_listing());

    // A faster cadence than the firmware's 2 s keeps the demo snappy.
    let mut sim = Simulator::with_config(SimulatorConfig {
        sample_interval: Duration::from_millis(400),
        ..Default::default()
    });

    sim.start();

    // Sweep the humidity down through every alert band while the loop runs;
    // each change lands in the next sample without restarting the clock.
    for humidity in [60, 35, 25, 15, 5] {
        sim.set(SensorField::Humidity, humidity);
        tokio::time::sleep(Duration::from_millis(500)).await;
    }

    sim.stop().await;

    println!("--- Serial monitor ({} lines) ---", sim.logs().len());
    for entry in sim.logs() {
        println!("[{}] {}", entry.timestamp(), entry.message());
    }
}
