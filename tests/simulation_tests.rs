//! End-to-end simulation scenarios
//!
//! Runs the controller against paused tokio time so tick counts are exact.

use std::time::Duration;

use dhtlab::{SensorField, SimulationStatus, Simulator, BOOT_MESSAGE};

/// One sampling period at the default cadence
const PERIOD: Duration = Duration::from_millis(2000);

/// Let the clock task observe advanced time
async fn settle() {
    for _ in 0..5 {
        tokio::task::yield_now().await;
    }
}

async fn one_period() {
    tokio::time::advance(PERIOD).await;
    settle().await;
}

#[tokio::test(start_paused = true)]
async fn boot_entry_then_default_sample() {
    let mut sim = Simulator::new();
    sim.start();
    settle().await;

    // Boot entry is immediate and fixed.
    let logs = sim.logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].message(), BOOT_MESSAGE);

    // One interval later: the default reading, quiet band, no suffix.
    one_period().await;
    let logs = sim.logs();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].message(), "Humidity: 60%  Temperature: 25.00°C");

    sim.stop().await;
}

#[tokio::test(start_paused = true)]
async fn parameter_change_lands_in_next_tick() {
    let mut sim = Simulator::new();
    sim.start();
    settle().await;

    one_period().await;
    assert_eq!(sim.logs()[1].message(), "Humidity: 60%  Temperature: 25.00°C");

    // Slider moves between ticks; the next tick must see them without the
    // clock restarting.
    sim.set(SensorField::Humidity, 10);
    one_period().await;
    let logs = sim.logs();
    assert_eq!(logs.len(), 3);
    assert!(logs[2].message().ends_with(" - Estado de emergência"));

    sim.set(SensorField::Humidity, 25);
    one_period().await;
    let logs = sim.logs();
    assert_eq!(logs.len(), 4);
    assert!(logs[3].message().ends_with(" - Estado de atenção"));

    sim.stop().await;
}

#[tokio::test(start_paused = true)]
async fn double_start_does_not_stack_clocks() {
    let mut sim = Simulator::new();
    sim.start();
    settle().await;
    sim.start();
    settle().await;

    // One boot entry, and exactly one line per interval afterwards.
    assert_eq!(sim.logs().len(), 1);
    one_period().await;
    assert_eq!(sim.logs().len(), 2);
    one_period().await;
    assert_eq!(sim.logs().len(), 3);

    sim.stop().await;
}

#[tokio::test(start_paused = true)]
async fn stop_silences_the_monitor() {
    let mut sim = Simulator::new();
    sim.start();
    settle().await;
    one_period().await;

    sim.stop().await;
    assert_eq!(sim.status(), SimulationStatus::Stopped);
    let frozen = sim.logs().len();

    tokio::time::advance(PERIOD * 3).await;
    settle().await;
    assert_eq!(sim.logs().len(), frozen);
}

#[tokio::test(start_paused = true)]
async fn restart_emits_one_boot_entry_per_start() {
    let mut sim = Simulator::new();

    sim.start();
    settle().await;
    sim.stop().await;
    sim.start();
    settle().await;
    sim.stop().await;

    let boots = sim
        .logs()
        .iter()
        .filter(|entry| entry.message() == BOOT_MESSAGE)
        .count();
    assert_eq!(boots, 2);
    assert_eq!(sim.logs().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn cadence_survives_parameter_edits() {
    let mut sim = Simulator::new();
    sim.start();
    settle().await;

    // Hammer the sliders mid-interval; the tick must still land on the
    // original 2 s boundary.
    tokio::time::advance(Duration::from_millis(1500)).await;
    settle().await;
    for value in [10, 20, 30, 40] {
        sim.set(SensorField::Humidity, value);
        sim.set(SensorField::Temperature, value);
    }
    assert_eq!(sim.logs().len(), 1);

    tokio::time::advance(Duration::from_millis(500)).await;
    settle().await;
    let logs = sim.logs();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[1].message(), "Humidity: 40%  Temperature: 40.00°C");

    sim.stop().await;
}

#[tokio::test(start_paused = true)]
async fn monitor_caps_at_fifty_lines() {
    let mut sim = Simulator::new();
    sim.start();
    settle().await;

    // Boot entry plus 60 ticks would be 61 lines; only 50 survive.
    for _ in 0..60 {
        one_period().await;
    }
    let logs = sim.logs();
    assert_eq!(logs.len(), 50);
    // The boot entry was the oldest line, so it is gone.
    assert!(logs.iter().all(|entry| entry.message() != BOOT_MESSAGE));

    sim.clear_log();
    assert!(sim.logs().is_empty());

    sim.stop().await;
}
