//! Simulated DHT11 sensor state
//!
//! Holds the current temperature/humidity pair that the sampling loop reads.
//! Values are owned by the controller and replaced wholesale on user edits
//! or reset. Out-of-range writes are clamped, never rejected: the sliders
//! already enforce the bounds at the UI, but the contract clamps anyway.

use std::ops::RangeInclusive;

/// Valid temperature range in °C (matches the temperature slider)
pub const TEMPERATURE_RANGE: RangeInclusive<i32> = 0..=50;

/// Valid relative humidity range in % (matches the humidity slider)
pub const HUMIDITY_RANGE: RangeInclusive<i32> = 0..=90;

/// Default temperature in °C
pub const DEFAULT_TEMPERATURE: i32 = 25;

/// Default relative humidity in %
pub const DEFAULT_HUMIDITY: i32 = 60;

/// A single temperature/humidity pair as the virtual DHT11 reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorReading {
    /// Temperature in whole °C
    pub temperature: i32,
    /// Relative humidity in whole %
    pub humidity: i32,
}

impl SensorReading {
    /// Create a reading, clamping both values into their valid ranges
    pub fn new(temperature: i32, humidity: i32) -> Self {
        Self {
            temperature: clamp_to(temperature, &TEMPERATURE_RANGE),
            humidity: clamp_to(humidity, &HUMIDITY_RANGE),
        }
    }
}

impl Default for SensorReading {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            humidity: DEFAULT_HUMIDITY,
        }
    }
}

/// Which sensor value a parameter edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorField {
    /// Temperature in °C
    Temperature,
    /// Relative humidity in %
    Humidity,
}

/// Mutable sensor state behind the simulated hardware
#[derive(Debug, Clone, Default)]
pub struct SensorState {
    reading: SensorReading,
}

impl SensorState {
    /// Create sensor state at the default reading (25 °C, 60 %)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create sensor state at a specific reading
    pub fn with_reading(reading: SensorReading) -> Self {
        Self { reading }
    }

    /// Current reading
    pub fn reading(&self) -> SensorReading {
        self.reading
    }

    /// Write one field, clamping into its valid range
    pub fn set(&mut self, field: SensorField, value: i32) {
        match field {
            SensorField::Temperature => {
                self.reading.temperature = clamp_to(value, &TEMPERATURE_RANGE);
            }
            SensorField::Humidity => {
                self.reading.humidity = clamp_to(value, &HUMIDITY_RANGE);
            }
        }
    }

    /// Restore the default reading and return it
    pub fn reset(&mut self) -> SensorReading {
        self.reading = SensorReading::default();
        self.reading
    }
}

fn clamp_to(value: i32, range: &RangeInclusive<i32>) -> i32 {
    value.clamp(*range.start(), *range.end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reading() {
        let state = SensorState::new();
        assert_eq!(state.reading(), SensorReading { temperature: 25, humidity: 60 });
    }

    #[test]
    fn test_set_in_range() {
        let mut state = SensorState::new();
        state.set(SensorField::Temperature, 42);
        state.set(SensorField::Humidity, 15);
        assert_eq!(state.reading(), SensorReading { temperature: 42, humidity: 15 });
    }

    #[test]
    fn test_set_clamps_out_of_range() {
        let mut state = SensorState::new();

        state.set(SensorField::Temperature, -10);
        assert_eq!(state.reading().temperature, 0);
        state.set(SensorField::Temperature, 999);
        assert_eq!(state.reading().temperature, 50);

        state.set(SensorField::Humidity, -1);
        assert_eq!(state.reading().humidity, 0);
        state.set(SensorField::Humidity, 91);
        assert_eq!(state.reading().humidity, 90);
    }

    #[test]
    fn test_new_reading_clamps() {
        let reading = SensorReading::new(-5, 200);
        assert_eq!(reading, SensorReading { temperature: 0, humidity: 90 });
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut state = SensorState::new();
        state.set(SensorField::Humidity, 5);
        state.set(SensorField::Temperature, 49);

        let reading = state.reset();
        assert_eq!(reading, SensorReading::default());
        assert_eq!(state.reading(), SensorReading::default());
    }
}
