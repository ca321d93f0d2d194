//! Reference Arduino sketch
//!
//! The C++ source the simulation mimics, kept as a constant for display and
//! copy surfaces. Purely informational; nothing in the simulation loop reads
//! it. The boot line, the serial print format and the humidity alert bands
//! in the rest of the crate all trace back to this sketch.

/// The Arduino Uno + DHT11 sketch, verbatim
pub const SOURCE: &str = r#"#include <DHT.h>

#define DHTPIN 2     // Digital pin connected to the DHT sensor
#define DHTTYPE DHT11   // DHT 11

DHT dht(DHTPIN, DHTTYPE);

void setup() {
  Serial.begin(9600);
  Serial.println(F("DHT11 test!"));
  dht.begin();
}

void loop() {
  // Wait a few seconds between measurements.
  delay(2000);

  // Reading temperature or humidity takes about 250 milliseconds!
  float h = dht.readHumidity();
  float t = dht.readTemperature();

  if (isnan(h) || isnan(t)) {
    Serial.println(F("Failed to read from DHT sensor!"));
    return;
  }

  Serial.print(F("Humidity: "));
  Serial.print(h);
  Serial.print(F("%  Temperature: "));
  Serial.print(t);
  Serial.println(F("°C "));

  // Lógica de Alerta de Umidade
  if (h < 12) {
    Serial.println(F("Estado de emergência"));
  }
  else if (h >= 12 && h <= 20) {
    Serial.println(F("Estado de alerta"));
  }
  else if (h > 20 && h <= 30) {
    Serial.println(F("Estado de atenção"));
  }
}
"#;

/// Number of lines in the sketch
pub fn line_count() -> usize {
    SOURCE.lines().count()
}

/// The sketch with right-aligned line numbers, for code display surfaces
pub fn numbered_listing() -> String {
    let width = line_count().to_string().len();
    SOURCE
        .lines()
        .enumerate()
        .map(|(i, line)| format!("{:>width$}  {}\n", i + 1, line, width = width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serial::BOOT_MESSAGE;

    #[test]
    fn test_sketch_matches_simulated_behavior() {
        assert!(SOURCE.contains(BOOT_MESSAGE));
        assert!(SOURCE.contains("delay(2000)"));
        assert!(SOURCE.contains("Estado de emergência"));
        assert!(SOURCE.contains("Estado de alerta"));
        assert!(SOURCE.contains("Estado de atenção"));
    }

    #[test]
    fn test_numbered_listing() {
        let listing = numbered_listing();
        assert!(listing.starts_with(" 1  #include <DHT.h>"));
        assert_eq!(listing.lines().count(), line_count());
    }
}
