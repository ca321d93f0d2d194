//! Humidity alert classification
//!
//! Maps a humidity percentage to one of four alert bands, mirroring the
//! alert logic of the reference firmware. The level is always derived from
//! the humidity present at sampling time, never stored.

/// Alert band derived from the current humidity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertLevel {
    /// Humidity above 30 %: nothing to report
    #[default]
    None,
    /// Humidity in 21..=30 %
    Attention,
    /// Humidity in 12..=20 %
    Alert,
    /// Humidity below 12 %
    Emergency,
}

impl AlertLevel {
    /// Serial-monitor label for this band, `None` for the quiet band.
    ///
    /// The wording is the Portuguese text the reference firmware prints;
    /// display surfaces rely on it verbatim.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Attention => Some("Estado de atenção"),
            Self::Alert => Some("Estado de alerta"),
            Self::Emergency => Some("Estado de emergência"),
        }
    }

    /// Whether this band carries an alert label
    pub fn is_alerting(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Classify a humidity percentage into its alert band.
///
/// Total over all integers; the bands are contiguous and non-overlapping:
/// `< 12` emergency, `12..=20` alert, `21..=30` attention, `> 30` quiet.
pub fn classify(humidity: i32) -> AlertLevel {
    if humidity < 12 {
        AlertLevel::Emergency
    } else if humidity <= 20 {
        AlertLevel::Alert
    } else if humidity <= 30 {
        AlertLevel::Attention
    } else {
        AlertLevel::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify(11), AlertLevel::Emergency);
        assert_eq!(classify(12), AlertLevel::Alert);
        assert_eq!(classify(20), AlertLevel::Alert);
        assert_eq!(classify(21), AlertLevel::Attention);
        assert_eq!(classify(30), AlertLevel::Attention);
        assert_eq!(classify(31), AlertLevel::None);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0), AlertLevel::Emergency);
        assert_eq!(classify(i32::MIN), AlertLevel::Emergency);
        assert_eq!(classify(90), AlertLevel::None);
        assert_eq!(classify(i32::MAX), AlertLevel::None);
    }

    #[test]
    fn test_bands_cover_integer_domain() {
        // Every humidity lands in exactly one band and band changes only
        // happen at the documented boundaries.
        for h in -50..=150 {
            let expected = if h < 12 {
                AlertLevel::Emergency
            } else if (12..=20).contains(&h) {
                AlertLevel::Alert
            } else if (21..=30).contains(&h) {
                AlertLevel::Attention
            } else {
                AlertLevel::None
            };
            assert_eq!(classify(h), expected, "humidity {}", h);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(classify(10).label(), Some("Estado de emergência"));
        assert_eq!(classify(15).label(), Some("Estado de alerta"));
        assert_eq!(classify(25).label(), Some("Estado de atenção"));
        assert_eq!(classify(60).label(), None);
        assert!(!AlertLevel::None.is_alerting());
        assert!(AlertLevel::Emergency.is_alerting());
    }
}
