// AQI severity classification
//
// Thresholds are inclusive upper bounds on the PM2.5 concentration. The
// label/color pairs are a fixed display table, not derived from the value.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AqiCategory {
    pub label: &'static str,
    pub color: &'static str,
    /// Severity rank, 0 (best) through 4 (worst).
    pub rank: u8,
}

const CATEGORIES: [AqiCategory; 5] = [
    AqiCategory { label: "Good", color: "#00C853", rank: 0 },
    AqiCategory { label: "Moderate", color: "#FFD600", rank: 1 },
    AqiCategory { label: "Unhealthy for Sensitive Groups", color: "#FF9100", rank: 2 },
    AqiCategory { label: "Unhealthy", color: "#FF4D4D", rank: 3 },
    AqiCategory { label: "Very Unhealthy", color: "#8F3F97", rank: 4 },
];

/// Maps a PM2.5 concentration to its severity category.
///
/// Total over all reals: negative or otherwise garbage input lands in the
/// lowest bucket.
pub fn classify(pm25: f64) -> &'static AqiCategory {
    if pm25 <= 50.0 {
        &CATEGORIES[0]
    } else if pm25 <= 100.0 {
        &CATEGORIES[1]
    } else if pm25 <= 150.0 {
        &CATEGORIES[2]
    } else if pm25 <= 200.0 {
        &CATEGORIES[3]
    } else {
        &CATEGORIES[4]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive_on_the_lower_bucket() {
        assert_eq!(classify(50.0).label, "Good");
        assert_eq!(classify(50.01).label, "Moderate");
        assert_eq!(classify(100.0).label, "Moderate");
        assert_eq!(classify(150.0).label, "Unhealthy for Sensitive Groups");
        assert_eq!(classify(200.0).label, "Unhealthy");
        assert_eq!(classify(200.0001).label, "Very Unhealthy");
    }

    #[test]
    fn test_garbage_input_falls_in_lowest_bucket() {
        assert_eq!(classify(-12.5).label, "Good");
        assert_eq!(classify(f64::MIN).label, "Good");
        assert_eq!(classify(1e9).label, "Very Unhealthy");
    }

    #[test]
    fn test_ranks_are_ordered() {
        assert_eq!(classify(0.0).rank, 0);
        assert_eq!(classify(75.0).rank, 1);
        assert_eq!(classify(125.0).rank, 2);
        assert_eq!(classify(175.0).rank, 3);
        assert_eq!(classify(500.0).rank, 4);
    }
}
