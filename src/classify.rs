//! AQI severity classification
//!
//! Tiers follow the standard AQI convention:
//! - Good (0-50), Moderate (51-100), Unhealthy for Sensitive Groups (101-150),
//!   Unhealthy (151-200), Very Unhealthy (201-300), Hazardous (301+)

use serde::Serialize;

/// Severity tier from Good (best) to Hazardous (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SeverityTier {
    Good,
    Moderate,
    UnhealthyForSensitive,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Display tint attached to a tier, or the neutral tint for an absent reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tint {
    Green,
    Yellow,
    Orange,
    Red,
    Purple,
    Maroon,
    /// Used when no reading is available
    Neutral,
}

impl SeverityTier {
    /// All tiers in ascending severity order.
    pub const ALL: [SeverityTier; 6] = [
        SeverityTier::Good,
        SeverityTier::Moderate,
        SeverityTier::UnhealthyForSensitive,
        SeverityTier::Unhealthy,
        SeverityTier::VeryUnhealthy,
        SeverityTier::Hazardous,
    ];

    /// Classify an AQI value into its severity tier.
    ///
    /// Buckets are inclusive upper bounds applied in ascending order, so every
    /// index maps to exactly one tier.
    #[must_use]
    pub fn from_index(index: u32) -> Self {
        if index <= 50 {
            SeverityTier::Good
        } else if index <= 100 {
            SeverityTier::Moderate
        } else if index <= 150 {
            SeverityTier::UnhealthyForSensitive
        } else if index <= 200 {
            SeverityTier::Unhealthy
        } else if index <= 300 {
            SeverityTier::VeryUnhealthy
        } else {
            SeverityTier::Hazardous
        }
    }

    /// Inclusive upper bound of this tier; the top tier is unbounded.
    #[must_use]
    pub fn upper_bound(self) -> Option<u32> {
        match self {
            SeverityTier::Good => Some(50),
            SeverityTier::Moderate => Some(100),
            SeverityTier::UnhealthyForSensitive => Some(150),
            SeverityTier::Unhealthy => Some(200),
            SeverityTier::VeryUnhealthy => Some(300),
            SeverityTier::Hazardous => None,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SeverityTier::Good => "Good",
            SeverityTier::Moderate => "Moderate",
            SeverityTier::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            SeverityTier::Unhealthy => "Unhealthy",
            SeverityTier::VeryUnhealthy => "Very Unhealthy",
            SeverityTier::Hazardous => "Hazardous",
        }
    }

    /// Health advisory sentence for display next to the reading.
    #[must_use]
    pub fn advisory(self) -> &'static str {
        match self {
            SeverityTier::Good => "Air quality is satisfactory.",
            SeverityTier::Moderate => "Air quality is acceptable.",
            SeverityTier::UnhealthyForSensitive => {
                "Members of sensitive groups may experience health effects."
            }
            SeverityTier::Unhealthy => "Everyone may experience health effects.",
            SeverityTier::VeryUnhealthy => "Health alert: risk of serious health effects.",
            SeverityTier::Hazardous => "Health warning of emergency conditions.",
        }
    }

    /// Display tint for map markers and alert boxes.
    #[must_use]
    pub fn tint(self) -> Tint {
        match self {
            SeverityTier::Good => Tint::Green,
            SeverityTier::Moderate => Tint::Yellow,
            SeverityTier::UnhealthyForSensitive => Tint::Orange,
            SeverityTier::Unhealthy => Tint::Red,
            SeverityTier::VeryUnhealthy => Tint::Purple,
            SeverityTier::Hazardous => Tint::Maroon,
        }
    }
}

impl Tint {
    /// Lowercase color name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Tint::Green => "green",
            Tint::Yellow => "yellow",
            Tint::Orange => "orange",
            Tint::Red => "red",
            Tint::Purple => "purple",
            Tint::Maroon => "maroon",
            Tint::Neutral => "gray",
        }
    }

    /// Hex value for marker rendering.
    #[must_use]
    pub fn hex(self) -> &'static str {
        match self {
            Tint::Green => "#009966",
            Tint::Yellow => "#ffde33",
            Tint::Orange => "#ff9933",
            Tint::Red => "#cc0033",
            Tint::Purple => "#660099",
            Tint::Maroon => "#7e0023",
            Tint::Neutral => "#9e9e9e",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, SeverityTier::Good)]
    #[case(42, SeverityTier::Good)]
    #[case(50, SeverityTier::Good)]
    #[case(51, SeverityTier::Moderate)]
    #[case(100, SeverityTier::Moderate)]
    #[case(101, SeverityTier::UnhealthyForSensitive)]
    #[case(150, SeverityTier::UnhealthyForSensitive)]
    #[case(151, SeverityTier::Unhealthy)]
    #[case(200, SeverityTier::Unhealthy)]
    #[case(201, SeverityTier::VeryUnhealthy)]
    #[case(300, SeverityTier::VeryUnhealthy)]
    #[case(301, SeverityTier::Hazardous)]
    #[case(999, SeverityTier::Hazardous)]
    #[case(u32::MAX, SeverityTier::Hazardous)]
    fn test_tier_boundaries(#[case] index: u32, #[case] expected: SeverityTier) {
        assert_eq!(SeverityTier::from_index(index), expected);
    }

    #[test]
    fn test_bounds_partition_without_gaps_or_overlaps() {
        // Each bounded tier ends exactly one below the next tier's range.
        for pair in SeverityTier::ALL.windows(2) {
            let bound = pair[0].upper_bound().expect("only the top tier is unbounded");
            assert_eq!(SeverityTier::from_index(bound), pair[0]);
            assert_eq!(SeverityTier::from_index(bound + 1), pair[1]);
        }
        assert!(SeverityTier::ALL.last().unwrap().upper_bound().is_none());
    }

    #[test]
    fn test_classification_is_total_and_monotonic() {
        let mut previous = SeverityTier::from_index(0);
        for index in 1..=500 {
            let tier = SeverityTier::from_index(index);
            assert!(tier >= previous, "tier regressed at index {index}");
            previous = tier;
        }
    }

    #[test]
    fn test_every_tier_has_a_distinct_tint() {
        let tints: Vec<Tint> = SeverityTier::ALL.iter().map(|t| t.tint()).collect();
        for (i, a) in tints.iter().enumerate() {
            assert_ne!(*a, Tint::Neutral);
            for b in &tints[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_neutral_tint_display_values() {
        assert_eq!(Tint::Neutral.name(), "gray");
        assert_eq!(Tint::Neutral.hex(), "#9e9e9e");
    }
}
