//! Tests for infestation heatmap aggregation
//! Verifies severity tier boundaries and exact-coordinate grouping

use rust_decimal::Decimal;
use shared::{
    build_heatmap, classify_severity, severity_intensity, ObservationSample, SeverityTier,
};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn sample(lat: &str, lon: &str, severity: &str, organism: &str) -> ObservationSample {
    ObservationSample {
        latitude: dec(lat),
        longitude: dec(lon),
        severity: dec(severity),
        organism_name: organism.to_string(),
    }
}

// =============================================================================
// Severity Tier Boundary Tests
// Bands are lower-bound inclusive, evaluated top-down
// =============================================================================

mod tier_boundaries {
    use super::*;

    #[test]
    fn critical_at_lower_bound() {
        assert_eq!(classify_severity(dec("75.0")), SeverityTier::Critical);
    }

    #[test]
    fn high_just_below_critical() {
        assert_eq!(classify_severity(dec("74.999")), SeverityTier::High);
    }

    #[test]
    fn high_at_lower_bound() {
        assert_eq!(classify_severity(dec("50")), SeverityTier::High);
    }

    #[test]
    fn medium_at_lower_bound() {
        assert_eq!(classify_severity(dec("25")), SeverityTier::Medium);
    }

    #[test]
    fn medium_just_below_high() {
        assert_eq!(classify_severity(dec("49.99")), SeverityTier::Medium);
    }

    #[test]
    fn low_just_below_medium() {
        assert_eq!(classify_severity(dec("24.9999")), SeverityTier::Low);
    }

    #[test]
    fn low_at_zero() {
        assert_eq!(classify_severity(Decimal::ZERO), SeverityTier::Low);
    }

    #[test]
    fn critical_at_scale_maximum() {
        assert_eq!(classify_severity(dec("100")), SeverityTier::Critical);
    }

    #[test]
    fn tier_colors() {
        assert_eq!(SeverityTier::Critical.color(), "#FF0000");
        assert_eq!(SeverityTier::High.color(), "#FF9800");
        assert_eq!(SeverityTier::Medium.color(), "#FFEB3B");
        assert_eq!(SeverityTier::Low.color(), "#4CAF50");
    }

    #[test]
    fn tier_display_names() {
        assert_eq!(format!("{}", SeverityTier::Critical), "critical");
        assert_eq!(format!("{}", SeverityTier::High), "high");
        assert_eq!(format!("{}", SeverityTier::Medium), "medium");
        assert_eq!(format!("{}", SeverityTier::Low), "low");
    }
}

// =============================================================================
// Intensity Tests
// Intensity is severity / 100 regardless of tier
// =============================================================================

mod intensity {
    use super::*;

    #[test]
    fn zero_severity_gives_zero_intensity() {
        assert_eq!(severity_intensity(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn full_severity_gives_full_intensity() {
        assert_eq!(severity_intensity(dec("100")), Decimal::ONE);
    }

    #[test]
    fn intensity_is_severity_over_one_hundred() {
        assert_eq!(severity_intensity(dec("42.5")), dec("0.425"));
        assert_eq!(severity_intensity(dec("75")), dec("0.75"));
    }
}

// =============================================================================
// Exact-Coordinate Grouping Tests
// =============================================================================

mod grouping {
    use super::*;

    #[test]
    fn same_coordinate_observations_merge() {
        let samples = vec![
            sample("-23.5505", "-46.6333", "80", "Ferrugem"),
            sample("-23.5505", "-46.6333", "40", "Broca-do-café"),
        ];

        let points = build_heatmap(&samples);

        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.average_severity, dec("60"));
        assert_eq!(point.occurrence_count, 2);
        assert_eq!(point.intensity, dec("0.6"));
        assert_eq!(point.tier, SeverityTier::High);
        assert_eq!(point.color, "#FF9800");
        assert_eq!(point.organisms, vec!["Ferrugem", "Broca-do-café"]);
    }

    #[test]
    fn fractional_coordinate_difference_splits_groups() {
        let samples = vec![
            sample("-23.5505", "-46.6333", "80", "Ferrugem"),
            sample("-23.5506", "-46.6333", "80", "Ferrugem"),
        ];

        let points = build_heatmap(&samples);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].occurrence_count, 1);
        assert_eq!(points[1].occurrence_count, 1);
    }

    #[test]
    fn longitude_fraction_also_splits() {
        let samples = vec![
            sample("-23.5505", "-46.6333", "30", "Cigarra"),
            sample("-23.5505", "-46.63330001", "30", "Cigarra"),
        ];

        assert_eq!(build_heatmap(&samples).len(), 2);
    }

    #[test]
    fn duplicate_organism_listed_once() {
        let samples = vec![
            sample("-23.5505", "-46.6333", "20", "Ferrugem"),
            sample("-23.5505", "-46.6333", "30", "Ferrugem"),
        ];

        let points = build_heatmap(&samples);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].organisms, vec!["Ferrugem"]);
    }

    #[test]
    fn points_come_out_in_first_seen_order() {
        let samples = vec![
            sample("-10.0", "-50.0", "10", "A"),
            sample("-11.0", "-51.0", "10", "B"),
            sample("-10.0", "-50.0", "10", "A"),
            sample("-12.0", "-52.0", "10", "C"),
        ];

        let points = build_heatmap(&samples);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0].latitude, dec("-10.0"));
        assert_eq!(points[1].latitude, dec("-11.0"));
        assert_eq!(points[2].latitude, dec("-12.0"));
        assert_eq!(points[0].occurrence_count, 2);
    }

    #[test]
    fn single_observation_keeps_its_severity() {
        let samples = vec![sample("-23.5505", "-46.6333", "87.5", "Bicho-mineiro")];

        let points = build_heatmap(&samples);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].average_severity, dec("87.5"));
        assert_eq!(points[0].tier, SeverityTier::Critical);
        assert_eq!(points[0].color, "#FF0000");
        assert_eq!(points[0].intensity, dec("0.875"));
    }

    #[test]
    fn empty_input_yields_empty_heatmap() {
        assert!(build_heatmap(&[]).is_empty());
    }

    #[test]
    fn averaging_crosses_tier_boundary() {
        // 90 and 70 average to 80, which is Critical even though one
        // observation alone would be High
        let samples = vec![
            sample("-23.5505", "-46.6333", "90", "Ferrugem"),
            sample("-23.5505", "-46.6333", "70", "Ferrugem"),
        ];

        let points = build_heatmap(&samples);

        assert_eq!(points[0].average_severity, dec("80"));
        assert_eq!(points[0].tier, SeverityTier::Critical);
    }
}

// =============================================================================
// Property Tests
// =============================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn intensity_always_in_unit_range(raw in 0i64..=100_000i64) {
            let severity = Decimal::new(raw, 3);
            let intensity = severity_intensity(severity);
            prop_assert!(intensity >= Decimal::ZERO);
            prop_assert!(intensity <= Decimal::ONE);
        }

        #[test]
        fn tiers_partition_the_scale(raw in 0i64..=100_000i64) {
            let severity = Decimal::new(raw, 3);
            let expected = if raw >= 75_000 {
                SeverityTier::Critical
            } else if raw >= 50_000 {
                SeverityTier::High
            } else if raw >= 25_000 {
                SeverityTier::Medium
            } else {
                SeverityTier::Low
            };
            prop_assert_eq!(classify_severity(severity), expected);
        }

        #[test]
        fn grouped_average_stays_within_observed_range(
            severities in proptest::collection::vec(0i64..=100_000i64, 1..20)
        ) {
            let samples: Vec<ObservationSample> = severities
                .iter()
                .map(|&raw| ObservationSample {
                    latitude: dec("-23.5505"),
                    longitude: dec("-46.6333"),
                    severity: Decimal::new(raw, 3),
                    organism_name: "Ferrugem".to_string(),
                })
                .collect();

            let points = build_heatmap(&samples);
            prop_assert_eq!(points.len(), 1);

            let min = Decimal::new(*severities.iter().min().unwrap(), 3);
            let max = Decimal::new(*severities.iter().max().unwrap(), 3);
            prop_assert!(points[0].average_severity >= min);
            prop_assert!(points[0].average_severity <= max);
            prop_assert_eq!(points[0].occurrence_count, severities.len() as i64);
        }
    }
}
