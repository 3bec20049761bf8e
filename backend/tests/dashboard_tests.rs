//! Tests for the farm dashboard organism ranking

use rust_decimal::Decimal;
use shared::{rank_organisms, OrganismSample, TOP_ORGANISMS_LIMIT};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn observations(organism: &str, severities: &[&str]) -> Vec<OrganismSample> {
    severities
        .iter()
        .map(|s| OrganismSample {
            organism_name: organism.to_string(),
            severity: dec(s),
        })
        .collect()
}

// =============================================================================
// Ranking Order Tests
// Frequency is the primary key, not severity
// =============================================================================

mod ranking {
    use super::*;

    #[test]
    fn frequency_beats_severity() {
        // A: 5 observations, average 30. B: 3 observations, average 90.
        let mut samples = observations("Lagarta", &["30", "30", "30", "30", "30"]);
        samples.extend(observations("Percevejo", &["90", "90", "90"]));

        let ranked = rank_organisms(&samples, TOP_ORGANISMS_LIMIT);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].organism_name, "Lagarta");
        assert_eq!(ranked[0].occurrences, 5);
        assert_eq!(ranked[0].average_severity, dec("30"));
        assert_eq!(ranked[1].organism_name, "Percevejo");
        assert_eq!(ranked[1].occurrences, 3);
        assert_eq!(ranked[1].average_severity, dec("90"));
    }

    #[test]
    fn equal_frequency_falls_back_to_name() {
        let mut samples = observations("Percevejo", &["10", "20"]);
        samples.extend(observations("Broca", &["50", "60"]));

        let ranked = rank_organisms(&samples, TOP_ORGANISMS_LIMIT);

        assert_eq!(ranked[0].organism_name, "Broca");
        assert_eq!(ranked[1].organism_name, "Percevejo");
    }

    #[test]
    fn average_severity_is_unweighted_mean() {
        let samples = observations("Ferrugem", &["25", "50", "75"]);

        let ranked = rank_organisms(&samples, TOP_ORGANISMS_LIMIT);

        assert_eq!(ranked[0].average_severity, dec("50"));
    }

    #[test]
    fn truncates_to_requested_limit() {
        let mut samples = Vec::new();
        // Organism N gets N observations so the expected order is 12..=1
        for n in 1..=12 {
            for _ in 0..n {
                samples.push(OrganismSample {
                    organism_name: format!("Organism {:02}", n),
                    severity: dec("40"),
                });
            }
        }

        let ranked = rank_organisms(&samples, TOP_ORGANISMS_LIMIT);

        assert_eq!(ranked.len(), TOP_ORGANISMS_LIMIT);
        assert_eq!(ranked[0].organism_name, "Organism 12");
        assert_eq!(ranked[0].occurrences, 12);
        assert_eq!(ranked[9].organism_name, "Organism 03");
        assert_eq!(ranked[9].occurrences, 3);
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        assert!(rank_organisms(&[], TOP_ORGANISMS_LIMIT).is_empty());
    }

    #[test]
    fn single_organism_single_observation() {
        let samples = observations("Bicho-mineiro", &["66.6"]);

        let ranked = rank_organisms(&samples, TOP_ORGANISMS_LIMIT);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].occurrences, 1);
        assert_eq!(ranked[0].average_severity, dec("66.6"));
    }
}
