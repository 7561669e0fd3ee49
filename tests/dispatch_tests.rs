//! Integration tests for the emergency flow and hospital directory
//!
//! Covers the countdown, the dispatch summary data and search

use ambulance_vibe::config::AppConfig;
use ambulance_vibe::dispatch::{DispatchDetails, DispatchPhase, DispatchSequence};
use ambulance_vibe::hospitals::{self, DIRECTORY};
use ambulance_vibe::location::Coordinates;

mod countdown_tests {
    use super::*;

    #[test]
    fn test_default_countdown_runs_five_ticks() {
        let config = AppConfig::default();
        let mut sequence = DispatchSequence::new(config.countdown_secs);
        let mut seen = vec![sequence.remaining()];

        while let DispatchPhase::CountingDown { remaining } = sequence.tick() {
            seen.push(remaining);
        }

        assert_eq!(seen, vec![5, 4, 3, 2, 1]);
        assert_eq!(sequence.phase(), DispatchPhase::Dispatched);
        assert!(sequence.dispatched_at().is_some());
    }

    #[test]
    fn test_dispatch_time_is_fixed_once_set() {
        let mut sequence = DispatchSequence::new(1);
        sequence.tick();
        let first = sequence.dispatched_at();
        sequence.tick();
        sequence.tick();
        assert_eq!(sequence.dispatched_at(), first);
        assert_eq!(sequence.remaining(), 0);
    }

    #[test]
    fn test_summary_matches_home_location() {
        let details = DispatchDetails::default();
        assert_eq!(details.location, Coordinates::default());
        assert_eq!(details.eta_label(), "8 minutes");
        assert_eq!(details.location.to_string(), "Lat: 19.076722, Lng: 72.909870");
    }
}

mod directory_tests {
    use super::*;

    #[test]
    fn test_blank_search_lists_everything_in_order() {
        let ids: Vec<u32> = hospitals::search("  ").iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_search_by_address() {
        let found = hospitals::search("THANE");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Thane Community Hospital");
        assert!(!found[0].emergency);
    }

    #[test]
    fn test_search_by_name_fragment() {
        let names: Vec<&str> = hospitals::search("medical").iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["Apex Medical Center", "Sunshine Medical Clinic"]);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(hospitals::search("Pune").is_empty());
    }

    #[test]
    fn test_ratings_render_within_five_stars() {
        for hospital in DIRECTORY {
            assert!(hospital.full_stars() <= 5);
            assert!(hospital.rating >= hospital.full_stars() as f32);
        }
    }
}
