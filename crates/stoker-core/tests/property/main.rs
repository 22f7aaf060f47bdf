//! Property tests: time-entry and sequence caps hold under any input stream.

use proptest::prelude::*;

use stoker_core::constants::{MAX_SEQUENCE_HISTORY, MAX_TIME_ENTRIES_PER_SCREEN};
use stoker_core::UserPattern;

proptest! {
    #[test]
    fn prop_time_entries_capped_at_most_recent(
        hours in prop::collection::vec(0u32..24, 1..300)
    ) {
        let mut pattern = UserPattern::default();
        for hour in &hours {
            pattern.record_visit("Dashboard", *hour);
        }

        let stored = &pattern.time_patterns["Dashboard"];
        prop_assert!(stored.len() <= MAX_TIME_ENTRIES_PER_SCREEN);

        // The retained entries are always the most recent ones, in order.
        let expected: Vec<u32> = hours
            .iter()
            .copied()
            .skip(hours.len().saturating_sub(MAX_TIME_ENTRIES_PER_SCREEN))
            .collect();
        prop_assert_eq!(stored, &expected);

        // Visit counts track every call, not just the retained window.
        prop_assert_eq!(pattern.screen_visits["Dashboard"] as usize, hours.len());
    }

    #[test]
    fn prop_sequences_capped_fifo(
        count in 1usize..120
    ) {
        let mut pattern = UserPattern::default();
        for i in 0..count {
            pattern.record_sequence(vec![format!("Screen{i}")]);
        }

        prop_assert!(pattern.sequence_patterns.len() <= MAX_SEQUENCE_HISTORY);

        // Oldest sequences are evicted first.
        let first_kept = count.saturating_sub(MAX_SEQUENCE_HISTORY);
        prop_assert_eq!(
            &pattern.sequence_patterns[0],
            &vec![format!("Screen{first_kept}")]
        );
        let last = pattern.sequence_patterns.len() - 1;
        prop_assert_eq!(
            &pattern.sequence_patterns[last],
            &vec![format!("Screen{}", count - 1)]
        );
    }

    #[test]
    fn prop_pattern_survives_json_roundtrip(
        screens in prop::collection::vec("[A-Za-z]{3,12}", 1..20),
        hours in prop::collection::vec(0u32..24, 1..20)
    ) {
        let mut pattern = UserPattern::default();
        for (screen, hour) in screens.iter().zip(hours.iter().cycle()) {
            pattern.record_visit(screen, *hour);
        }

        let raw = serde_json::to_string(&pattern).unwrap();
        let restored: UserPattern = serde_json::from_str(&raw).unwrap();

        prop_assert_eq!(&restored, &pattern);

        // Insertion order of screens survives the round trip.
        let before: Vec<&String> = pattern.screen_visits.keys().collect();
        let after: Vec<&String> = restored.screen_visits.keys().collect();
        prop_assert_eq!(before, after);
    }
}
