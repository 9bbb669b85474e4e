//! Merging grouped entries into contiguous holiday spans.

use tracing::warn;

use crate::event::{MergedHoliday, RawEvent};
use crate::group::{CanonicalGroup, group_events};

/// Merge one group's entries into minimal non-overlapping spans.
///
/// Entries are sorted by start date (stably). An entry starting on or
/// before the running span's exclusive end extends it, so entries on
/// consecutive days fuse. Every span is labelled `key` and keeps the
/// description of its first entry. Entries whose end is not after their
/// start cover no day and are dropped.
pub fn merge_group(key: &str, events: &[RawEvent]) -> Vec<MergedHoliday> {
    let mut sorted: Vec<&RawEvent> = events
        .iter()
        .filter(|event| {
            let covers_a_day = event.start < event.end;
            if !covers_a_day {
                warn!(
                    summary = %event.summary,
                    start = %event.start,
                    end = %event.end,
                    "Skipping entry with an empty date range"
                );
            }
            covers_a_day
        })
        .collect();
    sorted.sort_by_key(|event| event.start);

    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    let mut current = span_from(key, first);

    for event in iter {
        if event.start <= current.end {
            current.end = current.end.max(event.end);
        } else {
            merged.push(std::mem::replace(&mut current, span_from(key, event)));
        }
    }

    merged.push(current);
    merged
}

fn span_from(key: &str, event: &RawEvent) -> MergedHoliday {
    MergedHoliday {
        summary: key.to_string(),
        description: event.description.clone(),
        start: event.start,
        end: event.end,
    }
}

/// Merge every group, concatenating spans in group creation order.
pub fn merge_groups(groups: &[CanonicalGroup]) -> Vec<MergedHoliday> {
    groups
        .iter()
        .flat_map(|group| merge_group(&group.key, &group.events))
        .collect()
}

/// Group and merge a flat list of raw entries.
pub fn merge_holidays(events: impl IntoIterator<Item = RawEvent>) -> Vec<MergedHoliday> {
    merge_groups(&group_events(events))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn event(summary: &str, description: &str, start: NaiveDate, end: NaiveDate) -> RawEvent {
        RawEvent::new(summary, description, start, end)
    }

    #[test]
    fn test_merge_group_fuses_consecutive_days() {
        let spans = merge_group(
            "Christmas Day",
            &[
                event("Christmas Day", "", date(12, 25), date(12, 26)),
                event("Christmas Day", "", date(12, 26), date(12, 27)),
            ],
        );

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].start, date(12, 25));
        assert_eq!(spans[0].end, date(12, 27));
    }

    #[test]
    fn test_merge_group_keeps_gaps() {
        let spans = merge_group(
            "New Year",
            &[
                event("New Year", "", date(1, 1), date(1, 2)),
                event("New Year", "", date(1, 3), date(1, 4)),
            ],
        );

        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].start, spans[0].end), (date(1, 1), date(1, 2)));
        assert_eq!((spans[1].start, spans[1].end), (date(1, 3), date(1, 4)));
    }

    #[test]
    fn test_merge_group_sorts_and_handles_overlap() {
        let spans = merge_group(
            "Golden Week",
            &[
                event("Golden Week", "third", date(5, 3), date(5, 4)),
                event("Golden Week", "first", date(4, 29), date(5, 4)),
                event("Golden Week", "second", date(5, 1), date(5, 2)),
            ],
        );

        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (date(4, 29), date(5, 4)));
        assert_eq!(spans[0].description, "first");
    }

    #[test]
    fn test_merge_group_uses_key_and_first_description_per_span() {
        let spans = merge_group(
            "Lunar New Year",
            &[
                event("Lunar New Year", "Public holiday", date(2, 10), date(2, 11)),
                event("Lunar New Year Holiday", "Observance", date(2, 11), date(2, 12)),
                event("Lunar New Year Holiday", "Next year", date(2, 20), date(2, 21)),
            ],
        );

        assert_eq!(spans.len(), 2);
        assert!(spans.iter().all(|s| s.summary == "Lunar New Year"));
        assert_eq!(spans[0].description, "Public holiday");
        assert_eq!(spans[1].description, "Next year");
    }

    #[test]
    fn test_merge_group_stable_for_equal_starts() {
        let spans = merge_group(
            "Easter",
            &[
                event("Easter", "a", date(4, 1), date(4, 2)),
                event("Easter Day", "b", date(4, 1), date(4, 3)),
            ],
        );

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].description, "a");
        assert_eq!(spans[0].end, date(4, 3));
    }

    #[test]
    fn test_merge_group_single_event() {
        let spans = merge_group("Easter", &[event("Easter", "x", date(4, 1), date(4, 2))]);
        assert_eq!(
            spans,
            vec![MergedHoliday {
                summary: "Easter".to_string(),
                description: "x".to_string(),
                start: date(4, 1),
                end: date(4, 2),
            }]
        );
    }

    #[test]
    fn test_merge_group_empty() {
        assert!(merge_group("Nothing", &[]).is_empty());
    }

    #[test]
    fn test_merge_group_drops_empty_and_inverted_ranges() {
        let spans = merge_group(
            "Easter",
            &[
                event("Easter", "inverted", date(4, 3), date(4, 1)),
                event("Easter", "empty", date(4, 1), date(4, 1)),
                event("Easter", "kept", date(4, 1), date(4, 2)),
            ],
        );

        assert_eq!(spans.len(), 1);
        assert_eq!((spans[0].start, spans[0].end), (date(4, 1), date(4, 2)));
        assert_eq!(spans[0].description, "kept");

        let only_inverted = merge_holidays(vec![event("Easter", "", date(4, 3), date(4, 1))]);
        assert!(only_inverted.is_empty());
    }

    #[test]
    fn test_merge_holidays_end_to_end() {
        let spans = merge_holidays(vec![
            event("Lunar New Year", "", date(1, 1), date(1, 2)),
            event("Lunar New Year Holiday", "", date(1, 2), date(1, 3)),
            event("Easter", "", date(4, 1), date(4, 2)),
        ]);

        assert_eq!(
            spans,
            vec![
                MergedHoliday {
                    summary: "Lunar New Year".to_string(),
                    description: String::new(),
                    start: date(1, 1),
                    end: date(1, 3),
                },
                MergedHoliday {
                    summary: "Easter".to_string(),
                    description: String::new(),
                    start: date(4, 1),
                    end: date(4, 2),
                },
            ]
        );
    }

    fn arb_event() -> impl Strategy<Value = RawEvent> {
        (
            prop::sample::select(vec!["Eid", "Eid al-Fitr", "Eid al-Adha", "Labour Day", "Easter"]),
            0u32..60,
            1u32..4,
        )
            .prop_map(|(summary, offset, len)| {
                let start = date(1, 1) + chrono::Duration::days(offset as i64);
                RawEvent::new(summary, "", start, start + chrono::Duration::days(len as i64))
            })
    }

    proptest! {
        #[test]
        fn prop_merged_spans_are_disjoint_and_separated(events in prop::collection::vec(arb_event(), 0..30)) {
            let groups = group_events(events);
            for group in &groups {
                let spans = merge_group(&group.key, &group.events);
                for span in &spans {
                    prop_assert!(span.start < span.end);
                    prop_assert_eq!(&span.summary, &group.key);
                }
                for pair in spans.windows(2) {
                    // A gap of at least one day separates consecutive spans
                    prop_assert!(pair[0].end < pair[1].start);
                }
                // Every entry's days are covered by some span
                for event in &group.events {
                    prop_assert!(spans.iter().any(|s| s.start <= event.start && event.end <= s.end));
                }
            }
        }

        #[test]
        fn prop_merge_holidays_is_deterministic(events in prop::collection::vec(arb_event(), 0..30)) {
            prop_assert_eq!(merge_holidays(events.clone()), merge_holidays(events));
        }
    }
}
