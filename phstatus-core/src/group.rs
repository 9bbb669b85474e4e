//! Grouping raw entries under a canonical label.

use tracing::debug;

use crate::event::RawEvent;
use crate::summary::is_same_summary;

/// Raw entries judged to be the same holiday as `key`.
///
/// `key` is the summary of the first entry that created the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalGroup {
    pub key: String,
    pub events: Vec<RawEvent>,
}

/// Bucket entries by canonical label.
///
/// Each entry joins the first existing group (in creation order) whose key
/// matches its summary, or starts a new group keyed by its own summary.
/// Because [`is_same_summary`] is not transitive, the result depends on
/// input order; for a fixed order it is deterministic.
pub fn group_events(events: impl IntoIterator<Item = RawEvent>) -> Vec<CanonicalGroup> {
    let mut groups: Vec<CanonicalGroup> = Vec::new();

    for event in events {
        match groups
            .iter_mut()
            .find(|group| is_same_summary(&event.summary, &group.key))
        {
            Some(group) => {
                debug!(summary = %event.summary, key = %group.key, "Grouping entry under existing key");
                group.events.push(event);
            }
            None => {
                debug!(summary = %event.summary, "New holiday group");
                groups.push(CanonicalGroup {
                    key: event.summary.clone(),
                    events: vec![event],
                });
            }
        }
    }

    groups
}
