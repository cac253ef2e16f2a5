//! In-memory append-only change log.

use crate::error::{AppendError, SourceError};
use crate::source::{RecordSource, Window};
use addrsync_feed::{ChangeRecord, EmbedIntent, FeedFilter};
use parking_lot::RwLock;

/// An in-memory change log.
///
/// Records are kept in append order with strictly increasing positions.
/// Appended records are never mutated or removed, so reads are stable:
/// repeated fetches with the same bound return the same sequence.
///
/// Positions are assigned by [`append`](ChangeLog::append), or taken from an
/// upstream log via [`append_at`](ChangeLog::append_at) when mirroring a
/// global feed whose positions have gaps.
pub struct ChangeLog {
    /// Records in position order.
    records: RwLock<Vec<ChangeRecord>>,
}

impl ChangeLog {
    /// Creates an empty change log.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Appends a record, assigning the next position.
    ///
    /// Returns the assigned position.
    pub fn append(&self, mut record: ChangeRecord) -> u64 {
        let mut records = self.records.write();
        let position = records.last().map(|r| r.position + 1).unwrap_or(1);
        record.position = position;
        records.push(record);
        position
    }

    /// Appends a record at an explicit upstream position.
    ///
    /// The position must be strictly greater than the latest position in
    /// the log; gaps are fine.
    pub fn append_at(&self, position: u64, mut record: ChangeRecord) -> Result<u64, AppendError> {
        let mut records = self.records.write();
        let latest = records.last().map(|r| r.position).unwrap_or(0);
        if position <= latest {
            return Err(AppendError::NonMonotonic { position, latest });
        }
        record.position = position;
        records.push(record);
        Ok(position)
    }

    /// Returns the highest position in the log, or 0 when empty.
    pub fn latest_position(&self) -> u64 {
        self.records.read().last().map(|r| r.position).unwrap_or(0)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the log is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl Default for ChangeLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops facet payloads the shape does not select, so they never leave
/// the source.
fn prune(record: &ChangeRecord, shape: EmbedIntent) -> ChangeRecord {
    let mut pruned = record.clone();
    if !shape.event {
        pruned.event = None;
    }
    if !shape.object {
        pruned.address = None;
    }
    pruned
}

impl RecordSource for ChangeLog {
    fn fetch(
        &self,
        filter: &FeedFilter,
        window: Window,
        shape: EmbedIntent,
    ) -> Result<Vec<ChangeRecord>, SourceError> {
        let records = self.records.read();
        Ok(records
            .iter()
            .filter(|r| filter.matches(r.position))
            .skip(window.offset)
            .take(window.limit)
            .map(|r| prune(r, shape))
            .collect())
    }

    fn latest_position(&self) -> Result<u64, SourceError> {
        Ok(ChangeLog::latest_position(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use addrsync_testkit::fixtures;

    #[test]
    fn empty_log() {
        let log = ChangeLog::new();
        assert!(log.is_empty());
        assert_eq!(log.latest_position(), 0);
    }

    #[test]
    fn append_assigns_sequential_positions() {
        let log = ChangeLog::new();
        assert_eq!(log.append(fixtures::record(1)), 1);
        assert_eq!(log.append(fixtures::record(2)), 2);
        assert_eq!(log.latest_position(), 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn append_at_accepts_gaps() {
        let log = ChangeLog::new();
        log.append_at(1, fixtures::record(1)).unwrap();
        log.append_at(5, fixtures::record(2)).unwrap();
        assert_eq!(log.latest_position(), 5);

        // Plain append continues after the gap.
        assert_eq!(log.append(fixtures::record(3)), 6);
    }

    #[test]
    fn append_at_rejects_non_monotonic_positions() {
        let log = ChangeLog::new();
        log.append_at(5, fixtures::record(1)).unwrap();

        let err = log.append_at(5, fixtures::record(2)).unwrap_err();
        assert!(matches!(
            err,
            AppendError::NonMonotonic {
                position: 5,
                latest: 5
            }
        ));
        assert!(log.append_at(3, fixtures::record(3)).is_err());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn fetch_applies_filter_and_window() {
        let log = ChangeLog::new();
        for (i, position) in [1u64, 2, 3, 5, 8].into_iter().enumerate() {
            log.append_at(position, fixtures::record(i as u64 + 1)).unwrap();
        }

        let all = log
            .fetch(&FeedFilter::unbounded(), Window::new(0, 10), EmbedIntent::none())
            .unwrap();
        assert_eq!(all.iter().map(|r| r.position).collect::<Vec<_>>(), [1, 2, 3, 5, 8]);

        let since = log
            .fetch(&FeedFilter::since(3), Window::new(0, 10), EmbedIntent::none())
            .unwrap();
        assert_eq!(since.iter().map(|r| r.position).collect::<Vec<_>>(), [3, 5, 8]);

        let windowed = log
            .fetch(&FeedFilter::since(3), Window::new(1, 1), EmbedIntent::none())
            .unwrap();
        assert_eq!(windowed.iter().map(|r| r.position).collect::<Vec<_>>(), [5]);
    }

    #[test]
    fn fetch_prunes_unselected_facets() {
        let log = ChangeLog::new();
        log.append(fixtures::record(1));

        let bare = log
            .fetch(&FeedFilter::unbounded(), Window::new(0, 1), EmbedIntent::none())
            .unwrap();
        assert!(bare[0].event.is_none());
        assert!(bare[0].address.is_none());

        let full = log
            .fetch(&FeedFilter::unbounded(), Window::new(0, 1), EmbedIntent::both())
            .unwrap();
        assert!(full[0].event.is_some());
        assert!(full[0].address.is_some());
    }
}
