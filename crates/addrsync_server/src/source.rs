//! The record source boundary.

use crate::error::SourceError;
use addrsync_feed::{ChangeRecord, EmbedIntent, FeedFilter};

/// A bounded window into a filtered record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Records to skip after filtering.
    pub offset: usize,
    /// Maximum records to return.
    pub limit: usize,
}

impl Window {
    /// Creates a window.
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }
}

/// The append-only, ordered origin of change records the engine reads from.
///
/// # Contract
///
/// - Returned records are ascending by position and all satisfy `filter`.
/// - At most `window.limit` records are returned, after skipping
///   `window.offset` filtered records.
/// - `shape` names the facets the caller will project. A source may prune
///   the payloads of unselected facets (event text, entity snapshot) before
///   returning records, so those columns never leave the storage layer.
/// - Repeated calls with the same arguments against an unchanged source
///   return identical sequences; records already emitted are never
///   reordered or removed.
///
/// Implementations must not retry on failure; retry policy belongs to the
/// caller or a surrounding resilience layer.
pub trait RecordSource: Send + Sync {
    /// Fetches a window of filtered records in position order.
    fn fetch(
        &self,
        filter: &FeedFilter,
        window: Window,
        shape: EmbedIntent,
    ) -> Result<Vec<ChangeRecord>, SourceError>;

    /// Returns the highest position in the source, or 0 when empty.
    fn latest_position(&self) -> Result<u64, SourceError>;
}
