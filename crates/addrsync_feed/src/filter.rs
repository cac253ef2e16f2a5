//! Cursor filtering over the change log.

/// Caller-supplied constraints on the change log.
///
/// The bound is **inclusive**: a record at exactly `min_position` is
/// returned. Clients resume without duplicates by passing back the
/// `next_min_position` from the previous page, which is the last returned
/// position plus one. An absent bound is the explicit no-filtering state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeedFilter {
    /// Inclusive lower bound on record positions.
    pub min_position: Option<u64>,
}

impl FeedFilter {
    /// A filter that passes everything.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// A filter passing records at or after `min_position`.
    pub fn since(min_position: u64) -> Self {
        Self {
            min_position: Some(min_position),
        }
    }

    /// Returns true if a record at `position` passes the filter.
    pub fn matches(&self, position: u64) -> bool {
        match self.min_position {
            Some(min) => position >= min,
            None => true,
        }
    }
}
