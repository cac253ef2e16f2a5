//! The feed server facade.

use crate::changelog::ChangeLog;
use crate::config::FeedConfig;
use crate::engine::{FeedEngine, FeedPage, FeedRequest};
use crate::error::FeedResult;
use std::sync::Arc;

/// The feed server.
///
/// Owns the change log and the query engine, and exposes the single
/// operation a transport layer mounts: [`handle_feed`](FeedServer::handle_feed).
///
/// # Example
///
/// ```
/// use addrsync_server::{FeedConfig, FeedRequest, FeedServer};
///
/// let server = FeedServer::new(FeedConfig::default());
///
/// // In a real application, an HTTP endpoint would parse its query
/// // parameters into a FeedRequest and call server.handle_feed().
/// let page = server.handle_feed(&FeedRequest::new()).unwrap();
/// assert!(page.items.is_empty());
/// ```
pub struct FeedServer {
    engine: FeedEngine<ChangeLog>,
    log: Arc<ChangeLog>,
}

impl FeedServer {
    /// Creates a feed server with an empty change log.
    pub fn new(config: FeedConfig) -> Self {
        Self::with_log(config, Arc::new(ChangeLog::new()))
    }

    /// Creates a feed server over an existing change log.
    pub fn with_log(config: FeedConfig, log: Arc<ChangeLog>) -> Self {
        Self {
            engine: FeedEngine::new(Arc::clone(&log), config),
            log,
        }
    }

    /// Serves one page of the feed.
    pub fn handle_feed(&self, request: &FeedRequest) -> FeedResult<FeedPage> {
        self.engine.query(request)
    }

    /// Returns the change log backing this server.
    pub fn log(&self) -> &Arc<ChangeLog> {
        &self.log
    }

    /// Returns the highest position in the log, or 0 when empty.
    pub fn latest_position(&self) -> u64 {
        self.log.latest_position()
    }

    /// Returns the number of records in the log.
    pub fn record_count(&self) -> usize {
        self.log.len()
    }
}
