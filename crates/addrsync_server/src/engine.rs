//! The feed query engine.

use crate::config::FeedConfig;
use crate::error::{FeedError, FeedResult};
use crate::source::{RecordSource, Window};
use addrsync_feed::{project, EmbedIntent, FeedFilter, FeedItem, SortField};
use serde::Serialize;
use std::sync::Arc;

/// A feed request, in the logical shape of the query parameters.
///
/// Absent fields fall back to their defaults: no position bound, base-only
/// shape, position-ascending order, first page at the configured size.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedRequest {
    /// Inclusive lower bound on record positions.
    pub min_position: Option<u64>,
    /// Raw embed parameter selecting the event/object facets.
    pub embed: Option<String>,
    /// Raw sort parameter, validated against the whitelist.
    pub sort: Option<String>,
    /// 1-based page number.
    pub page_number: Option<u32>,
    /// Page size, bounded by the configured maximum.
    pub page_size: Option<u32>,
}

impl FeedRequest {
    /// Creates a request with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive minimum position.
    pub fn with_min_position(mut self, min_position: u64) -> Self {
        self.min_position = Some(min_position);
        self
    }

    /// Sets the raw embed parameter.
    pub fn with_embed(mut self, embed: impl Into<String>) -> Self {
        self.embed = Some(embed.into());
        self
    }

    /// Sets the raw sort parameter.
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sets the page window.
    pub fn with_page(mut self, number: u32, size: u32) -> Self {
        self.page_number = Some(number);
        self.page_size = Some(size);
        self
    }
}

/// Pagination metadata returned with every page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// 1-based page number that was served.
    pub page_number: u32,
    /// Page size that was applied.
    pub page_size: u32,
    /// Whether more records exist past this page.
    pub has_more: bool,
    /// Bound to pass as `min_position` to resume after this page.
    ///
    /// This is the last returned position plus one, since the bound is
    /// inclusive; echoing it back yields no duplicates and no gaps. `None`
    /// on an empty page — nothing was consumed, so the client keeps its
    /// previous cursor.
    pub next_min_position: Option<u64>,
}

/// A page of feed results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedPage {
    /// Items in ascending position order.
    pub items: Vec<FeedItem>,
    /// Pagination metadata.
    pub info: PageInfo,
}

/// The feed query engine.
///
/// Stateless: each request builds its own filter, window, and shape, and
/// composes them into a single source fetch followed by a pure projection.
/// Concurrent queries share nothing but the read-only source.
pub struct FeedEngine<S> {
    source: Arc<S>,
    config: FeedConfig,
}

impl<S: RecordSource> FeedEngine<S> {
    /// Creates an engine over a record source.
    pub fn new(source: Arc<S>, config: FeedConfig) -> Self {
        Self { source, config }
    }

    /// Serves one page of the feed.
    ///
    /// Order is always position-ascending regardless of the sort parameter;
    /// the parameter exists only to be validated, so a request naming any
    /// other field is rejected rather than silently honored.
    pub fn query(&self, request: &FeedRequest) -> FeedResult<FeedPage> {
        if let Some(raw) = request.sort.as_deref() {
            SortField::parse(raw)
                .ok_or_else(|| FeedError::UnsupportedSortField(raw.to_string()))?;
        }

        let (page_number, page_size, window) = self.resolve_window(request)?;
        let shape = EmbedIntent::parse(request.embed.as_deref());
        let filter = FeedFilter {
            min_position: request.min_position,
        };

        // The window is one row wider than the page; the extra row only
        // signals has_more and is discarded.
        let mut records = self.source.fetch(&filter, window, shape)?;
        let has_more = records.len() > page_size as usize;
        records.truncate(page_size as usize);

        tracing::debug!(
            min_position = ?filter.min_position,
            page_number,
            page_size,
            event = shape.event,
            object = shape.object,
            returned = records.len(),
            has_more,
            "serving feed page"
        );

        let items: Vec<FeedItem> = records.iter().map(|r| project(r, shape)).collect();
        let next_min_position = items.last().map(|item| item.position() + 1);

        Ok(FeedPage {
            items,
            info: PageInfo {
                page_number,
                page_size,
                has_more,
                next_min_position,
            },
        })
    }

    /// Resolves and validates the pagination parameters.
    fn resolve_window(&self, request: &FeedRequest) -> FeedResult<(u32, u32, Window)> {
        let page_number = request.page_number.unwrap_or(1);
        if page_number == 0 {
            return Err(FeedError::InvalidPageRequest(
                "page number must be at least 1".into(),
            ));
        }

        let page_size = request.page_size.unwrap_or(self.config.default_page_size);
        if page_size == 0 {
            return Err(FeedError::InvalidPageRequest(
                "page size must be at least 1".into(),
            ));
        }
        if page_size > self.config.max_page_size {
            return Err(FeedError::PageSizeTooLarge {
                requested: page_size,
                max: self.config.max_page_size,
            });
        }

        let offset = u64::from(page_number - 1)
            .checked_mul(u64::from(page_size))
            .and_then(|offset| usize::try_from(offset).ok())
            .ok_or_else(|| FeedError::InvalidPageRequest("page window out of range".into()))?;

        Ok((
            page_number,
            page_size,
            Window::new(offset, page_size as usize + 1),
        ))
    }
}
