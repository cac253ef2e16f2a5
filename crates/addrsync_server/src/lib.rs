//! # AddrSync Server
//!
//! Feed query engine and service facade for the addrsync feed.
//!
//! This crate provides:
//! - [`RecordSource`], the storage boundary the engine reads from
//! - [`ChangeLog`], an in-memory append-only record source
//! - [`FeedEngine`], the query engine composing filter, sort, shape, and
//!   projection into one page fetch
//! - [`FeedServer`], the transport-agnostic facade
//!
//! # Architecture
//!
//! A request carries an optional cursor (inclusive minimum position), a
//! free-text embed intent, and a page window. The engine:
//! 1. Validates the sort parameter against the whitelist (position only).
//! 2. Resolves and validates the page window.
//! 3. Parses the embed intent into the two facet flags.
//! 4. Fetches one filtered, windowed slice from the record source, handing
//!    the shape down so unselected facet payloads are pruned at the source.
//! 5. Projects each record into the selected result variant.
//! 6. Returns the page plus a resume cursor (last position + 1).
//!
//! # Key invariants
//!
//! - Items are always ascending by position; no other order is reachable.
//! - Repeated requests against an unchanged log return identical pages.
//! - A bad request fails that request only; the engine holds no state.

#![deny(unsafe_code)]
#![warn(missing_docs)]
// Production code MUST NOT use panic!/unwrap()/expect().
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod changelog;
mod config;
mod engine;
mod error;
mod server;
mod source;

pub use changelog::ChangeLog;
pub use config::FeedConfig;
pub use engine::{FeedEngine, FeedPage, FeedRequest, PageInfo};
pub use error::{AppendError, FeedError, FeedResult, SourceError};
pub use server::FeedServer;
pub use source::{RecordSource, Window};
