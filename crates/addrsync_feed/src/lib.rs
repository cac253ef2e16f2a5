//! # AddrSync Feed
//!
//! Change records, result variants, and query policies for the addrsync
//! synchronization feed.
//!
//! This crate provides:
//! - [`ChangeRecord`] and [`AddressSnapshot`], the records of the
//!   append-only change log
//! - [`FeedItem`], the four result shapes over the base, event, and object
//!   facets
//! - [`EmbedIntent`] shape selection from caller-supplied embed strings
//! - [`SortField`] whitelist and [`FeedFilter`] cursor bound
//! - [`project`], the record-to-variant projector
//!
//! This is a pure model crate with no I/O operations.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod embed;
mod filter;
mod item;
mod project;
mod record;
mod sort;

pub use embed::EmbedIntent;
pub use filter::FeedFilter;
pub use item::{FeedItem, ItemBase};
pub use project::project;
pub use record::{
    AddressSnapshot, AddressStatus, ChangeRecord, ChangeType, GeometryPoint, PositionMethod,
    PositionSpecification,
};
pub use sort::{SortField, SORTABLE_FIELDS};
