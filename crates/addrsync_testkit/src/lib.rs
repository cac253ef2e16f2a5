//! # AddrSync Testkit
//!
//! Test fixtures and property-test generators for addrsync.
//!
//! This crate provides:
//! - [`fixtures`]: deterministic record and snapshot builders
//! - [`generators`]: proptest strategies maintaining feed invariants
//!
//! Intended as a dev-dependency of the other workspace crates.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
