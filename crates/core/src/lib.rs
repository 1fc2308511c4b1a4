//! Gizmo Depot Core - Shared types library.
//!
//! This crate provides common types used across the Gizmo Depot components:
//! - `storefront` - Catalog, cart store, and the (deliberately weak) admin gate
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
