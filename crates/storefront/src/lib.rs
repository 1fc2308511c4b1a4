//! Gizmo Depot Storefront library.
//!
//! A deliberately insecure demo storefront built for a capture-the-flag
//! exercise. The cart, login state, and flag gate all live on the "client"
//! side of the line: state is plain JSON in an origin-local key-value store,
//! and every check can be bypassed by anyone who can write to that store.
//!
//! There is no server and no network protocol. A view layer (whatever renders
//! the catalog and cart) calls the store mutators here and re-reads state
//! afterwards; the library never pushes updates.
//!
//! # Modules
//!
//! - [`catalog`] - The static product list
//! - [`cart`] - The persisted cart store
//! - [`storage`] - The key-value storage collaborator
//! - [`auth`] - The fake, client-side admin gate
//! - [`admin`] - Flag reveal and dashboard data
//! - [`error`] - Error taxonomy

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod storage;
