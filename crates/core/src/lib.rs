//! Retail Hub Core - Shared types library.
//!
//! This crate provides common types used across all Retail Hub components:
//! - `api` - HTTP CRUD service for the point-of-sale and e-commerce domains
//! - `cli` - Command-line tools for schema setup and user management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. The optional `sqlite` feature adds sqlx encode/decode
//! support so the types can be bound and read directly by the storage layer.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for entity IDs, emails, usernames, and order dates

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
