//! Core types for Retail Hub.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod date;
pub mod email;
pub mod id;
pub mod username;

pub use date::{OrderDate, OrderDateError};
pub use email::{Email, EmailError};
pub use id::*;
pub use username::{Username, UsernameError};
