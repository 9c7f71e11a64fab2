//! Retail Hub API library.
//!
//! HTTP CRUD layer over one SQLite data file holding restaurant
//! point-of-sale tables (products, orders, order items, inventory, users)
//! and e-commerce tables (customers, orders, order items).
//!
//! Exposed as a library so the server binary, the operator CLI and the
//! integration tests share the same router and repositories.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
