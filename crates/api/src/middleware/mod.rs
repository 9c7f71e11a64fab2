//! HTTP middleware stack for the API.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span with method, uri, status and latency)
//! 3. Request ID (add unique ID to each request)
//! 4. CORS (origins from `CORS_ALLOWED_ORIGINS`)

pub mod cors;
pub mod request_id;

pub use cors::cors_layer;
pub use request_id::request_id_middleware;
