//! Business logic services.
//!
//! - `password` - Argon2id hashing for POS user passwords

pub mod password;
