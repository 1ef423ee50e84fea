//! Platform Infrastructure
//!
//! Cross-cutting infrastructure with no domain knowledge:
//! - `password` - one-way password hashing and verification
//! - `cookie` - cookie construction and extraction helpers

pub mod cookie;
pub mod password;
