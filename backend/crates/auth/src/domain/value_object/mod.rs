//! Value Objects

pub mod email;
pub mod user_password;
pub mod username;

// Re-exports
pub use email::Email;
pub use user_password::{RawPassword, UserPassword};
pub use username::Username;
