//! Token pair model for OAuth 1.0a request and access credentials.

pub mod pair;
pub mod secret;

pub use pair::*;
pub use secret::*;
