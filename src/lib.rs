//! Single-provider OAuth 1.0a login/attach/register adapter with pluggable session stores,
//! typed failure reasons, and an HTTP-client-agnostic provider seam.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod error;
pub mod flows;
pub mod obs;
pub mod request;
pub mod session;
pub mod user;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and fixtures for tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{ProviderId, TokenPair},
		session::MemorySession,
	};

	/// Provider identifier shared by test fixtures.
	pub fn test_provider() -> ProviderId {
		ProviderId::new("twitter").expect("Provider fixture should be valid.")
	}

	/// Builds a memory session already holding a persisted token pair.
	pub fn seeded_memory_session(token: &str, secret: &str) -> Arc<MemorySession> {
		Arc::new(MemorySession::seeded(TokenPair::new(token, secret)))
	}
}

mod _prelude {
	pub use std::{
		collections::HashMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use url;
#[cfg(test)] use tokio as _;
