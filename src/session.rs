//! Session persistence contracts and built-in session store implementations.
//!
//! A session owns at most one token pair: the temporary pair while a redirect
//! is pending, or the access pair after the callback completed. Stores never
//! interpret the pair; they only move it in and out of the caller's session
//! scope.

pub mod file;
pub mod memory;

pub use file::FileSession;
pub use memory::MemorySession;

// self
use crate::{_prelude::*, auth::TokenPair};

/// Future type returned by [`SessionStore`] methods.
pub type SessionFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SessionError>> + 'a + Send>>;

/// Persistence contract for the session-scoped token pair.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Persists or replaces the session's token pair.
	fn save_tokens(&self, pair: TokenPair) -> SessionFuture<'_, ()>;

	/// Fetches the persisted token pair, if present.
	fn fetch_tokens(&self) -> SessionFuture<'_, Option<TokenPair>>;

	/// Removes the persisted token pair.
	fn clear_tokens(&self) -> SessionFuture<'_, ()>;
}

/// Entry persisted by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
	/// Token pair owned by the session.
	pub pair: TokenPair,
	/// Instant the pair was written.
	pub issued_at: OffsetDateTime,
}
impl SessionRecord {
	/// Stamps a new record with the current time.
	pub fn now(pair: TokenPair) -> Self {
		Self { pair, issued_at: OffsetDateTime::now_utc() }
	}
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum SessionError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the session engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::error::Error;

	#[test]
	fn session_error_converts_into_adapter_error_with_source() {
		let session_error = SessionError::Backend { message: "session engine unreachable".into() };
		let adapter_error: Error = session_error.clone().into();

		assert!(matches!(adapter_error, Error::Session(_)));
		assert!(adapter_error.to_string().contains("session engine unreachable"));

		let source = StdError::source(&adapter_error)
			.expect("Adapter error should expose the original session error as its source.");

		assert_eq!(source.to_string(), session_error.to_string());
	}

	#[test]
	fn session_record_serializes_with_timestamp() {
		let record = SessionRecord::now(TokenPair::new("tkn", "sec"));
		let payload =
			serde_json::to_string(&record).expect("Session record should serialize to JSON.");
		let round_trip: SessionRecord = serde_json::from_str(&payload)
			.expect("Serialized session record should deserialize from JSON.");

		assert_eq!(round_trip, record);
	}
}
