//! Thread-safe in-memory [`SessionStore`] for tests and single-process servers.

// self
use crate::{
	_prelude::*,
	auth::TokenPair,
	session::{SessionFuture, SessionRecord, SessionStore},
};

type Slot = Arc<RwLock<Option<SessionRecord>>>;

/// Keeps the session record in-process; one instance per user session.
#[derive(Clone, Debug, Default)]
pub struct MemorySession(Slot);
impl MemorySession {
	/// Builds a session already holding a persisted pair.
	pub fn seeded(pair: TokenPair) -> Self {
		Self(Arc::new(RwLock::new(Some(SessionRecord::now(pair)))))
	}

	/// Returns the full record, including the issue timestamp.
	pub fn record(&self) -> Option<SessionRecord> {
		self.0.read().clone()
	}
}
impl SessionStore for MemorySession {
	fn save_tokens(&self, pair: TokenPair) -> SessionFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move {
			*slot.write() = Some(SessionRecord::now(pair));

			Ok(())
		})
	}

	fn fetch_tokens(&self) -> SessionFuture<'_, Option<TokenPair>> {
		let slot = self.0.clone();

		Box::pin(async move { Ok(slot.read().as_ref().map(|record| record.pair.clone())) })
	}

	fn clear_tokens(&self) -> SessionFuture<'_, ()> {
		let slot = self.0.clone();

		Box::pin(async move {
			*slot.write() = None;

			Ok(())
		})
	}
}
