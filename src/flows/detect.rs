//! Callback detection predicates over the bound request snapshot.
//!
//! Detection is deliberately strict: an action matches only when the query
//! carries both the verifier and that action's exact state tag AND a token
//! pair was persisted before the redirect. Anything less is not a callback,
//! no matter how plausible the request looks.

// self
use crate::{auth::FlowAction, client::ProviderClient, flows::ProviderAdapter};

/// Externally observable position in the redirect/callback lifecycle.
///
/// The intermediate handshake steps are not observable from outside the
/// adapter; only "a redirect is pending" and "the provider called back" are.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowPhase {
	/// No pending redirect and no callback parameters.
	Idle,
	/// A token pair is persisted and the provider has not called back yet.
	PendingRedirect,
	/// The provider called back with a verifier for a pending token pair.
	CallbackReceived,
}

impl<C> ProviderAdapter<C>
where
	C: ?Sized + ProviderClient,
{
	/// Action the incoming request completes, if any. Pure; no external call.
	pub fn attempted_action(&self) -> Option<FlowAction> {
		let state = self.request().state()?;
		let action = FlowAction::from_state_tag(&self.provider, state)?;

		self.matches_action(action).then_some(action)
	}

	/// True iff the request completes a login flow for this provider.
	pub fn has_attempted_login(&self) -> bool {
		self.matches_action(FlowAction::Login)
	}

	/// True iff the request completes an attach flow for this provider.
	pub fn is_attempting_to_attach(&self) -> bool {
		self.matches_action(FlowAction::Attach)
	}

	/// True iff the request completes a register flow for this provider.
	pub fn is_attempting_to_register(&self) -> bool {
		self.matches_action(FlowAction::Register)
	}

	/// Lifecycle phase visible from outside the adapter.
	pub fn phase(&self) -> FlowPhase {
		match (self.tokens().is_some(), self.request().verifier().is_some()) {
			(true, true) => FlowPhase::CallbackReceived,
			(true, false) => FlowPhase::PendingRedirect,
			_ => FlowPhase::Idle,
		}
	}

	fn matches_action(&self, action: FlowAction) -> bool {
		let tag = action.state_tag(&self.provider);

		self.request().verifier().is_some()
			&& self.request().state() == Some(tag.as_str())
			&& self.tokens().is_some()
	}
}
