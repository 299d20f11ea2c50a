//! Flow actions shared between URL building and callback detection.
//!
//! Keeping one enum on both sides removes the drift risk of duplicating the
//! `state` tag literals at each call site.

// self
use crate::{_prelude::*, auth::ProviderId};

/// UI actions that can initiate a provider redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowAction {
	/// Sign an existing, already-linked user in.
	Login,
	/// Link the provider account to the signed-in user.
	Attach,
	/// Create a new user from the provider account.
	Register,
}
impl FlowAction {
	/// Every action, in detection order.
	pub const ALL: [Self; 3] = [Self::Login, Self::Attach, Self::Register];

	/// Returns a stable label suitable for tags, spans, or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowAction::Login => "login",
			FlowAction::Attach => "attach",
			FlowAction::Register => "register",
		}
	}

	/// Builds the `state` value round-tripped through the provider, e.g. `twitter-login`.
	pub fn state_tag(self, provider: &ProviderId) -> String {
		format!("{provider}-{}", self.as_str())
	}

	/// Resolves an incoming `state` value back to the action it encodes.
	pub fn from_state_tag(provider: &ProviderId, tag: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|action| action.state_tag(provider) == tag)
	}
}
impl Display for FlowAction {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
