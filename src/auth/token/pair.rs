//! The `(oauth_token, oauth_token_secret)` pair issued by the provider.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Opaque token pair returned by the request-token and access-token exchanges.
///
/// The same shape serves both legs of the handshake: the temporary pair
/// persisted while the user authorizes, and the permanent pair held after the
/// verifier exchange.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
	/// Public half; appears in authorize URLs and callbacks.
	pub token: String,
	/// Secret half; redacted in logs and debug output.
	pub secret: TokenSecret,
}
impl TokenPair {
	/// Builds a pair from the provider's two opaque strings.
	pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { token: token.into(), secret: TokenSecret::new(secret) }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_output_keeps_the_secret_redacted() {
		let pair = TokenPair::new("req-token", "req-secret");
		let rendered = format!("{pair:?}");

		assert!(rendered.contains("req-token"));
		assert!(!rendered.contains("req-secret"));
	}

	#[test]
	fn serde_round_trips_the_pair() {
		let pair = TokenPair::new("req-token", "req-secret");
		let payload = serde_json::to_string(&pair).expect("Token pair should serialize to JSON.");
		let round_trip: TokenPair =
			serde_json::from_str(&payload).expect("Serialized pair should deserialize from JSON.");

		assert_eq!(round_trip, pair);
	}
}
