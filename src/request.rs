//! Immutable snapshot of the incoming request's query parameters.

// self
use crate::_prelude::*;

/// Query parameter carrying the one-time verifier after user authorization.
pub const VERIFIER_PARAM: &str = "oauth_verifier";
/// Query parameter carrying the round-tripped action tag.
pub const STATE_PARAM: &str = "state";

/// Read-only view of the request, captured once when the adapter is bound.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
	query: HashMap<String, String>,
}
impl RequestSnapshot {
	/// Captures a snapshot from key/value query pairs.
	pub fn from_query<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: Into<String>,
	{
		Self { query: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
	}

	/// Captures a snapshot from a full request URL.
	pub fn from_url(url: &Url) -> Self {
		Self { query: url.query_pairs().into_owned().collect() }
	}

	/// Looks up an arbitrary query parameter.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.query.get(key).map(String::as_str)
	}

	/// One-time verifier returned by the provider, when present.
	pub fn verifier(&self) -> Option<&str> {
		self.get(VERIFIER_PARAM)
	}

	/// Round-tripped action tag, when present.
	pub fn state(&self) -> Option<&str> {
		self.get(STATE_PARAM)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn snapshot_from_url_exposes_callback_parameters() {
		let url = Url::parse(
			"https://app.example.com/callback?oauth_token=tkn&oauth_verifier=vrf&state=twitter-login",
		)
		.expect("Callback URL fixture should parse.");
		let snapshot = RequestSnapshot::from_url(&url);

		assert_eq!(snapshot.verifier(), Some("vrf"));
		assert_eq!(snapshot.state(), Some("twitter-login"));
		assert_eq!(snapshot.get("oauth_token"), Some("tkn"));
		assert_eq!(snapshot.get("missing"), None);
	}

	#[test]
	fn snapshot_from_pairs_matches_url_form() {
		let snapshot =
			RequestSnapshot::from_query([(VERIFIER_PARAM, "vrf"), (STATE_PARAM, "twitter-attach")]);

		assert_eq!(snapshot.verifier(), Some("vrf"));
		assert_eq!(snapshot.state(), Some("twitter-attach"));

		let empty = RequestSnapshot::default();

		assert_eq!(empty.verifier(), None);
		assert_eq!(empty.state(), None);
	}
}
