//! External OAuth 1.0a client contract.
//!
//! The adapter never signs requests or speaks HTTP itself. Implementations of
//! [`ProviderClient`] own the three-legged handshake primitives (temporary
//! token issuance, verifier exchange, credential verification) and authorize
//! URL construction, which keeps the adapter transport-agnostic: any signing
//! library or HTTP stack can sit behind the trait without the flows noticing.

// self
use crate::{_prelude::*, auth::TokenPair};

/// Future type returned by [`ProviderClient`] methods.
pub type ClientFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ClientError>> + 'a + Send>>;

type BoxError = Box<dyn StdError + Send + Sync>;

/// OAuth 1.0a client seam between the adapter and the identity provider.
///
/// Implementations must be `Send + Sync + 'static` so one client handle can be
/// shared across adapters behind an `Arc` without extra wrappers.
pub trait ProviderClient
where
	Self: 'static + Send + Sync,
{
	/// Requests a temporary token pair, registering `callback` for the redirect leg.
	fn request_token<'a>(&'a self, callback: &'a Url) -> ClientFuture<'a, TokenPair>;

	/// Exchanges the request pair plus one-time verifier for the permanent access pair.
	fn access_token<'a>(
		&'a self,
		request_pair: &'a TokenPair,
		verifier: &'a str,
	) -> ClientFuture<'a, TokenPair>;

	/// Calls the provider's credential-verification endpoint with the access pair.
	fn verify_credentials<'a>(&'a self, access_pair: &'a TokenPair) -> ClientFuture<'a, ApiResponse>;

	/// Builds the user-facing authorize URL for a temporary token. Pure; no network call.
	fn authorize_url(&self, token: &str) -> Url;
}

/// Provider API response with the HTTP status carried first-class.
///
/// The status travels with the body instead of through a mutable
/// last-status field on the client, so verification outcomes stay attached to
/// the call that produced them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code of the call.
	pub status: u16,
	/// Raw response body.
	pub body: String,
}
impl ApiResponse {
	/// Builds a response from a status code and body.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self { status, body: body.into() }
	}

	/// Whether the provider reported success. Exactly 200; redirects do not count.
	pub fn is_success(&self) -> bool {
		self.status == 200
	}
}

/// Error type produced by [`ProviderClient`] implementations.
#[derive(Debug, ThisError)]
pub enum ClientError {
	/// Underlying transport reported a network failure.
	#[error("Network error occurred while calling the provider.")]
	Transport {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Provider answered, but outside the OAuth 1.0a handshake contract.
	#[error("Provider violated the handshake contract: {message}.")]
	Protocol {
		/// Human-readable summary of the violation.
		message: String,
	},
}
impl ClientError {
	/// Wraps a transport-specific network error.
	pub fn transport(src: impl 'static + Send + Sync + StdError) -> Self {
		Self::Transport { source: Box::new(src) }
	}

	/// Builds a protocol violation from a message.
	pub fn protocol(message: impl Into<String>) -> Self {
		Self::Protocol { message: message.into() }
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn only_exactly_200_counts_as_success() {
		assert!(ApiResponse::new(200, "{}").is_success());
		assert!(!ApiResponse::new(201, "{}").is_success());
		assert!(!ApiResponse::new(302, "").is_success());
		assert!(!ApiResponse::new(401, "{\"errors\":[]}").is_success());
	}

	#[test]
	fn transport_errors_keep_their_source() {
		let io = std::io::Error::other("connection reset");
		let err = ClientError::transport(io);
		let source = StdError::source(&err)
			.expect("Transport error should expose the underlying failure as its source.");

		assert!(source.to_string().contains("connection reset"));
	}
}
