//! Adapter-level error types shared across flows, stores, and collaborators.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical adapter error exposed by public APIs.
///
/// Every failure mode the original null-returning surface collapsed is kept
/// distinct here so callers can tell "wrong credentials" from "user lookup
/// failed" from "transport broke."
#[derive(Debug, ThisError)]
pub enum Error {
	/// Session-store failure.
	#[error("{0}")]
	Session(#[from] crate::session::SessionError),
	/// External OAuth 1.0a client failure.
	#[error(transparent)]
	Client(#[from] crate::client::ClientError),
	/// Verification payload could not be interpreted.
	#[error(transparent)]
	Identity(#[from] crate::auth::IdentityError),

	/// Request does not complete any pending login/attach/register flow.
	#[error("Request does not complete a pending provider flow.")]
	NoPendingAttempt,
	/// The callback arrived without a request token pair captured at bind.
	#[error("Session holds no request token pair for this callback.")]
	MissingRequestToken,
	/// Credential verification returned a non-200 status.
	#[error("Credential verification failed with HTTP status {status}.")]
	VerificationFailed {
		/// HTTP status code reported by the provider.
		status: u16,
	},
	/// User-resolution collaborator failed after a verified identity was captured.
	#[error("User resolution failed.")]
	UserResolution {
		/// Underlying resolver failure.
		#[source]
		source: crate::user::ResolverError,
	},
}
