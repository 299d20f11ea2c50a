//! User-resolution collaborator contract.

// self
use crate::{
	_prelude::*,
	auth::{ExternalId, FlowAction, ProviderId, TokenPair, UserId},
};

/// Boxed error surfaced by [`UserResolver`] implementations.
pub type ResolverError = Box<dyn StdError + Send + Sync>;
/// Future type returned by [`UserResolver::resolve`].
pub type ResolverFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ResolvedUser, ResolverError>> + 'a + Send>>;

/// Everything a resolver may consult when mapping an external account to a user.
#[derive(Clone, Debug)]
pub struct ProviderContext<'a> {
	/// Provider the identity was verified against.
	pub provider: &'a ProviderId,
	/// UI action that initiated the flow.
	pub action: FlowAction,
	/// Verified provider-side account id.
	pub external_id: &'a ExternalId,
	/// Access pair issued during the verifier exchange.
	pub tokens: &'a TokenPair,
}

/// Internal user returned by a successful resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedUser {
	/// Internal user identifier.
	pub id: UserId,
	/// External account the user is linked to.
	pub external_id: ExternalId,
}

/// Looks up (or creates) the internal user for a verified identity.
///
/// Whether [`FlowAction::Register`] creates a user, [`FlowAction::Attach`]
/// links one, or either is refused is entirely the implementation's policy;
/// the adapter only transports the verdict.
pub trait UserResolver
where
	Self: Send + Sync,
{
	/// Resolves the internal user for the provided context.
	fn resolve<'a>(&'a self, ctx: ProviderContext<'a>) -> ResolverFuture<'a>;
}
