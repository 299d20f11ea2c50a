//! Flow orchestration for the provider adapter.

pub mod callback;
pub mod detect;
pub mod redirect;

pub use detect::*;

// self
use crate::{
	_prelude::*,
	auth::{ExternalId, ProviderId, TokenPair},
	client::ProviderClient,
	request::RequestSnapshot,
	session::SessionStore,
	user::UserResolver,
};

/// Completes login/attach/register flows for a single OAuth 1.0a provider.
///
/// The adapter owns the client, session store, and resolver references so the
/// flow implementations can focus on handshake sequencing (redirect issuance,
/// verifier exchange, identity verification, user resolution). One adapter is
/// bound per incoming request via [`ProviderAdapter::bind`], which captures
/// the query snapshot and the session's persisted token pair exactly once;
/// every detection predicate afterwards is pure over that snapshot.
pub struct ProviderAdapter<C>
where
	C: ?Sized + ProviderClient,
{
	/// External OAuth 1.0a client used for every provider call.
	pub client: Arc<C>,
	/// Session store holding the request/access token pair.
	pub session: Arc<dyn SessionStore>,
	/// Collaborator mapping verified identities to internal users.
	pub resolver: Arc<dyn UserResolver>,
	/// Provider identifier; prefixes every state tag.
	pub provider: ProviderId,
	/// Callback page registered with the provider during request-token issuance.
	pub callback_page: Url,
	request: RequestSnapshot,
	state: Arc<Mutex<AdapterState>>,
}

#[derive(Debug, Default)]
struct AdapterState {
	tokens: Option<TokenPair>,
	external_id: Option<ExternalId>,
}

impl<C> ProviderAdapter<C>
where
	C: ?Sized + ProviderClient,
{
	/// Binds an adapter to one request, capturing the persisted token pair once.
	pub async fn bind(
		session: Arc<dyn SessionStore>,
		client: impl Into<Arc<C>>,
		resolver: Arc<dyn UserResolver>,
		provider: ProviderId,
		callback_page: Url,
		request: RequestSnapshot,
	) -> Result<Self> {
		let client = client.into();
		let tokens = session.fetch_tokens().await?;
		let state = AdapterState { tokens, external_id: None };

		Ok(Self {
			client,
			session,
			resolver,
			provider,
			callback_page,
			request,
			state: Arc::new(Mutex::new(state)),
		})
	}

	/// Query snapshot captured at bind time.
	pub fn request(&self) -> &RequestSnapshot {
		&self.request
	}

	/// Current token pair: the persisted pair at bind, or the access pair after completion.
	pub fn tokens(&self) -> Option<TokenPair> {
		self.state.lock().tokens.clone()
	}

	/// Verified external account id; populated only after verification returned HTTP 200.
	pub fn external_id(&self) -> Option<ExternalId> {
		self.state.lock().external_id.clone()
	}

	/// Reports logout success without touching the session.
	///
	/// The provider keeps no locally revocable state, so there is nothing to
	/// tear down; callers drop their own session scope separately.
	pub fn logout(&self) -> bool {
		true
	}

	/// Whether authenticated sessions from this provider should be persisted.
	pub const fn should_persist(&self) -> bool {
		true
	}

	/// Whether the user opted into long-lived remember-me persistence.
	pub const fn wants_to_be_remembered(&self) -> bool {
		false
	}

	pub(crate) fn set_tokens(&self, pair: TokenPair) {
		self.state.lock().tokens = Some(pair);
	}

	pub(crate) fn capture_external_id(&self, id: ExternalId) {
		self.state.lock().external_id = Some(id);
	}
}
impl<C> Clone for ProviderAdapter<C>
where
	C: ?Sized + ProviderClient,
{
	fn clone(&self) -> Self {
		Self {
			client: self.client.clone(),
			session: self.session.clone(),
			resolver: self.resolver.clone(),
			provider: self.provider.clone(),
			callback_page: self.callback_page.clone(),
			request: self.request.clone(),
			state: self.state.clone(),
		}
	}
}
impl<C> Debug for ProviderAdapter<C>
where
	C: ?Sized + ProviderClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let state = self.state.lock();

		f.debug_struct("ProviderAdapter")
			.field("provider", &self.provider)
			.field("callback_page", &self.callback_page)
			.field("tokens_set", &state.tokens.is_some())
			.field("external_id", &state.external_id)
			.finish()
	}
}
