//! Shared fixtures: a scripted provider client and a recording user resolver.

#![allow(dead_code)]

// std
use std::sync::Arc;
// crates.io
use parking_lot::Mutex;
use url::Url;
// self
use oauth1_adapter::{
	auth::{ExternalId, FlowAction, ProviderId, TokenPair, UserId},
	client::{ApiResponse, ClientFuture, ProviderClient},
	flows::ProviderAdapter,
	request::RequestSnapshot,
	session::{MemorySession, SessionStore},
	user::{ProviderContext, ResolvedUser, ResolverFuture, UserResolver},
};

pub const VERIFIER: &str = "one-time-verifier";
pub const VERIFY_BODY: &str = "{\"id\":38895958,\"screen_name\":\"theSeanCook\"}";

pub fn provider() -> ProviderId {
	ProviderId::new("twitter").expect("Provider fixture should be valid.")
}

pub fn callback_page() -> Url {
	Url::parse("https://app.example.com/auth/callback")
		.expect("Callback page fixture should parse successfully.")
}

pub fn request_pair() -> TokenPair {
	TokenPair::new("req-token", "req-secret")
}

pub fn access_pair() -> TokenPair {
	TokenPair::new("access-token", "access-secret")
}

/// Query snapshot mimicking the provider's callback for one action.
pub fn callback_request(action: FlowAction) -> RequestSnapshot {
	RequestSnapshot::from_query([
		("oauth_verifier".to_owned(), VERIFIER.to_owned()),
		("state".to_owned(), action.state_tag(&provider())),
	])
}

/// Arguments recorded by [`StubClient`] across its three network calls.
#[derive(Clone, Debug, Default)]
pub struct ClientCalls {
	pub request_token: Vec<Url>,
	pub access_token: Vec<(TokenPair, String)>,
	pub verify: Vec<TokenPair>,
}

/// Scripted [`ProviderClient`] returning canned pairs and a canned verify response.
pub struct StubClient {
	pub authorize_base: Url,
	pub request_pair: TokenPair,
	pub access_pair: TokenPair,
	pub verify_response: ApiResponse,
	pub bare_authorize: bool,
	pub calls: Mutex<ClientCalls>,
}
impl StubClient {
	pub fn new() -> Self {
		Self {
			authorize_base: Url::parse("https://provider.example/oauth/authenticate")
				.expect("Authorize base fixture should parse successfully."),
			request_pair: request_pair(),
			access_pair: access_pair(),
			verify_response: ApiResponse::new(200, VERIFY_BODY),
			bare_authorize: false,
			calls: Mutex::default(),
		}
	}

	pub fn with_verify_response(mut self, response: ApiResponse) -> Self {
		self.verify_response = response;

		self
	}

	/// Makes `authorize_url` return the base URL without an `oauth_token` query
	/// pair, exercising the `?` glue branch of state tagging.
	pub fn with_bare_authorize(mut self) -> Self {
		self.bare_authorize = true;

		self
	}

	pub fn calls(&self) -> ClientCalls {
		self.calls.lock().clone()
	}
}
impl ProviderClient for StubClient {
	fn request_token<'a>(&'a self, callback: &'a Url) -> ClientFuture<'a, TokenPair> {
		Box::pin(async move {
			self.calls.lock().request_token.push(callback.clone());

			Ok(self.request_pair.clone())
		})
	}

	fn access_token<'a>(
		&'a self,
		request_pair: &'a TokenPair,
		verifier: &'a str,
	) -> ClientFuture<'a, TokenPair> {
		Box::pin(async move {
			self.calls.lock().access_token.push((request_pair.clone(), verifier.to_owned()));

			Ok(self.access_pair.clone())
		})
	}

	fn verify_credentials<'a>(
		&'a self,
		access_pair: &'a TokenPair,
	) -> ClientFuture<'a, ApiResponse> {
		Box::pin(async move {
			self.calls.lock().verify.push(access_pair.clone());

			Ok(self.verify_response.clone())
		})
	}

	fn authorize_url(&self, token: &str) -> Url {
		let mut url = self.authorize_base.clone();

		if !self.bare_authorize {
			url.query_pairs_mut().append_pair("oauth_token", token);
		}

		url
	}
}

/// Context snapshot captured by [`StaticResolver`] on every call.
#[derive(Clone, Debug)]
pub struct SeenContext {
	pub provider: ProviderId,
	pub action: FlowAction,
	pub external_id: ExternalId,
	pub tokens: TokenPair,
}

/// [`UserResolver`] returning a fixed verdict while recording every context.
pub struct StaticResolver {
	verdict: Result<ResolvedUser, String>,
	pub seen: Mutex<Vec<SeenContext>>,
}
impl StaticResolver {
	pub fn resolving(user_id: &str, external_id: &str) -> Self {
		let user = ResolvedUser {
			id: UserId::new(user_id).expect("User id fixture should be valid."),
			external_id: ExternalId::new(external_id)
				.expect("External id fixture should be valid."),
		};

		Self { verdict: Ok(user), seen: Mutex::default() }
	}

	pub fn failing(message: &str) -> Self {
		Self { verdict: Err(message.to_owned()), seen: Mutex::default() }
	}
}
impl UserResolver for StaticResolver {
	fn resolve<'a>(&'a self, ctx: ProviderContext<'a>) -> ResolverFuture<'a> {
		Box::pin(async move {
			self.seen.lock().push(SeenContext {
				provider: ctx.provider.clone(),
				action: ctx.action,
				external_id: ctx.external_id.clone(),
				tokens: ctx.tokens.clone(),
			});

			match &self.verdict {
				Ok(user) => Ok(user.clone()),
				Err(message) => Err(message.clone().into()),
			}
		})
	}
}

/// Binds an adapter over the provided fixtures with the standard provider + callback page.
pub async fn bind_adapter(
	client: Arc<StubClient>,
	session: Arc<MemorySession>,
	resolver: Arc<StaticResolver>,
	request: RequestSnapshot,
) -> ProviderAdapter<StubClient> {
	let session: Arc<dyn SessionStore> = session;
	let resolver: Arc<dyn UserResolver> = resolver;

	ProviderAdapter::bind(session, client, resolver, provider(), callback_page(), request)
		.await
		.expect("Adapter should bind successfully.")
}
