//! Callback completion: verifier exchange, credential verification, user resolution.

// self
use crate::{
	_prelude::*,
	auth::{FlowAction, VerifiedIdentity},
	client::ProviderClient,
	flows::ProviderAdapter,
	obs::{self, FlowOutcome, FlowSpan},
	user::{ProviderContext, ResolvedUser},
};

impl<C> ProviderAdapter<C>
where
	C: ?Sized + ProviderClient,
{
	/// Completes a pending flow by exchanging the verifier and resolving the user.
	///
	/// Token state is replaced in both the session and the adapter before
	/// verification runs, so [`ProviderAdapter::tokens`] reflects the access
	/// pair even when a later step fails. The external id is captured if and
	/// only if the verification call returned HTTP 200, and it stays captured
	/// when user resolution subsequently fails.
	pub async fn process_login_attempt(&self) -> Result<ResolvedUser> {
		let action = self.attempted_action().ok_or(Error::NoPendingAttempt)?;
		let span = FlowSpan::new(action, "callback");

		obs::record_flow_outcome(action, FlowOutcome::Attempt);

		let result = span.instrument(self.complete_callback(action)).await;

		match &result {
			Ok(_) => obs::record_flow_outcome(action, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(action, FlowOutcome::Failure),
		}

		result
	}

	async fn complete_callback(&self, action: FlowAction) -> Result<ResolvedUser> {
		let verifier = self.request().verifier().ok_or(Error::NoPendingAttempt)?.to_owned();
		let request_pair = self.tokens().ok_or(Error::MissingRequestToken)?;

		self.session.clear_tokens().await?;

		let access_pair = self.client.access_token(&request_pair, &verifier).await?;

		self.session.save_tokens(access_pair.clone()).await?;
		self.set_tokens(access_pair.clone());

		let response = self.client.verify_credentials(&access_pair).await?;

		if !response.is_success() {
			return Err(Error::VerificationFailed { status: response.status });
		}

		let identity = VerifiedIdentity::from_verify_payload(&response.body)?;

		self.capture_external_id(identity.external_id.clone());

		let ctx = ProviderContext {
			provider: &self.provider,
			action,
			external_id: &identity.external_id,
			tokens: &access_pair,
		};

		self.resolver.resolve(ctx).await.map_err(|source| Error::UserResolution { source })
	}
}
