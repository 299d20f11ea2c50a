//! Authorize-redirect construction for each flow action.

// self
use crate::{
	_prelude::*,
	auth::FlowAction,
	client::ProviderClient,
	flows::ProviderAdapter,
	obs::{self, FlowOutcome, FlowSpan},
	request::STATE_PARAM,
};

impl<C> ProviderAdapter<C>
where
	C: ?Sized + ProviderClient,
{
	/// Builds the authorize URL that starts a login flow.
	pub async fn login_url(&self) -> Result<Url> {
		self.redirect_url_for(FlowAction::Login).await
	}

	/// Builds the authorize URL that starts a register flow.
	pub async fn register_url(&self) -> Result<Url> {
		self.redirect_url_for(FlowAction::Register).await
	}

	/// Builds the authorize URL that starts an attach flow.
	pub async fn attach_url(&self) -> Result<Url> {
		self.redirect_url_for(FlowAction::Attach).await
	}

	/// Requests a temporary token, persists it, and returns the tagged authorize URL.
	///
	/// The request pair reaches the session store before any URL is returned,
	/// so a callback arriving later always finds the pair it needs. The
	/// `state=<tag>` marker is appended as a proper query pair; the glue
	/// character follows from whether the authorize URL already carries a
	/// query string.
	pub async fn redirect_url_for(&self, action: FlowAction) -> Result<Url> {
		let span = FlowSpan::new(action, "redirect");

		obs::record_flow_outcome(action, FlowOutcome::Attempt);

		let result = span
			.instrument(async move {
				let request_pair = self.client.request_token(&self.callback_page).await?;

				self.session.save_tokens(request_pair.clone()).await?;
				self.set_tokens(request_pair.clone());

				let mut url = self.client.authorize_url(&request_pair.token);

				url.query_pairs_mut().append_pair(STATE_PARAM, &action.state_tag(&self.provider));

				Ok(url)
			})
			.await;

		match &result {
			Ok(_) => obs::record_flow_outcome(action, FlowOutcome::Success),
			Err(_) => obs::record_flow_outcome(action, FlowOutcome::Failure),
		}

		result
	}
}
