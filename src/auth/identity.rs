//! Verified external identity parsed from the provider's credential check.

// self
use crate::{
	_prelude::*,
	auth::{ExternalId, IdentifierError},
};

#[derive(Debug, Deserialize)]
struct VerifyPayload {
	id: u64,
	#[serde(default)]
	screen_name: Option<String>,
}

/// Identity facts captured after a successful credential verification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedIdentity {
	/// Provider-side account identifier.
	pub external_id: ExternalId,
	/// Display handle, when the provider includes one.
	pub screen_name: Option<String>,
}
impl VerifiedIdentity {
	/// Parses the JSON body of a credential-verification response.
	pub fn from_verify_payload(body: &str) -> Result<Self, IdentityError> {
		let de = &mut serde_json::Deserializer::from_str(body);
		let payload: VerifyPayload = serde_path_to_error::deserialize(de)?;
		let external_id = ExternalId::new(payload.id.to_string())?;

		Ok(Self { external_id, screen_name: payload.screen_name })
	}
}

/// Failures raised while interpreting the verification payload.
#[derive(Debug, ThisError)]
pub enum IdentityError {
	/// Verification endpoint returned malformed JSON.
	#[error("Credential verification returned malformed JSON.")]
	Parse(#[from] serde_path_to_error::Error<serde_json::Error>),
	/// Provider-side account id failed identifier validation.
	#[error("Provider account id is not a usable identifier.")]
	Invalid(#[from] IdentifierError),
}
