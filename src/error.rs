//! [`Error`] type.

/// An error from the API or from the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// No access key is configured.
	#[error("an invalid API key was used: no access key is configured")]
	InvalidApiKey,
	/// The endpoint and parameters do not form a valid URL.
	#[error("an invalid URL was used: {0}")]
	InvalidUrl(String),
	/// Transport failure, undecodable body, or any other failure.
	#[error("the request failed: {0}")]
	RequestFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
	/// The API answered with `success: false`.
	#[error("the API reported error {code} ({kind}): {info}")]
	Api {
		/// Numeric error code, e.g. `101`.
		code: i64,
		/// Error type tag, e.g. `invalid_access_key`.
		kind: String,
		/// Human-readable message.
		info: String,
	},
}

impl From<reqwest::Error> for Error {
	fn from(error: reqwest::Error) -> Self {
		// Transport errors carry the request URL, access key included.
		Self::RequestFailed(Box::new(error.without_url()))
	}
}

impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Self {
		Self::RequestFailed(Box::new(error))
	}
}
