//! The HTTP [`Client`].

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde_json as json;
use tracing::{debug, warn};

use crate::{
	request::Request,
	response::ApiErrorData,
	url::{self, BASE_URL},
	AccessKey, Error,
};

/// Sends [`Request`]s and decodes their responses.
#[derive(Debug, Clone)]
pub struct Client {
	http: reqwest::Client,
	base_url: String,
	access_key: Option<AccessKey>,
}

impl Client {
	/// Creates a [`Client`] for the default API root.
	pub fn new(access_key: Option<AccessKey>) -> Self {
		Self::with_base_url(access_key, BASE_URL)
	}

	/// Creates a [`Client`] for another API root.
	///
	/// The base URL is validated when a request is built.
	pub fn with_base_url(access_key: Option<AccessKey>, base_url: impl Into<String>) -> Self {
		Self {
			http: reqwest::Client::new(),
			base_url: base_url.into(),
			access_key,
		}
	}

	/// Replaces the underlying HTTP client.
	pub fn http_client(mut self, http: reqwest::Client) -> Self {
		self.http = http;
		self
	}

	/// Builds the full URL for a request, access key included.
	pub fn url<R: Request>(&self, request: &R) -> Result<Url, Error> {
		let access_key = self.access_key.as_ref().ok_or(Error::InvalidApiKey)?;
		let base = url::parse_base(&self.base_url)?;
		url::build(&base, R::ENDPOINT, access_key, request.query())
	}

	/// Sends the request.
	pub async fn send<R: Request>(&self, request: &R) -> Result<R::Response, Error> {
		let url = self.url(request)?;
		debug!(endpoint = R::ENDPOINT.path(), query = ?request.query(), "sending request");

		let response = self.http.get(url).send().await?;
		debug!(status = %response.status(), "received response");

		let body = response.bytes().await?;
		decode(&body)
	}
}

/// Decodes a response body.
///
/// A body with `success: false` becomes [`Error::Api`]; anything that is
/// neither that nor a valid `T` becomes [`Error::RequestFailed`].
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
	let payload: json::Value = json::from_slice(body).map_err(|error| {
		warn!(%error, "response body is not JSON");
		error
	})?;

	if payload.get("success").and_then(json::Value::as_bool) == Some(false) {
		let ApiErrorData { error, .. } = json::from_value(payload)?;
		warn!(code = error.code, kind = %error.kind, "API reported failure");
		return Err(error.into());
	}

	json::from_value(payload).map_err(|error| {
		warn!(%error, "unexpected response shape");
		error.into()
	})
}
