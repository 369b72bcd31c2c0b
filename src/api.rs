//! HTTP/JSON client for the dispatch backend.

use gloo_net::http::{Request, Response};
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::config::{self, API_BASE_URL};
use crate::error::{Error, Result};
use crate::model::{
	CompleteResponse, CompleteRideBody, StatusSnapshot, SubmitRequestBody, SubmitResponse,
};

#[derive(Clone, Debug)]
pub struct ApiClient {
	base_url: String,
}

impl Default for ApiClient {
	fn default() -> Self {
		Self::new(API_BASE_URL)
	}
}

impl ApiClient {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
		}
	}

	/// `GET /status`
	pub async fn fetch_status(&self) -> Result<StatusSnapshot> {
		let url = config::endpoint(&self.base_url, "status");
		debug!("GET {url}");
		let resp = Request::get(&url).send().await.map_err(log_failure)?;
		decode(resp).await
	}

	/// `POST /submit-request`
	pub async fn submit_request(&self, body: &SubmitRequestBody) -> Result<SubmitResponse> {
		let url = config::endpoint(&self.base_url, "submit-request");
		debug!("POST {url} user={} {} -> {}", body.user_id, body.source, body.destination);
		let resp = Request::post(&url)
			.json(body)?
			.send()
			.await
			.map_err(log_failure)?;
		decode_verdict(resp).await
	}

	/// `POST /complete-ride`
	pub async fn complete_ride(&self, body: &CompleteRideBody) -> Result<CompleteResponse> {
		let url = config::endpoint(&self.base_url, "complete-ride");
		debug!("POST {url} driver={}", body.driver_id);
		let resp = Request::post(&url)
			.json(body)?
			.send()
			.await
			.map_err(log_failure)?;
		decode_verdict(resp).await
	}
}

fn log_failure(e: gloo_net::Error) -> Error {
	warn!("backend request failed: {e}");
	e.into()
}

/// Snapshot bodies must come with a 2xx status: an error body would
/// otherwise decode as an empty snapshot.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
	if !resp.ok() {
		warn!("{} answered HTTP {}", resp.url(), resp.status());
		return Err(Error::Status(resp.status()));
	}
	let text = resp.text().await?;
	serde_json::from_str(&text).map_err(|e| {
		warn!("could not decode {}: {e}", resp.url());
		Error::Decode(e.to_string())
	})
}

/// Submit and complete carry their verdict in the body, so a non-2xx
/// answer that still decodes is a business rejection, not a failure.
async fn decode_verdict<T: DeserializeOwned>(resp: Response) -> Result<T> {
	let (ok, status) = (resp.ok(), resp.status());
	let text = resp.text().await?;
	match serde_json::from_str(&text) {
		Ok(verdict) => Ok(verdict),
		Err(_) if !ok => {
			warn!("{} answered HTTP {status}", resp.url());
			Err(Error::Status(status))
		}
		Err(e) => {
			warn!("could not decode {}: {e}", resp.url());
			Err(Error::Decode(e.to_string()))
		}
	}
}
