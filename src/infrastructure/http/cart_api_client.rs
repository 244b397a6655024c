use std::time::Duration;

use reqwest::{Client, Response};
use serde::Serialize;

use crate::adapters::web::cart_calculate_handler::{
	API_TOKEN_HEADER, CART_CALCULATE_ROUTE, PLATFORM_TOKEN_HEADER,
};
use crate::infrastructure::config::settings::Config;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the cart-calculate endpoint, building requests the way
/// the storefront frontend does: browser-like `Origin` and
/// `Accept-Language` headers plus the two auth tokens when available.
#[derive(Debug, Clone)]
pub struct CartApiClient {
	client: Client,
	base_url: String,
	origin: String,
	api_token: Option<String>,
	platform_token: Option<String>,
}

impl CartApiClient {
	pub fn from_config(config: &Config) -> Self {
		Self {
			client: Client::new(),
			base_url: config.base_url.clone(),
			origin: config.allowed_origin.clone(),
			api_token: config.api_token.clone(),
			platform_token: config.platform_token.clone(),
		}
	}

	pub fn with_tokens(
		base_url: impl Into<String>,
		origin: impl Into<String>,
		api_token: impl Into<String>,
		platform_token: impl Into<String>,
	) -> Self {
		Self {
			client: Client::new(),
			base_url: base_url.into(),
			origin: origin.into(),
			api_token: Some(api_token.into()),
			platform_token: Some(platform_token.into()),
		}
	}

	/// Client with no auth material, for exercising the rejection paths.
	pub fn anonymous(
		base_url: impl Into<String>,
		origin: impl Into<String>,
	) -> Self {
		Self {
			client: Client::new(),
			base_url: base_url.into(),
			origin: origin.into(),
			api_token: None,
			platform_token: None,
		}
	}

	pub fn calculate_url(&self) -> String {
		format!(
			"{}{}",
			self.base_url.trim_end_matches('/'),
			CART_CALCULATE_ROUTE
		)
	}

	fn auth_headers(
		&self,
		mut request: reqwest::RequestBuilder,
	) -> reqwest::RequestBuilder {
		request = request
			.header("Origin", &self.origin)
			.header("Accept-Language", "zh-TW")
			.timeout(REQUEST_TIMEOUT);
		if let Some(token) = &self.api_token {
			request = request.header(API_TOKEN_HEADER, token);
		}
		if let Some(token) = &self.platform_token {
			request = request.header(PLATFORM_TOKEN_HEADER, token);
		}
		request
	}

	pub async fn calculate<T: Serialize + ?Sized>(
		&self,
		payload: &T,
	) -> Result<Response, reqwest::Error> {
		self.auth_headers(self.client.post(self.calculate_url()))
			.json(payload)
			.send()
			.await
	}

	/// Browser-style CORS preflight against the calculate route.
	pub async fn preflight(&self) -> Result<Response, reqwest::Error> {
		self.auth_headers(
			self.client
				.request(reqwest::Method::OPTIONS, self.calculate_url()),
		)
		.send()
		.await
	}
}
