use actix_web::http::{Method, header};
use actix_web::{HttpRequest, HttpResponse, Resource, web};
use log::{info, warn};

use crate::adapters::web::errors::ApiError;
use crate::infrastructure::pricing::static_quote::StaticQuoteSource;
use crate::use_cases::calculate_cart::CalculateCartUseCase;

/// Route of the cart-pricing endpoint under test.
pub const CART_CALCULATE_ROUTE: &str = "/api/ec/v2/TW/cart/calculate";

pub const API_TOKEN_HEADER: &str = "api-token";
pub const PLATFORM_TOKEN_HEADER: &str = "x-platform-token";

const ALLOWED_METHODS: &str = "POST";
const ALLOWED_HEADERS: &str = "content-type, api-token, x-platform-token";

/// CORS origin the endpoint is scoped to.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
	pub allowed_origin: String,
}

/// The one resource the mock exposes: `POST` and `OPTIONS` on the
/// calculate route, 405 for everything else.
pub fn cart_calculate_resource() -> Resource {
	web::resource(CART_CALCULATE_ROUTE)
		.route(web::post().to(calculate))
		.route(web::method(Method::OPTIONS).to(preflight))
		.default_service(web::route().to(method_not_allowed))
}

fn has_token(req: &HttpRequest, name: &str) -> bool {
	req.headers()
		.get(name)
		.and_then(|value| value.to_str().ok())
		.is_some_and(|value| !value.is_empty())
}

pub async fn calculate(
	req: HttpRequest,
	body: web::Bytes,
	calculate_cart_use_case: web::Data<CalculateCartUseCase<StaticQuoteSource>>,
	cors: web::Data<CorsPolicy>,
) -> Result<HttpResponse, ApiError> {
	// Header checks come before body parsing, matching the real service.
	if !has_token(&req, API_TOKEN_HEADER) {
		warn!("Calculate request rejected: missing {API_TOKEN_HEADER}");
		return Err(ApiError::MissingApiToken);
	}
	if !has_token(&req, PLATFORM_TOKEN_HEADER) {
		warn!("Calculate request rejected: missing {PLATFORM_TOKEN_HEADER}");
		return Err(ApiError::MissingPlatformToken);
	}

	// The body must be JSON but its content never influences the response.
	if serde_json::from_slice::<serde_json::Value>(&body).is_err() {
		warn!("Calculate request rejected: body is not valid JSON");
		return Err(ApiError::BadClientDataError);
	}

	match calculate_cart_use_case.execute().await {
		Ok(quote) => {
			info!("Serving canned quote for cart {}", quote.summary().cart_uuid);
			Ok(HttpResponse::Ok()
				.insert_header((
					header::ACCESS_CONTROL_ALLOW_ORIGIN,
					cors.allowed_origin.clone(),
				))
				.json(quote))
		}
		Err(e) => {
			warn!("Error producing cart quote: {e:?}");
			Err(ApiError::InternalServerError)
		}
	}
}

pub async fn preflight(
	req: HttpRequest,
	cors: web::Data<CorsPolicy>,
) -> Result<HttpResponse, ApiError> {
	if !has_token(&req, API_TOKEN_HEADER) ||
		!has_token(&req, PLATFORM_TOKEN_HEADER)
	{
		warn!("Preflight rejected: missing token header");
		return Err(ApiError::MissingPreflightToken);
	}

	Ok(HttpResponse::NoContent()
		.insert_header((
			header::ACCESS_CONTROL_ALLOW_ORIGIN,
			cors.allowed_origin.clone(),
		))
		.insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
		.insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
		.finish())
}

pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse, ApiError> {
	warn!("Unsupported method {} on {}", req.method(), req.path());
	Err(ApiError::MethodNotAllowedError)
}
