use actix_web::http::StatusCode;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};

/// Web-boundary errors for the mock pricing endpoint. The production
/// service replies with bare status codes, so error responses carry no
/// body.
#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Missing api-token header.")]
	MissingApiToken,
	#[display("Missing x-platform-token header.")]
	MissingPlatformToken,
	#[display("Preflight request is missing a token header.")]
	MissingPreflightToken,
	#[display("Request body is not valid JSON.")]
	BadClientDataError,
	#[display("Method not allowed on this route.")]
	MethodNotAllowedError,
	#[display("Internal server error.")]
	InternalServerError,
}

impl ApiError {
	pub fn name(&self) -> String {
		match self {
			ApiError::MissingApiToken => "Unauthorized".to_string(),
			ApiError::MissingPlatformToken => "Forbidden".to_string(),
			ApiError::MissingPreflightToken => "Forbidden".to_string(),
			ApiError::BadClientDataError => "Bad request".to_string(),
			ApiError::MethodNotAllowedError => "Method Not Allowed".to_string(),
			ApiError::InternalServerError => {
				"Internal Server Error".to_string()
			}
		}
	}
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code()).finish()
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::MissingApiToken => StatusCode::UNAUTHORIZED,
			ApiError::MissingPlatformToken => StatusCode::FORBIDDEN,
			ApiError::MissingPreflightToken => StatusCode::FORBIDDEN,
			ApiError::BadClientDataError => StatusCode::BAD_REQUEST,
			ApiError::MethodNotAllowedError => StatusCode::METHOD_NOT_ALLOWED,
			ApiError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}
