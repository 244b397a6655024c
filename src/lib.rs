pub mod adapters;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use log::info;

use crate::adapters::web::cart_calculate_handler::{
	CorsPolicy, cart_calculate_resource,
};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::pricing::static_quote::StaticQuoteSource;
use crate::use_cases::calculate_cart::CalculateCartUseCase;

/// Builds the mock pricing server on an already-bound listener. Tests bind
/// port 0 and pass the listener in to get an ephemeral port.
pub fn serve(
	listener: TcpListener,
	config: Arc<Config>,
) -> std::io::Result<Server> {
	let calculate_cart_use_case =
		web::Data::new(CalculateCartUseCase::new(StaticQuoteSource::new()));
	let allowed_origin = config.allowed_origin.clone();

	let server = HttpServer::new(move || {
		App::new()
			.app_data(calculate_cart_use_case.clone())
			.app_data(web::Data::new(CorsPolicy {
				allowed_origin: allowed_origin.clone(),
			}))
			.service(cart_calculate_resource())
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	// The mock is a single-threaded stand-in for the real service.
	.workers(1)
	.listen(listener)?;

	Ok(server.run())
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let listener = TcpListener::bind(config.bind_addr())?;

	info!(
		"Starting mock cart-pricing server on {}:{}...",
		config.server_host, config.server_port
	);
	serve(listener, config)?.await
}
