use std::sync::Arc;

use cart_pricing_mock::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = Arc::new(
		cart_pricing_mock::infrastructure::config::settings::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
