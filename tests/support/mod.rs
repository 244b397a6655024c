#![allow(dead_code)]

use std::net::TcpListener;
use std::sync::Arc;

use cart_pricing_mock::domain::session::LoginMethod;
use cart_pricing_mock::infrastructure::config::settings::Config;

pub const ALLOWED_ORIGIN: &str = "https://www.dogcatstar.com";

pub fn test_config(port: u16) -> Config {
	Config {
		server_host: "127.0.0.1".to_string(),
		server_port: port,
		server_keepalive: 75,
		allowed_origin: ALLOWED_ORIGIN.to_string(),
		base_url: format!("http://127.0.0.1:{port}"),
		api_token: Some("t1".to_string()),
		platform_token: Some("t2".to_string()),
		login_method: LoginMethod::Google,
		auth_state_dir: std::env::temp_dir()
			.join("cart-pricing-mock-tests")
			.to_string_lossy()
			.into_owned(),
	}
}

/// Binds an ephemeral loopback port, starts the mock server on it and
/// returns the harness config pointing at it. The server task runs until
/// the test process exits.
pub fn spawn_mock_server() -> Arc<Config> {
	let listener =
		TcpListener::bind("127.0.0.1:0").expect("Failed to bind test port");
	let port = listener.local_addr().expect("No local addr").port();

	let config = Arc::new(test_config(port));
	let server = cart_pricing_mock::serve(listener, config.clone())
		.expect("Failed to start mock server");
	tokio::spawn(server);

	config
}
