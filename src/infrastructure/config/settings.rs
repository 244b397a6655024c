use serde::Deserialize;

use crate::domain::session::LoginMethod;

/// Harness configuration, read from `APP_`-prefixed environment variables
/// with defaults matching the local mock setup.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub server_host: String,
	pub server_port: u16,
	pub server_keepalive: u64,
	pub allowed_origin: String,
	pub base_url: String,
	pub api_token: Option<String>,
	pub platform_token: Option<String>,
	pub login_method: LoginMethod,
	pub auth_state_dir: String,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_host", "127.0.0.1")?
			.set_default("server_port", 5000)?
			.set_default("server_keepalive", 75)?
			.set_default("allowed_origin", "https://www.dogcatstar.com")?
			.set_default("base_url", "http://localhost:5000")?
			.set_default("login_method", "google")?
			.set_default("auth_state_dir", ".auth-state")?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn bind_addr(&self) -> (String, u16) {
		(self.server_host.clone(), self.server_port)
	}
}

#[cfg(test)]
mod tests {
	use std::env;

	use super::*;

	// Defaults and overrides share one test because the environment is
	// process-global and cargo runs tests concurrently.
	#[test]
	fn test_config_load() {
		let config = Config::load().expect("Failed to load default config");

		assert_eq!(config.server_host, "127.0.0.1");
		assert_eq!(config.server_port, 5000);
		assert_eq!(config.server_keepalive, 75);
		assert_eq!(config.allowed_origin, "https://www.dogcatstar.com");
		assert_eq!(config.base_url, "http://localhost:5000");
		assert_eq!(config.api_token, None);
		assert_eq!(config.platform_token, None);
		assert_eq!(config.login_method, LoginMethod::Google);
		assert_eq!(config.auth_state_dir, ".auth-state");

		unsafe {
			env::set_var("APP_SERVER_PORT", "5050");
			env::set_var("APP_BASE_URL", "http://localhost:5050");
			env::set_var("APP_API_TOKEN", "t1");
			env::set_var("APP_PLATFORM_TOKEN", "t2");
			env::set_var("APP_LOGIN_METHOD", "phone");
		};

		let config = Config::load().expect("Failed to load config in test");

		assert_eq!(config.server_port, 5050);
		assert_eq!(config.base_url, "http://localhost:5050");
		assert_eq!(config.api_token, Some("t1".to_string()));
		assert_eq!(config.platform_token, Some("t2".to_string()));
		assert_eq!(config.login_method, LoginMethod::Phone);

		unsafe {
			env::remove_var("APP_SERVER_PORT");
			env::remove_var("APP_BASE_URL");
			env::remove_var("APP_API_TOKEN");
			env::remove_var("APP_PLATFORM_TOKEN");
			env::remove_var("APP_LOGIN_METHOD");
		}
	}
}
