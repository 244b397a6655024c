use cart_pricing_mock::domain::session::{
	AuthState, AuthStateStore, SessionCookie,
};
use cart_pricing_mock::infrastructure::session::file_auth_state_store::FileAuthStateStore;
use uuid::Uuid;

mod support;

use crate::support::test_config;

// Reusing a snapshot across runs is the whole point of the store: a second
// store over the same directory must see what the first one saved.
#[actix_web::test]
async fn test_snapshot_survives_store_recreation() {
	let mut config = test_config(0);
	config.auth_state_dir = std::env::temp_dir()
		.join(format!("auth-state-{}", Uuid::new_v4()))
		.to_string_lossy()
		.into_owned();

	let state = AuthState::new(
		config.login_method,
		vec![SessionCookie {
			name: "userid".to_string(),
			value: "u-98765".to_string(),
			domain: ".dogcatstar.com".to_string(),
			path: "/".to_string(),
			secure: true,
			http_only: true,
		}],
		vec![],
	);

	let store = FileAuthStateStore::new(&config.auth_state_dir);
	store.save(&state).await.unwrap();

	let reopened = FileAuthStateStore::new(&config.auth_state_dir);
	let loaded = reopened.load(config.login_method).await.unwrap().unwrap();

	assert_eq!(loaded, state);
	assert_eq!(loaded.cookies[0].name, "userid");
}
