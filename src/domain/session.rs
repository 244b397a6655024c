use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Interactive login flow the snapshot was captured from.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LoginMethod {
	Google,
	Facebook,
	Phone,
}

impl LoginMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			LoginMethod::Google => "google",
			LoginMethod::Facebook => "facebook",
			LoginMethod::Phone => "phone",
		}
	}
}

impl std::fmt::Display for LoginMethod {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Serialized browser session (cookies plus local storage) captured after a
/// successful interactive login and replayed on later runs to skip it.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AuthState {
	pub snapshot_id: Uuid,
	pub login_method: LoginMethod,
	pub cookies: Vec<SessionCookie>,
	pub local_storage: Vec<StorageEntry>,
	#[serde(with = "time::serde::rfc3339")]
	pub saved_at: OffsetDateTime,
}

impl AuthState {
	pub fn new(
		login_method: LoginMethod,
		cookies: Vec<SessionCookie>,
		local_storage: Vec<StorageEntry>,
	) -> Self {
		Self {
			snapshot_id: Uuid::new_v4(),
			login_method,
			cookies,
			local_storage,
			saved_at: OffsetDateTime::now_utc(),
		}
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SessionCookie {
	pub name: String,
	pub value: String,
	pub domain: String,
	pub path: String,
	pub secure: bool,
	pub http_only: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct StorageEntry {
	pub origin: String,
	pub key: String,
	pub value: String,
}

/// Persistence seam for auth-state snapshots, keyed by login method.
#[async_trait]
pub trait AuthStateStore: Send + Sync + 'static {
	async fn save(
		&self,
		state: &AuthState,
	) -> Result<(), Box<dyn std::error::Error + Send>>;

	/// A missing snapshot is `Ok(None)`, never an error.
	async fn load(
		&self,
		method: LoginMethod,
	) -> Result<Option<AuthState>, Box<dyn std::error::Error + Send>>;

	async fn clear(
		&self,
		method: LoginMethod,
	) -> Result<(), Box<dyn std::error::Error + Send>>;
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_login_method_serializes_snake_case() {
		assert_eq!(
			serde_json::to_string(&LoginMethod::Google).unwrap(),
			"\"google\""
		);
		assert_eq!(
			serde_json::from_str::<LoginMethod>("\"phone\"").unwrap(),
			LoginMethod::Phone
		);
	}

	#[test]
	fn test_login_method_display_matches_as_str() {
		for method in
			[LoginMethod::Google, LoginMethod::Facebook, LoginMethod::Phone]
		{
			assert_eq!(method.to_string(), method.as_str());
		}
	}
}
