use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, info};

use crate::domain::session::{AuthState, AuthStateStore, LoginMethod};

fn boxed<E: std::error::Error + Send + 'static>(
	e: E,
) -> Box<dyn std::error::Error + Send> {
	Box::new(e) as Box<dyn std::error::Error + Send>
}

/// [`AuthStateStore`] keeping one JSON snapshot file per login method under
/// a configurable directory, so a run that already logged in with e.g.
/// Google can be replayed without going through the interactive flow again.
#[derive(Debug, Clone)]
pub struct FileAuthStateStore {
	dir: PathBuf,
}

impl FileAuthStateStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	fn snapshot_path(&self, method: LoginMethod) -> PathBuf {
		self.dir.join(format!("auth_state_{method}.json"))
	}
}

#[async_trait]
impl AuthStateStore for FileAuthStateStore {
	async fn save(
		&self,
		state: &AuthState,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		tokio::fs::create_dir_all(&self.dir).await.map_err(boxed)?;

		let path = self.snapshot_path(state.login_method);
		let serialized = serde_json::to_vec_pretty(state).map_err(boxed)?;
		tokio::fs::write(&path, serialized).await.map_err(boxed)?;

		info!(
			"Saved {} auth-state snapshot to {}",
			state.login_method,
			path.display()
		);
		Ok(())
	}

	async fn load(
		&self,
		method: LoginMethod,
	) -> Result<Option<AuthState>, Box<dyn std::error::Error + Send>> {
		let path = self.snapshot_path(method);
		if !path.exists() {
			debug!("No {method} auth-state snapshot at {}", path.display());
			return Ok(None);
		}

		let contents = tokio::fs::read(&path).await.map_err(boxed)?;
		let state: AuthState =
			serde_json::from_slice(&contents).map_err(boxed)?;

		Ok(Some(state))
	}

	async fn clear(
		&self,
		method: LoginMethod,
	) -> Result<(), Box<dyn std::error::Error + Send>> {
		let path = self.snapshot_path(method);
		match tokio::fs::remove_file(&path).await {
			Ok(()) => Ok(()),
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(e) => Err(boxed(e)),
		}
	}
}
