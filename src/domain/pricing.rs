use async_trait::async_trait;

use crate::domain::cart::CartQuote;

/// Source of cart-calculate quote documents.
///
/// The mock implementation serves one fixed document; a live implementation
/// would proxy the real pricing service.
#[async_trait]
pub trait PricingSource: Send + Sync + 'static {
	async fn quote(
		&self,
	) -> Result<CartQuote, Box<dyn std::error::Error + Send>>;
}
