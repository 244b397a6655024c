use async_trait::async_trait;

use crate::domain::cart::CartQuote;
use crate::domain::pricing::PricingSource;
use crate::infrastructure::pricing::fixture::cart_quote_fixture;

/// [`PricingSource`] backed by the canned capture. Every quote is a fresh
/// clone of the process-wide fixture so no request can alias another's
/// document.
#[derive(Debug, Clone, Default)]
pub struct StaticQuoteSource;

impl StaticQuoteSource {
	pub fn new() -> Self {
		Self
	}
}

#[async_trait]
impl PricingSource for StaticQuoteSource {
	async fn quote(
		&self,
	) -> Result<CartQuote, Box<dyn std::error::Error + Send>> {
		Ok(cart_quote_fixture().clone())
	}
}
