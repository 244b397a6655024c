use crate::domain::cart::CartQuote;
use crate::domain::pricing::PricingSource;

/// Produces the priced-cart document for a calculate request. The mock's
/// source is static, so there is no command to pass through.
#[derive(Clone)]
pub struct CalculateCartUseCase<S: PricingSource> {
	pricing_source: S,
}

impl<S: PricingSource> CalculateCartUseCase<S> {
	pub fn new(pricing_source: S) -> Self {
		Self { pricing_source }
	}

	pub async fn execute(
		&self,
	) -> Result<CartQuote, Box<dyn std::error::Error + Send>> {
		self.pricing_source.quote().await
	}
}
