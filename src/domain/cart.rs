use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Full cart-calculate response document as captured from the production
/// pricing service. The outer layers mirror the SWR envelope the storefront
/// frontend sees; the innermost [`CartSummary`] is the priced cart.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CartQuote {
	pub data: QuoteEnvelope,
	#[serde(rename = "isValidating")]
	pub is_validating: bool,
	#[serde(rename = "isLoading")]
	pub is_loading: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QuoteEnvelope {
	pub data: QuotePayload,
	// The capture uses `status`, not `status_code`; see DESIGN.md.
	pub status: u16,
	#[serde(rename = "statusText")]
	pub status_text: String,
	pub headers: QuoteHeaders,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QuotePayload {
	pub data: CartSummary,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QuoteHeaders {
	#[serde(rename = "cache-control")]
	pub cache_control: String,
	#[serde(rename = "content-type")]
	pub content_type: String,
}

/// Priced cart: totals, line items, coupon applications and the shipping
/// method with its fee tiers.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CartSummary {
	pub cart_uuid: String,
	pub subtotal: i64,
	pub total_without_addon_v2: i64,
	pub total_after_discount: i64,
	pub total_after_shipping: i64,
	pub tax: i64,
	pub notice_info: Option<Value>,
	pub total: i64,
	pub order_items: Vec<OrderItem>,
	pub discount_items: Vec<Value>,
	pub applied_coupons: Vec<AppliedCoupon>,
	pub giveaways: Vec<Value>,
	pub applied_shipping_method_id: u32,
	pub shipping_methods: Vec<ShippingMethod>,
	pub cart_validation_messages: Vec<Value>,
	pub addon_v2_total: i64,
	pub addon_v2_total_before_discount: i64,
	pub total_before_tax: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OrderItem {
	pub sku: String,
	pub quantity: u32,
	pub id: u64,
	pub sale_price: i64,
	pub parent_product_id: u64,
	pub delivery_class: String,
	pub applied_coupon_ids: Vec<u64>,
	pub subship_info: Option<Value>,
	pub is_addon_v2: bool,
	pub addon_v2_price: Option<i64>,
	pub addon_setting_id: Option<u64>,
	pub addon_scope: Option<String>,
	pub addon_main_product_id: Option<u64>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppliedCoupon {
	pub coupon_id: u64,
	pub criterions: Vec<CouponCriterion>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CouponCriterion {
	pub id: u64,
	pub coupon_id: u64,
	pub criterion_quantity: u32,
	pub criterion_amount: i64,
	pub applied_status: String,
	pub left_quantity: u32,
	pub left_amount: i64,
	pub count: u32,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ShippingMethod {
	pub shipping_method_id: u32,
	pub shipping_method_type: String,
	pub shipping_method_code: String,
	pub name: String,
	pub supported_payment_option_types: Vec<Value>,
	pub total_fee: i64,
	/// Rules grouped by delivery class, e.g. `"normal"`.
	pub shipping_rules: std::collections::BTreeMap<String, Vec<ShippingRule>>,
	pub discount_rules: std::collections::BTreeMap<String, Vec<Value>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ShippingRule {
	pub shipping_rule_id: u64,
	pub delivery_class: String,
	pub excluded_shipping_class: Vec<Value>,
	pub name: String,
	pub applied_shipping_fee: ShippingFee,
	pub shipping_fees: Vec<ShippingFee>,
}

/// One fee tier keyed by a `[min_amount, max_amount]` range; an open-ended
/// tier has `max_amount: None`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ShippingFee {
	pub id: u64,
	pub name: String,
	pub min_amount: i64,
	pub max_amount: Option<i64>,
	pub fee: i64,
}

impl CartQuote {
	/// The priced cart buried under the three `data` envelopes.
	pub fn summary(&self) -> &CartSummary {
		&self.data.data.data
	}
}

impl CartSummary {
	pub fn order_item(&self, id: u64) -> Option<&OrderItem> {
		self.order_items.iter().find(|item| item.id == id)
	}
}
