use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cart-calculate request body as the storefront frontend sends it. The
/// mock never inspects it beyond requiring valid JSON, but the client and
/// the test suites build realistic payloads from these types.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CalculateRequest {
	pub billing_country: String,
	pub project_code: String,
	pub country_code: String,
	pub order_items: Vec<RequestOrderItem>,
	pub manual_input_coupon_ids: Vec<u64>,
	pub applied_shipping_method_id: u32,
	pub language: String,
	pub coupon_code: String,
	pub shipping_method: String,
	#[serde(default)]
	pub cart_values: Value,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RequestOrderItem {
	pub sku: String,
	pub project_code: String,
	pub quantity: u32,
	pub is_addon: bool,
	pub is_addon_v2: bool,
	pub addon_setting_id: Option<u64>,
}

impl CalculateRequest {
	/// The two-item TW cart the original checkout suite submits: the $49
	/// mud cake plus the $650 blanket, home delivery, no coupons.
	pub fn two_item_tw_cart() -> Self {
		Self {
			billing_country: "TW".to_string(),
			project_code: "DCS".to_string(),
			country_code: "TW".to_string(),
			order_items: vec![
				RequestOrderItem {
					sku: "純泥G".to_string(),
					project_code: "DCS".to_string(),
					quantity: 1,
					is_addon: false,
					is_addon_v2: false,
					addon_setting_id: None,
				},
				RequestOrderItem {
					sku: "四季被藍綠米".to_string(),
					project_code: "DCS".to_string(),
					quantity: 1,
					is_addon: true,
					is_addon_v2: false,
					addon_setting_id: None,
				},
			],
			manual_input_coupon_ids: vec![],
			applied_shipping_method_id: 2,
			language: "zh_TW".to_string(),
			coupon_code: String::new(),
			shipping_method: "standard".to_string(),
			cart_values: serde_json::json!({
				"cart": {
					"items": [
						{
							"cartItemId": 2292109,
							"product_id": 2292104,
							"variation_id": 2292109,
							"quantity": 1,
							"sku": "純泥G",
							"delivery_class": "normal",
							"project_code": "DCS",
							"sale_price": 49,
							"is_addon_v2": false,
							"parent_product_id": 2292104
						},
						{
							"cartItemId": 2336030,
							"product_id": 2336028,
							"variation_id": 2336030,
							"quantity": 1,
							"sku": "四季被藍綠米",
							"delivery_class": "normal",
							"project_code": "DCS",
							"sale_price": 650,
							"is_addon": true,
							"is_addon_v2": false,
							"parent_product_id": 2336028
						}
					],
					"addonItems": []
				},
				"rewardPoints": {
					"userInputRewardPoints": 0,
					"isUserAppliedRewardPoints": false
				},
				"coupon": {
					"manualInputCouponIds": [],
					"selectedGiveaways": [],
					"redeemedCodes": []
				},
				"billing": { "billingCountry": "TW" },
				"shipping": { "appliedShippingMethodId": 2 },
				"payment": {},
				"invoice": {
					"refundStatement": true,
					"receiptType": "non_business_einvoice"
				}
			}),
		}
	}
}
