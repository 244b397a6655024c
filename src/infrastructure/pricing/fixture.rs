use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::domain::cart::{
	AppliedCoupon, CartQuote, CartSummary, CouponCriterion, OrderItem,
	QuoteEnvelope, QuoteHeaders, QuotePayload, ShippingFee, ShippingMethod,
	ShippingRule,
};

static CART_QUOTE: OnceLock<CartQuote> = OnceLock::new();

/// The canned cart-calculate document, built once per process and cloned
/// per-request. Values mirror a capture of the real pricing service for a
/// two-item TW cart totalling $699 with free home delivery.
pub fn cart_quote_fixture() -> &'static CartQuote {
	CART_QUOTE.get_or_init(build_cart_quote)
}

fn build_cart_quote() -> CartQuote {
	CartQuote {
		data: QuoteEnvelope {
			data: QuotePayload {
				data: build_cart_summary(),
			},
			status: 200,
			status_text: String::new(),
			headers: QuoteHeaders {
				cache_control: "no-cache, private, no-store, no-cache, \
				                must-revalidate, proxy-revalidate, max-age=0"
					.to_string(),
				content_type: "application/json".to_string(),
			},
		},
		is_validating: true,
		is_loading: false,
	}
}

fn build_cart_summary() -> CartSummary {
	CartSummary {
		cart_uuid: "mocked-uuid-123".to_string(),
		subtotal: 699,
		total_without_addon_v2: 699,
		total_after_discount: 699,
		total_after_shipping: 699,
		tax: 0,
		notice_info: None,
		total: 699,
		order_items: vec![
			order_item("純泥G", 2292109, 49, 2292104),
			order_item("四季被藍綠米", 2336030, 650, 2336028),
		],
		discount_items: vec![],
		applied_coupons: vec![
			applied_coupon(4034, Some(23008)),
			applied_coupon(4559, Some(25290)),
			applied_coupon(1292, None),
		],
		giveaways: vec![],
		applied_shipping_method_id: 2,
		shipping_methods: vec![home_delivery_method()],
		cart_validation_messages: vec![],
		addon_v2_total: 0,
		addon_v2_total_before_discount: 0,
		total_before_tax: 699,
	}
}

fn order_item(
	sku: &str,
	id: u64,
	sale_price: i64,
	parent_product_id: u64,
) -> OrderItem {
	OrderItem {
		sku: sku.to_string(),
		quantity: 1,
		id,
		sale_price,
		parent_product_id,
		delivery_class: "normal".to_string(),
		applied_coupon_ids: vec![4034, 4559, 1292],
		subship_info: None,
		is_addon_v2: false,
		addon_v2_price: None,
		addon_setting_id: None,
		addon_scope: None,
		addon_main_product_id: None,
	}
}

fn applied_coupon(coupon_id: u64, criterion_id: Option<u64>) -> AppliedCoupon {
	AppliedCoupon {
		coupon_id,
		criterions: criterion_id
			.map(|id| {
				vec![CouponCriterion {
					id,
					coupon_id,
					criterion_quantity: 0,
					criterion_amount: 0,
					applied_status: "invisible".to_string(),
					left_quantity: 0,
					left_amount: 0,
					count: 0,
				}]
			})
			.unwrap_or_default(),
	}
}

fn home_delivery_method() -> ShippingMethod {
	let free_over_499 = ShippingFee {
		id: 2049,
		name: "台灣常溫宅配滿 $499 免運".to_string(),
		min_amount: 499,
		max_amount: None,
		fee: 0,
	};
	let under_499 = ShippingFee {
		id: 2048,
		name: "台灣常溫宅配未滿 $499，運費$80".to_string(),
		min_amount: 0,
		max_amount: Some(498),
		fee: 80,
	};

	let mut shipping_rules = BTreeMap::new();
	shipping_rules.insert("normal".to_string(), vec![ShippingRule {
		shipping_rule_id: 90,
		delivery_class: "normal".to_string(),
		excluded_shipping_class: vec![],
		name: "home_delivery_normal".to_string(),
		applied_shipping_fee: free_over_499.clone(),
		shipping_fees: vec![under_499, free_over_499],
	}]);

	let mut discount_rules = BTreeMap::new();
	discount_rules.insert("normal".to_string(), vec![]);

	ShippingMethod {
		shipping_method_id: 2,
		shipping_method_type: "home_delivery".to_string(),
		shipping_method_code: "DOD".to_string(),
		name: "宅配".to_string(),
		supported_payment_option_types: vec![],
		total_fee: 0,
		shipping_rules,
		discount_rules,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_fixture_totals() {
		let summary = cart_quote_fixture().summary();

		assert_eq!(summary.subtotal, 699);
		assert_eq!(summary.total, 699);
		assert_eq!(summary.total_before_tax, 699);
		assert_eq!(summary.tax, 0);
		assert_eq!(
			summary.subtotal,
			summary
				.order_items
				.iter()
				.map(|item| item.sale_price * i64::from(item.quantity))
				.sum::<i64>()
		);
	}

	#[test]
	fn test_fixture_order_items() {
		let summary = cart_quote_fixture().summary();

		assert_eq!(summary.order_items.len(), 2);

		let mud_cake = summary.order_item(2292109).unwrap();
		assert_eq!(mud_cake.sale_price, 49);
		assert_eq!(mud_cake.quantity, 1);
		assert_eq!(mud_cake.parent_product_id, 2292104);

		let blanket = summary.order_item(2336030).unwrap();
		assert_eq!(blanket.sale_price, 650);
		assert_eq!(blanket.quantity, 1);
		assert_eq!(blanket.applied_coupon_ids, vec![4034, 4559, 1292]);
	}

	#[test]
	fn test_fixture_shipping_fee_tiers() {
		let summary = cart_quote_fixture().summary();
		let method = &summary.shipping_methods[0];

		assert_eq!(method.shipping_method_id, summary.applied_shipping_method_id);
		assert_eq!(method.shipping_method_code, "DOD");
		assert_eq!(method.total_fee, 0);

		let rule = &method.shipping_rules["normal"][0];
		assert_eq!(rule.shipping_fees.len(), 2);
		assert_eq!(rule.shipping_fees[0].min_amount, 0);
		assert_eq!(rule.shipping_fees[0].max_amount, Some(498));
		assert_eq!(rule.shipping_fees[0].fee, 80);
		assert_eq!(rule.shipping_fees[1].min_amount, 499);
		assert_eq!(rule.shipping_fees[1].max_amount, None);
		assert_eq!(rule.shipping_fees[1].fee, 0);

		// The cart is over the free-shipping threshold, so the open-ended
		// tier is the applied one.
		assert_eq!(rule.applied_shipping_fee.id, 2049);
		assert_eq!(rule.applied_shipping_fee.fee, 0);
	}

	#[test]
	fn test_fixture_applied_coupons() {
		let summary = cart_quote_fixture().summary();

		let ids: Vec<u64> = summary
			.applied_coupons
			.iter()
			.map(|coupon| coupon.coupon_id)
			.collect();
		assert_eq!(ids, vec![4034, 4559, 1292]);

		assert_eq!(summary.applied_coupons[0].criterions.len(), 1);
		assert_eq!(
			summary.applied_coupons[0].criterions[0].applied_status,
			"invisible"
		);
		assert!(summary.applied_coupons[2].criterions.is_empty());
	}

	#[test]
	fn test_fixture_envelope_keys() {
		let json = serde_json::to_value(cart_quote_fixture()).unwrap();

		assert_eq!(json["isValidating"], true);
		assert_eq!(json["isLoading"], false);
		assert_eq!(json["data"]["status"], 200);
		assert_eq!(json["data"]["statusText"], "");
		assert_eq!(json["data"]["headers"]["content-type"], "application/json");
		assert_eq!(json["data"]["data"]["data"]["subtotal"], 699);
		assert_eq!(json["data"]["data"]["data"]["notice_info"], serde_json::Value::Null);
	}

	#[test]
	fn test_fixture_round_trips_through_json() {
		let serialized = serde_json::to_string(cart_quote_fixture()).unwrap();
		let parsed: CartQuote = serde_json::from_str(&serialized).unwrap();

		assert_eq!(&parsed, cart_quote_fixture());
	}
}
