pub mod calculate_cart;
