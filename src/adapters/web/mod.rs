pub mod cart_calculate_handler;
pub mod errors;
pub mod schema;
