pub mod cart;
pub mod pricing;
pub mod session;
