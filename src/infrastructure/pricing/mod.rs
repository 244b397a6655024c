pub mod fixture;
pub mod static_quote;
