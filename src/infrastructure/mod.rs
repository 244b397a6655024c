pub mod config;
pub mod http;
pub mod pricing;
pub mod session;
