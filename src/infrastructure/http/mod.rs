pub mod cart_api_client;
