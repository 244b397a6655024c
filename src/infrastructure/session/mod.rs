pub mod file_auth_state_store;
