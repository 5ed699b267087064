pub mod request_scope;
pub mod store;
pub mod valid_json;
