mod request_scope;
mod store;
