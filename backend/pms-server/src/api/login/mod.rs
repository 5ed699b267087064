#[allow(clippy::module_inception)]
pub mod login;
pub mod login_request;
pub mod login_response;
