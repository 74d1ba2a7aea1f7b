pub mod login;
pub mod request_context;
