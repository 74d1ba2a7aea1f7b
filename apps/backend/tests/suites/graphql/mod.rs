pub mod auth_gate;
pub mod mutations;
pub mod queries;
