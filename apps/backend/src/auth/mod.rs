//! Authentication: per-request identity, token minting and password hashing.

pub mod context;
pub mod jwt;
pub mod password;

pub use context::{Identity, RequestContext};
