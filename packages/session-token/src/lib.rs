//! Session token codec shared by the backend and the client.
//!
//! The backend issues and verifies tokens with the process-wide
//! [`SecurityConfig`]; the client only decodes the payload locally to read
//! claims and expiry, without the secret.

pub mod claims;
pub mod codec;
pub mod config;
pub mod error;

pub use claims::Claims;
pub use codec::{decode_unverified, issue, unix_seconds, verify};
pub use config::{SecurityConfig, DEFAULT_TOKEN_TTL};
pub use error::{InvalidToken, SigningError};
