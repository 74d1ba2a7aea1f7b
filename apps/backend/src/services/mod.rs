//! Application services: validation, authorization decisions and token
//! issuance on top of the repos.

pub mod friends;
pub mod thoughts;
pub mod users;

/// Longest thought or reaction, counted in characters.
pub const MAX_TEXT_CHARS: usize = 280;
