//! Adapters for external dependencies.

pub mod friendships_sea;
pub mod reactions_sea;
pub mod thoughts_sea;
pub mod users_sea;
