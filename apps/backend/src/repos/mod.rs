//! Repository functions for the domain layer (generic over ConnectionTrait).

pub mod friendships;
pub mod reactions;
pub mod thoughts;
pub mod users;
