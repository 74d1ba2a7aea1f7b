//! DTOs for reactions_sea adapter.

#[derive(Debug, Clone)]
pub struct ReactionCreate {
    pub thought_id: String,
    pub username: String,
    pub reaction_body: String,
}
