//! DTOs for thoughts_sea adapter.

/// DTO for creating a thought on behalf of an authenticated author.
#[derive(Debug, Clone)]
pub struct ThoughtCreate {
    pub user_id: String,
    pub username: String,
    pub thought_text: String,
}
