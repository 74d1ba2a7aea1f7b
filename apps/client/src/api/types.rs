use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub reaction_body: String,
    pub created_at: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    #[serde(rename = "_id")]
    pub id: String,
    pub thought_text: String,
    pub created_at: String,
    pub username: String,
    #[serde(default)]
    pub reaction_count: i64,
    #[serde(default)]
    pub reactions: Vec<Reaction>,
}

/// Friend entries carry only what the friend list shows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Friend {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub friend_count: i64,
    #[serde(default)]
    pub thoughts: Vec<Thought>,
    #[serde(default)]
    pub friends: Vec<Friend>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Auth {
    pub token: String,
    pub user: Friend,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub trace_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<ErrorExtensions>,
}

impl GraphqlError {
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref()?.code.as_deref()
    }
}

/// Wire envelope of every GraphQL response.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

// Per-operation `data` shapes.

#[derive(Debug, Deserialize)]
pub struct ThoughtsData {
    pub thoughts: Vec<Thought>,
}

#[derive(Debug, Deserialize)]
pub struct ThoughtData {
    pub thought: Option<Thought>,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct MeData {
    pub me: Option<User>,
}

#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub login: Auth,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserData {
    pub add_user: Auth,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddThoughtData {
    pub add_thought: Option<Thought>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddReactionData {
    pub add_reaction: Option<Thought>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendData {
    pub add_friend: Option<User>,
}
