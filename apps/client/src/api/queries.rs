//! GraphQL documents sent by the client.

pub const QUERY_THOUGHTS: &str = r#"
query Thoughts($username: String) {
  thoughts(username: $username) {
    _id thoughtText createdAt username reactionCount
  }
}
"#;

pub const QUERY_THOUGHT: &str = r#"
query Thought($id: ID!) {
  thought(_id: $id) {
    _id thoughtText createdAt username reactionCount
    reactions { _id reactionBody createdAt username }
  }
}
"#;

pub const QUERY_USER: &str = r#"
query User($username: String!) {
  user(username: $username) {
    _id username email friendCount
    friends { _id username }
    thoughts { _id thoughtText createdAt username reactionCount }
  }
}
"#;

pub const QUERY_ME: &str = r#"
query Me {
  me {
    _id username email friendCount
    friends { _id username }
    thoughts { _id thoughtText createdAt username reactionCount }
  }
}
"#;

/// Just enough of `me` for the home page friend list.
pub const QUERY_ME_BASIC: &str = r#"
query MeBasic {
  me {
    _id username email friendCount
    friends { _id username }
  }
}
"#;

pub const LOGIN_USER: &str = r#"
mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    token
    user { _id username }
  }
}
"#;

pub const ADD_USER: &str = r#"
mutation AddUser($username: String!, $email: String!, $password: String!) {
  addUser(username: $username, email: $email, password: $password) {
    token
    user { _id username }
  }
}
"#;

pub const ADD_THOUGHT: &str = r#"
mutation AddThought($thoughtText: String!) {
  addThought(thoughtText: $thoughtText) {
    _id thoughtText createdAt username reactionCount
  }
}
"#;

pub const ADD_REACTION: &str = r#"
mutation AddReaction($thoughtId: ID!, $reactionBody: String!) {
  addReaction(thoughtId: $thoughtId, reactionBody: $reactionBody) {
    _id thoughtText createdAt username reactionCount
    reactions { _id reactionBody createdAt username }
  }
}
"#;

pub const ADD_FRIEND: &str = r#"
mutation AddFriend($id: ID!) {
  addFriend(friendId: $id) {
    _id username friendCount
    friends { _id username }
  }
}
"#;
