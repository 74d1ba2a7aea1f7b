pub mod friendships;
pub mod reactions;
pub mod thoughts;
pub mod users;

pub use friendships::Entity as Friendships;
pub use friendships::Model as Friendship;
pub use reactions::Entity as Reactions;
pub use reactions::Model as Reaction;
pub use thoughts::Entity as Thoughts;
pub use thoughts::Model as Thought;
pub use users::Entity as Users;
pub use users::Model as User;
