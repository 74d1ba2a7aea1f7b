//! Deep Thoughts client: session state, routing, view decisions and the
//! GraphQL client used by the `deep-thoughts` CLI.

pub mod api;
pub mod cache;
pub mod error;
pub mod forms;
pub mod navigation;
pub mod routes;
pub mod session;
pub mod storage;
pub mod views;

pub use error::ClientError;
pub use navigation::Navigator;
pub use routes::Route;
pub use session::{AuthSession, SessionError, SessionStatus};
pub use storage::{FileTokenStore, MemoryTokenStore, TokenStore, TOKEN_KEY};
