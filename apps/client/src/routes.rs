use std::fmt;

/// Client-side route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    /// `/profile` for the signed-in user, `/profile/:username` for anyone.
    Profile(Option<String>),
    Thought(String),
    NoMatch(String),
}

impl Route {
    /// Where the session lands after login and after logout.
    pub const LANDING: Route = Route::Home;

    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim();
        let segments: Vec<&str> = trimmed
            .trim_matches('/')
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["profile"] => Route::Profile(None),
            ["profile", username] => Route::Profile(Some((*username).to_string())),
            ["thought", id] => Route::Thought((*id).to_string()),
            _ => Route::NoMatch(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Login => f.write_str("/login"),
            Route::Signup => f.write_str("/signup"),
            Route::Profile(None) => f.write_str("/profile"),
            Route::Profile(Some(username)) => write!(f, "/profile/{username}"),
            Route::Thought(id) => write!(f, "/thought/{id}"),
            Route::NoMatch(path) => f.write_str(path),
        }
    }
}
