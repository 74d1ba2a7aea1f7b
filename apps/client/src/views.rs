//! View decisions and plain-text rendering for the CLI.

use std::fmt::Write as _;

use crate::api::types::{Friend, Thought, User};
use crate::routes::Route;

/// What the profile page has to do for a given route parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    /// Viewing one's own profile by name: go to `/profile` instead.
    Redirect(Route),
    ByUsername(String),
    Me,
}

/// `session_username` is the username of a logged-in (unexpired) session.
pub fn resolve_profile(session_username: Option<&str>, param: Option<&str>) -> ProfileSource {
    match (session_username, param) {
        (Some(own), Some(param)) if own == param => ProfileSource::Redirect(Route::Profile(None)),
        (_, Some(param)) => ProfileSource::ByUsername(param.to_string()),
        (_, None) => ProfileSource::Me,
    }
}

pub const NEEDS_LOGIN: &str =
    "You need to be logged in to see this page. Use `deep-thoughts login` or `deep-thoughts signup`.";

/// Render a profile. `viewing_other` switches the heading and offers the
/// befriend action.
pub fn render_profile(user: Option<&User>, viewing_other: bool) -> String {
    let Some(user) = user else {
        return NEEDS_LOGIN.to_string();
    };

    let mut out = String::new();
    if viewing_other {
        let _ = writeln!(out, "Viewing {}'s profile", user.username);
        let _ = writeln!(out, "(befriend with `deep-thoughts befriend {}`)", user.id);
    } else {
        let _ = writeln!(out, "Viewing your profile");
    }
    out.push('\n');
    out.push_str(&render_thought_list(
        &format!("{}'s thoughts...", user.username),
        &user.thoughts,
    ));
    out.push('\n');
    out.push_str(&render_friend_list(&user.username, user.friend_count, &user.friends));
    out
}

/// Which panels the home page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HomeLayout {
    pub show_thought_form: bool,
    pub show_friend_list: bool,
}

impl HomeLayout {
    pub fn for_session(logged_in: bool) -> Self {
        Self {
            show_thought_form: logged_in,
            show_friend_list: logged_in,
        }
    }
}

pub fn render_home(layout: HomeLayout, thoughts: &[Thought], me: Option<&User>) -> String {
    let mut out = String::new();
    if layout.show_thought_form {
        out.push_str("Post a thought with `deep-thoughts post <text>` (280 characters max)\n\n");
    }
    out.push_str(&render_thought_list("Some Feed for Thought(s)...", thoughts));
    if let (true, Some(me)) = (layout.show_friend_list, me) {
        out.push('\n');
        out.push_str(&render_friend_list(&me.username, me.friend_count, &me.friends));
    }
    out
}

pub fn render_thought_list(title: &str, thoughts: &[Thought]) -> String {
    if thoughts.is_empty() {
        return "No Thoughts Yet\n".to_string();
    }

    let mut out = format!("{title}\n");
    for thought in thoughts {
        let _ = writeln!(
            out,
            "- {} thought on {} [{}]",
            thought.username, thought.created_at, thought.id
        );
        let _ = writeln!(out, "  {}", thought.thought_text);
        let _ = writeln!(
            out,
            "  Reactions: {} || {}",
            thought.reaction_count,
            if thought.reaction_count > 0 {
                "see the discussion"
            } else {
                "start the discussion!"
            }
        );
    }
    out
}

pub fn render_thought(thought: Option<&Thought>) -> String {
    let Some(thought) = thought else {
        return "Thought not found\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} thought on {}",
        thought.username, thought.created_at
    );
    let _ = writeln!(out, "  {}", thought.thought_text);
    if !thought.reactions.is_empty() {
        let _ = writeln!(out, "Reactions");
        for reaction in &thought.reactions {
            let _ = writeln!(
                out,
                "  {} // {} on {}",
                reaction.reaction_body, reaction.username, reaction.created_at
            );
        }
    }
    out
}

pub fn render_friend_list(username: &str, friend_count: i64, friends: &[Friend]) -> String {
    if friends.is_empty() {
        return format!("{username}, make some friends!\n");
    }

    let noun = if friend_count == 1 { "friend" } else { "friends" };
    let mut out = format!("{username}'s {friend_count} {noun}\n");
    for friend in friends {
        let _ = writeln!(out, "  {}", friend.username);
    }
    out
}
