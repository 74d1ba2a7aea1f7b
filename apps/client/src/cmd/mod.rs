//! CLI commands. Each returns the text to print.

use std::time::{Duration, SystemTime};

use clap::Subcommand;
use client::api::GraphqlClient;
use client::cache::{merge_me, FeedCache};
use client::forms::{FormError, LoginForm, SignupForm, TextDraft, MAX_TEXT_CHARS};
use client::navigation::RecordingNavigator;
use client::views::{self, HomeLayout, ProfileSource};
use client::{AuthSession, ClientError, FileTokenStore, Navigator, Route, SessionError, SessionStatus};
use thiserror::Error;

pub struct Ctx {
    pub session: AuthSession<FileTokenStore, RecordingNavigator>,
    pub api: GraphqlClient,
}

#[derive(Debug, Error)]
pub enum CmdError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Form(#[from] FormError),
}

impl From<SessionError> for CmdError {
    fn from(e: SessionError) -> Self {
        CmdError::Client(e.into())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an account and log in
    Signup {
        username: String,
        email: String,
        #[arg(long, env = "DEEP_THOUGHTS_PASSWORD")]
        password: String,
    },
    /// Log in with email and password
    Login {
        email: String,
        #[arg(long, env = "DEEP_THOUGHTS_PASSWORD")]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the current session
    Whoami,
    /// Show the feed, newest first
    Feed {
        #[arg(long)]
        username: Option<String>,
    },
    /// Show one thought and its reactions
    Thought { id: String },
    /// Post a thought
    Post { text: String },
    /// React to a thought
    React { thought_id: String, text: String },
    /// Add a user to your friends
    Befriend { user_id: String },
    /// Show a profile (yours when no username is given)
    Profile { username: Option<String> },
    /// Render a client route such as `/`, `/profile/bob` or `/thought/<id>`
    Open { path: String },
}

pub async fn run(command: Command, ctx: &mut Ctx) -> Result<String, CmdError> {
    match command {
        Command::Signup {
            username,
            email,
            password,
        } => {
            let form = SignupForm {
                username,
                email,
                password,
            };
            form.validate()?;
            let auth = ctx
                .api
                .add_user(&form.username, &form.email, &form.password)
                .await?;
            start_session(ctx, &auth.token).await
        }
        Command::Login { email, password } => {
            let form = LoginForm { email, password };
            form.validate()?;
            let auth = ctx.api.login(&form.email, &form.password).await?;
            start_session(ctx, &auth.token).await
        }
        Command::Logout => {
            ctx.session.logout()?;
            ctx.api.set_token(None);
            let landing = render_landing(ctx).await?;
            Ok(format!("Logged out.\n\n{landing}"))
        }
        Command::Whoami => whoami(&ctx.session),
        Command::Feed { username } => {
            let thoughts = ctx.api.thoughts(username.as_deref()).await?;
            Ok(views::render_thought_list("Some Feed for Thought(s)...", &thoughts))
        }
        Command::Thought { id } => render_route(ctx, Route::Thought(id)).await,
        Command::Post { text } => {
            let mut draft = TextDraft::new();
            if !draft.edit(&text) {
                return Err(FormError::TooLong(MAX_TEXT_CHARS).into());
            }
            let mut feed = FeedCache::new(ctx.api.thoughts(None).await?);
            let thought = ctx.api.add_thought(draft.submission()?).await?;
            feed.prepend(thought);
            Ok(views::render_thought_list(
                "Some Feed for Thought(s)...",
                feed.thoughts(),
            ))
        }
        Command::React { thought_id, text } => {
            let mut draft = TextDraft::new();
            if !draft.edit(&text) {
                return Err(FormError::TooLong(MAX_TEXT_CHARS).into());
            }
            let thought = ctx
                .api
                .add_reaction(&thought_id, draft.submission()?)
                .await?;
            Ok(views::render_thought(Some(&thought)))
        }
        Command::Befriend { user_id } => {
            let cached = ctx.api.me_basic().await?;
            let updated = ctx.api.add_friend(&user_id).await?;
            let me = match cached {
                Some(mut me) if me.id == updated.id => {
                    merge_me(&mut me, updated);
                    me
                }
                _ => updated,
            };
            Ok(views::render_friend_list(
                &me.username,
                me.friend_count,
                &me.friends,
            ))
        }
        Command::Profile { username } => render_route(ctx, Route::Profile(username)).await,
        Command::Open { path } => render_route(ctx, Route::parse(&path)).await,
    }
}

async fn start_session(ctx: &mut Ctx, token: &str) -> Result<String, CmdError> {
    ctx.session.login(token)?;
    ctx.api.set_token(Some(token.to_string()));
    let greeting = whoami(&ctx.session)?;
    let landing = render_landing(ctx).await?;
    Ok(format!("{greeting}\n{landing}"))
}

/// Render wherever the last session transition navigated to.
async fn render_landing(ctx: &Ctx) -> Result<String, CmdError> {
    let route = ctx.session.navigator().last().unwrap_or(Route::LANDING);
    render_route(ctx, route).await
}

fn whoami(session: &AuthSession<FileTokenStore, RecordingNavigator>) -> Result<String, CmdError> {
    match session.status() {
        SessionStatus::Authenticated(claims) => {
            let until = SystemTime::UNIX_EPOCH + Duration::from_secs(claims.exp.max(0) as u64);
            let left = until
                .duration_since(SystemTime::now())
                .map(|d| d.as_secs() / 60)
                .unwrap_or(0);
            Ok(format!(
                "Logged in as {} ({}), session valid for {left} more minutes\n",
                claims.username, claims.sub
            ))
        }
        SessionStatus::Anonymous => match session.current_profile() {
            Ok(claims) => Ok(format!(
                "Session for {} has expired; log in again\n",
                claims.username
            )),
            Err(SessionError::NoToken) => Ok("Not logged in\n".to_string()),
            Err(e) => Err(e.into()),
        },
    }
}

async fn render_route(ctx: &Ctx, route: Route) -> Result<String, CmdError> {
    let logged_in_as = match ctx.session.status() {
        SessionStatus::Authenticated(claims) => Some(claims.username),
        SessionStatus::Anonymous => None,
    };

    let output = match route {
        Route::Home => {
            let layout = HomeLayout::for_session(logged_in_as.is_some());
            let thoughts = ctx.api.thoughts(None).await?;
            let me = if layout.show_friend_list {
                optional_me(ctx.api.me_basic().await)?
            } else {
                None
            };
            views::render_home(layout, &thoughts, me.as_ref())
        }
        Route::Login => {
            "Log in with `deep-thoughts login <email> --password <password>`\n".to_string()
        }
        Route::Signup => {
            "Sign up with `deep-thoughts signup <username> <email> --password <password>`\n"
                .to_string()
        }
        Route::Profile(param) => {
            let source = views::resolve_profile(logged_in_as.as_deref(), param.as_deref());
            match source {
                ProfileSource::ByUsername(username) => {
                    let user = ctx.api.user(&username).await?;
                    views::render_profile(user.as_ref(), true)
                }
                ProfileSource::Redirect(target) => {
                    ctx.session.navigator().navigate(&target);
                    let me = optional_me(ctx.api.me().await)?;
                    views::render_profile(me.as_ref(), false)
                }
                ProfileSource::Me => {
                    let me = optional_me(ctx.api.me().await)?;
                    views::render_profile(me.as_ref(), false)
                }
            }
        }
        Route::Thought(id) => {
            let thought = ctx.api.thought(&id).await?;
            views::render_thought(thought.as_ref())
        }
        Route::NoMatch(path) => format!("No page at {path}\n"),
    };
    Ok(output)
}

/// An anonymous `me` is an empty result for the views, not a failure.
fn optional_me(
    result: Result<Option<client::api::types::User>, ClientError>,
) -> Result<Option<client::api::types::User>, CmdError> {
    match result {
        Ok(me) => Ok(me),
        Err(e) if e.is_unauthenticated() => Ok(None),
        Err(e) => Err(e.into()),
    }
}
