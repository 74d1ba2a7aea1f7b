use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use client::api::client::DEFAULT_API_URL;
use client::api::GraphqlClient;
use client::navigation::RecordingNavigator;
use client::{AuthSession, FileTokenStore};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "deep-thoughts")]
#[command(about = "Post, read and react to Deep Thoughts from the terminal")]
struct Cli {
    /// GraphQL endpoint
    #[arg(long, env = "DEEP_THOUGHTS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory holding the `id_token` file
    #[arg(long, env = "DEEP_THOUGHTS_HOME")]
    home: Option<PathBuf>,

    #[command(subcommand)]
    command: cmd::Command,
}

fn default_home() -> PathBuf {
    directories::ProjectDirs::from("dev", "deepthoughts", "deep-thoughts")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".deep-thoughts"))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let home = cli.home.unwrap_or_else(default_home);
    let session = AuthSession::new(FileTokenStore::new(home), RecordingNavigator::new());

    let api = match GraphqlClient::new(cli.api_url).and_then(|api| api.with_session(&session)) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut ctx = cmd::Ctx { session, api };
    match cmd::run(cli.command, &mut ctx).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}
