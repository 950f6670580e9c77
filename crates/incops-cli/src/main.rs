//! incops - terminal login client for the IncOps backend.
//!
//! Logs in against `/api/login`, keeps the session in the cache directory and
//! hands out the bearer token to scripts via `incops token`.

mod view;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use incops_core::{ApiError, Config, FileSessionStore, LoginOutcome, SessionClient};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use view::TerminalView;

type Client = SessionClient<FileSessionStore>;

#[derive(Debug, Parser)]
#[command(name = "incops", version, about = "Terminal login client for the IncOps backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Log in (prompts for anything missing)
    Login {
        /// Email or bare username
        email: Option<String>,

        /// Use the built-in test credentials
        #[arg(long)]
        test: bool,
    },
    /// Forget the current session
    Logout,
    /// Print the bearer token of the current session
    Token,
    /// Show who is logged in and until when
    Status,
    /// Fetch the profile of the logged-in user
    Profile,
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();

    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::from_env_defaults()
        }
    };

    let cache_dir = config.cache_dir().unwrap_or_else(|_| PathBuf::from("./cache"));
    let client = SessionClient::from_config(&config, FileSessionStore::new(cache_dir))?;

    let mut view = TerminalView::new();
    client.page_loaded(&mut view);

    match cli.command {
        Command::Login { email, test } => login(&client, &mut view, &mut config, email, test).await,
        Command::Logout => {
            client.logout(&mut view)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Token => Ok(token(&client)),
        Command::Status => Ok(status(&client)),
        Command::Profile => profile(&client).await,
    }
}

async fn login(
    client: &Client,
    view: &mut TerminalView,
    config: &mut Config,
    email: Option<String>,
    use_test_credentials: bool,
) -> Result<ExitCode> {
    let (email, password) = match (use_test_credentials, view.test_credentials()) {
        (true, Some(pair)) => pair,
        _ => {
            let email = match email {
                Some(email) => email,
                None => prompt_email(config.last_email.as_deref())?,
            };
            let password = rpassword::prompt_password("Password: ")?;
            (email, password)
        }
    };

    match client.submit_login(view, &email, &password).await {
        LoginOutcome::LoggedIn(_) => {
            config.last_email = Some(email);
            if let Err(e) = config.save() {
                warn!(error = %e, "Failed to save config");
            }
            Ok(ExitCode::SUCCESS)
        }
        LoginOutcome::Invalid | LoginOutcome::Rejected(_) | LoginOutcome::Unreachable => {
            Ok(ExitCode::FAILURE)
        }
    }
}

fn prompt_email(last: Option<&str>) -> Result<String> {
    match last {
        Some(last) => print!("Email [{}]: ", last),
        None => print!("Email: "),
    }
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input).context("Failed to read email")?;
    let input = input.trim();

    Ok(match last {
        Some(last) if input.is_empty() => last.to_string(),
        _ => input.to_string(),
    })
}

fn token(client: &Client) -> ExitCode {
    match client.get_auth_token() {
        Some(token) => {
            println!("{}", token);
            ExitCode::SUCCESS
        }
        None => {
            eprintln!("Not logged in");
            ExitCode::FAILURE
        }
    }
}

fn status(client: &Client) -> ExitCode {
    match client.current_session() {
        Some(session) => {
            println!("Logged in as {}", session.user.username);
            if let Some(ref role) = session.user.role {
                println!("Role: {}", role);
            }
            println!(
                "Session expires {} ({} minutes left)",
                session.expires_at.format("%Y-%m-%d %H:%M UTC"),
                session.minutes_until_expiry()
            );
            ExitCode::SUCCESS
        }
        None => {
            println!("Not logged in");
            ExitCode::FAILURE
        }
    }
}

async fn profile(client: &Client) -> Result<ExitCode> {
    let Some(api) = client.authorized_api() else {
        eprintln!("Not logged in. Run `incops login` first.");
        return Ok(ExitCode::FAILURE);
    };

    match api.profile().await {
        Ok(profile) => {
            println!("{}", serde_json::to_string_pretty(&profile)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(ApiError::Unauthorized) => {
            info!("Profile request rejected the stored token");
            eprintln!("The server rejected the session token. Run `incops login` again.");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).context("Failed to fetch profile"),
    }
}
