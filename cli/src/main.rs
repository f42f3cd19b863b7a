mod storage;
mod transport;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use jobtrack_core::services::{applications, auth, dashboard, interviews};
use jobtrack_core::types::{
    ApplicationForm, ApplicationStatus, InterviewForm, LoginRequest, PageRequest, RegisterRequest, RoundResult,
    RoundType,
};
use jobtrack_core::{ApiError, AuthScheme, Dispatcher, GuardOutcome, Route, RouteGuard, SessionStore};
use serde_json::Value;

use crate::storage::FileStorage;
use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("not logged in; run `jobtrack login` first")]
    NotLoggedIn,
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("config directory unavailable: {0}")]
    ConfigDir(io::Error),
    #[error("failed to read input: {0}")]
    Input(io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("cancelled")]
    Cancelled,
}

#[derive(Parser, Debug)]
#[command(name = "jobtrack", about = "Job application tracker CLI", version)]
struct Cli {
    #[arg(long, env = "JOBTRACK_BASE_URL", default_value = "http://localhost:8080")]
    base_url: String,

    #[arg(long, env = "JOBTRACK_AUTH_SCHEME", default_value = "bearer")]
    auth_scheme: AuthScheme,

    #[arg(long, env = "JOBTRACK_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create an account.
    Register(RegisterArgs),
    /// Sign in and store the session.
    Login(LoginArgs),
    /// Forget the stored session.
    Logout,
    /// Show the cached profile.
    Whoami,
    /// Show application counts by status.
    Dashboard,
    /// Manage job applications.
    Apps(AppsCommand),
    /// Manage interview rounds.
    Interviews(InterviewsCommand),
}

#[derive(Args, Debug)]
struct RegisterArgs {
    #[arg(long)]
    email: String,
    #[arg(long, help = "Password (will prompt if not provided)")]
    password: Option<String>,
    #[arg(long, help = "Password confirmation (will prompt if not provided)")]
    confirm_password: Option<String>,
}

#[derive(Args, Debug)]
struct LoginArgs {
    #[arg(long)]
    email: String,
    #[arg(long, help = "Password (will prompt if not provided)")]
    password: Option<String>,
}

#[derive(Args, Debug)]
struct AppsCommand {
    #[command(subcommand)]
    command: AppsSubcommand,
}

#[derive(Subcommand, Debug)]
enum AppsSubcommand {
    List {
        /// Zero-based page index.
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = PageRequest::DEFAULT_SIZE)]
        size: u32,
    },
    Show {
        id: i64,
    },
    Create {
        #[arg(long)]
        company: String,
        #[arg(long)]
        role: String,
        #[arg(long, default_value = "APPLIED")]
        status: ApplicationStatus,
        /// `YYYY-MM-DD`
        #[arg(long)]
        applied_date: String,
    },
    /// Replace an application; omitted fields keep their current values.
    Update {
        id: i64,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<ApplicationStatus>,
        #[arg(long)]
        applied_date: Option<String>,
    },
    Delete {
        id: i64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug)]
struct InterviewsCommand {
    #[command(subcommand)]
    command: InterviewsSubcommand,
}

#[derive(Args, Debug)]
struct RoundArgs {
    #[arg(long = "type")]
    round_type: RoundType,
    /// `YYYY-MM-DD`
    #[arg(long)]
    date: String,
    #[arg(long, default_value = "PENDING")]
    result: RoundResult,
    #[arg(long)]
    notes: Option<String>,
}

impl From<RoundArgs> for InterviewForm {
    fn from(args: RoundArgs) -> Self {
        Self {
            round_type: args.round_type,
            interview_date: args.date,
            notes: args.notes,
            result: args.result,
        }
    }
}

#[derive(Subcommand, Debug)]
enum InterviewsSubcommand {
    List {
        application_id: i64,
    },
    Add {
        application_id: i64,
        #[command(flatten)]
        round: RoundArgs,
    },
    Update {
        id: i64,
        #[command(flatten)]
        round: RoundArgs,
    },
    Delete {
        id: i64,
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

struct CliContext {
    dispatcher: Dispatcher,
    guard: RouteGuard,
}

impl CliContext {
    fn new(cli: &Cli) -> Result<Self, CliError> {
        let dir = storage::config_dir(cli.config_dir.clone()).map_err(CliError::ConfigDir)?;
        let session = SessionStore::new(cli.auth_scheme, FileStorage::in_dir(&dir));
        let transport = ReqwestTransport::new(&cli.base_url);
        let dispatcher = Dispatcher::new(session.clone(), transport, |login_path: &str| {
            eprintln!("session expired or rejected; sign in again with `jobtrack login` ({login_path})");
        });
        tracing::debug!(base_url = %cli.base_url, scheme = %cli.auth_scheme, dir = %dir.display(), "cli context ready");
        Ok(Self {
            dispatcher,
            guard: RouteGuard::new(session),
        })
    }

    /// Refuse to run a protected command without a session.
    fn require(&self, route: Route) -> Result<(), CliError> {
        match self.guard.evaluate(route) {
            GuardOutcome::Allowed => Ok(()),
            GuardOutcome::Redirected { .. } => Err(CliError::NotLoggedIn),
        }
    }
}

impl CliError {
    /// Text shown on stderr; server-supplied messages win over the generic form.
    fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(&e.to_string()),
            other => other.to_string(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = CliContext::new(&cli)?;

    match cli.command {
        Command::Register(args) => run_register(&ctx, args).await,
        Command::Login(args) => run_login(&ctx, args).await,
        Command::Logout => {
            auth::logout(&ctx.dispatcher);
            println!("logged out");
            Ok(())
        }
        Command::Whoami => run_whoami(&ctx),
        Command::Dashboard => run_dashboard(&ctx).await,
        Command::Apps(apps) => run_apps(&ctx, apps).await,
        Command::Interviews(rounds) => run_interviews(&ctx, rounds).await,
    }
}

async fn run_register(ctx: &CliContext, args: RegisterArgs) -> Result<(), CliError> {
    let password = value_or_prompt(args.password, "Password")?;
    let confirm_password = value_or_prompt(args.confirm_password, "Confirm password")?;
    let form = RegisterRequest {
        email: args.email,
        password,
        confirm_password,
    };
    let message = auth::register(&ctx.dispatcher, &form).await?;
    println!("{}", if message.is_empty() { "registered" } else { message.as_str() });
    Ok(())
}

async fn run_login(ctx: &CliContext, args: LoginArgs) -> Result<(), CliError> {
    let password = value_or_prompt(args.password, "Password")?;
    let form = LoginRequest {
        email: args.email,
        password,
    };
    let profile = auth::login(&ctx.dispatcher, &form).await?;
    print_json(&serde_json::to_value(profile)?)
}

fn run_whoami(ctx: &CliContext) -> Result<(), CliError> {
    ctx.require(Route::Dashboard)?;
    match ctx.dispatcher.session().current_profile() {
        Some(profile) => print_json(&serde_json::to_value(profile)?),
        None => {
            println!("logged in (no cached profile)");
            Ok(())
        }
    }
}

async fn run_dashboard(ctx: &CliContext) -> Result<(), CliError> {
    ctx.require(Route::Dashboard)?;
    let stats = dashboard::stats(&ctx.dispatcher).await?;
    print_json(&serde_json::to_value(stats)?)
}

async fn run_apps(ctx: &CliContext, apps: AppsCommand) -> Result<(), CliError> {
    match apps.command {
        AppsSubcommand::List { page, size } => {
            ctx.require(Route::Applications)?;
            let page = applications::list(&ctx.dispatcher, PageRequest::new(page, size)).await?;
            print_json(&serde_json::to_value(page)?)
        }
        AppsSubcommand::Show { id } => {
            ctx.require(Route::EditApplication(id))?;
            let app = applications::get(&ctx.dispatcher, id).await?;
            print_json(&serde_json::to_value(app)?)
        }
        AppsSubcommand::Create {
            company,
            role,
            status,
            applied_date,
        } => {
            ctx.require(Route::NewApplication)?;
            let form = ApplicationForm {
                company_name: company,
                job_role: role,
                status,
                applied_date,
            };
            let app = applications::create(&ctx.dispatcher, &form).await?;
            print_json(&serde_json::to_value(app)?)
        }
        AppsSubcommand::Update {
            id,
            company,
            role,
            status,
            applied_date,
        } => {
            ctx.require(Route::EditApplication(id))?;
            let current = applications::get(&ctx.dispatcher, id).await?;
            let mut form = ApplicationForm::from(&current);
            if let Some(company) = company {
                form.company_name = company;
            }
            if let Some(role) = role {
                form.job_role = role;
            }
            if let Some(status) = status {
                form.status = status;
            }
            if let Some(applied_date) = applied_date {
                form.applied_date = applied_date;
            }
            let app = applications::update(&ctx.dispatcher, id, &form).await?;
            print_json(&serde_json::to_value(app)?)
        }
        AppsSubcommand::Delete { id, yes } => {
            ctx.require(Route::Applications)?;
            if !yes && !confirm("Are you sure?")? {
                return Err(CliError::Cancelled);
            }
            applications::delete(&ctx.dispatcher, id).await?;
            println!("deleted application {id}");
            Ok(())
        }
    }
}

async fn run_interviews(ctx: &CliContext, rounds: InterviewsCommand) -> Result<(), CliError> {
    match rounds.command {
        InterviewsSubcommand::List { application_id } => {
            ctx.require(Route::EditApplication(application_id))?;
            let rounds = interviews::list(&ctx.dispatcher, application_id).await?;
            print_json(&serde_json::to_value(rounds)?)
        }
        InterviewsSubcommand::Add { application_id, round } => {
            ctx.require(Route::EditApplication(application_id))?;
            let created = interviews::add(&ctx.dispatcher, application_id, &round.into()).await?;
            print_json(&serde_json::to_value(created)?)
        }
        InterviewsSubcommand::Update { id, round } => {
            ctx.require(Route::Applications)?;
            let updated = interviews::update(&ctx.dispatcher, id, &round.into()).await?;
            print_json(&serde_json::to_value(updated)?)
        }
        InterviewsSubcommand::Delete { id, yes } => {
            ctx.require(Route::Applications)?;
            if !yes && !confirm("Are you sure?")? {
                return Err(CliError::Cancelled);
            }
            interviews::delete(&ctx.dispatcher, id).await?;
            println!("deleted interview round {id}");
            Ok(())
        }
    }
}

fn value_or_prompt(value: Option<String>, label: &str) -> Result<String, CliError> {
    match value {
        Some(value) => Ok(value),
        None => prompt(&format!("{label}: ")),
    }
}

fn prompt(message: &str) -> Result<String, CliError> {
    eprint!("{message}");
    io::stderr().flush().map_err(CliError::Input)?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).map_err(CliError::Input)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_owned())
}

fn confirm(question: &str) -> Result<bool, CliError> {
    let answer = prompt(&format!("{question} [y/N] "))?;
    Ok(is_affirmative(&answer))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_text_prefers_server_message() {
        let err = CliError::from(ApiError::Status {
            status: 404,
            message: Some("Application not found".to_owned()),
        });
        assert_eq!(err.user_message(), "Application not found");
    }

    #[test]
    fn error_text_falls_back_to_display() {
        let err = CliError::from(ApiError::Status {
            status: 500,
            message: None,
        });
        assert_eq!(err.user_message(), "request failed with HTTP 500");
        assert_eq!(CliError::NotLoggedIn.user_message(), "not logged in; run `jobtrack login` first");
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative(" YES "));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("nope"));
    }

    #[test]
    fn cli_parses_scheme_and_apps_update() {
        let cli = Cli::try_parse_from([
            "jobtrack",
            "--auth-scheme",
            "basic",
            "apps",
            "update",
            "4",
            "--status",
            "offered",
        ])
        .expect("parse");
        assert_eq!(cli.auth_scheme, AuthScheme::Basic);
        match cli.command {
            Command::Apps(AppsCommand {
                command: AppsSubcommand::Update { id, status, company, .. },
            }) => {
                assert_eq!(id, 4);
                assert_eq!(status, Some(ApplicationStatus::Offered));
                assert_eq!(company, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_rejects_unknown_scheme() {
        let parsed = Cli::try_parse_from(["jobtrack", "--auth-scheme", "digest", "logout"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn round_args_convert_to_form() {
        let cli = Cli::try_parse_from([
            "jobtrack",
            "interviews",
            "add",
            "3",
            "--type",
            "technical",
            "--date",
            "2024-04-02",
        ])
        .expect("parse");
        let Command::Interviews(InterviewsCommand {
            command: InterviewsSubcommand::Add { application_id, round },
        }) = cli.command
        else {
            panic!("expected interviews add");
        };
        let form = InterviewForm::from(round);
        assert_eq!(application_id, 3);
        assert_eq!(form.round_type, RoundType::Technical);
        assert_eq!(form.result, RoundResult::Pending);
        assert_eq!(form.notes, None);
    }
}
