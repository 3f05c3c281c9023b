// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use std::sync::Arc;

use clap::Parser;
use cli::{Cli, Commands};
use console::ConsoleNavigator;
use maktab_core::api::ApiClient;
use maktab_core::auth::{AuthService, claims};
use maktab_core::config::AppConfig;
use maktab_core::roster;
use maktab_core::routes::{self, Route};
use maktab_core::session::SessionStore;
use signin::{SignInFlow, SubmitResult};

mod cli;
mod console;
mod logging;
mod signin;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        log::error!("{}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init()?;

    let args = Cli::parse();
    let config = AppConfig::from_env();
    let store = SessionStore::open(&config.data_dir);
    let navigator = ConsoleNavigator::starting_at(starting_route(&store, &args.command));
    let api = ApiClient::new(&config, store.clone(), navigator.clone())?;
    let service = AuthService::new(api, store, navigator.clone());

    match args.command {
        Commands::Login { phone, password } => login(service, navigator, &phone, &password).await,
        Commands::Logout => {
            service.logout()?;
            println!("Signed out.");
            Ok(())
        }
        Commands::Status => {
            println!(
                "{}",
                console::render_status(&service.session(), service.claims().as_ref())
            );
            Ok(())
        }
        Commands::Dashboard => dashboard(&service),
        Commands::Teachers { search, page } => teachers(&service, &search, page),
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Where the console "is" when a command starts. Signing in always happens on
/// the sign-in screen; everything else runs from wherever the stored session
/// last landed the user.
fn starting_route(store: &SessionStore, command: &Commands) -> Route {
    if matches!(command, Commands::Login { .. }) {
        return Route::SignIn;
    }
    match store.token() {
        Some(token) if !claims::is_expired(&token) => {
            routes::destination_for(store.role().as_deref())
        }
        _ => Route::SignIn,
    }
}

async fn login(
    service: AuthService,
    navigator: Arc<ConsoleNavigator>,
    phone: &str,
    password: &str,
) -> Result<()> {
    let mut flow = SignInFlow::new(service, navigator);
    let result = flow.submit(phone, password).await;
    log::debug!("sign-in flow settled in {:?}", flow.state());
    match result {
        SubmitResult::Success(success) => {
            println!("Welcome! Signed in as {}.", success.role);
            println!("Destination: {}", success.destination.path());
            Ok(())
        }
        SubmitResult::Invalid(message) | SubmitResult::Failed(message) => {
            Err(Error::Custom(message))
        }
        SubmitResult::Blocked => Err(Error::Custom(
            "a sign-in attempt is already in progress".to_string(),
        )),
    }
}

fn dashboard(service: &AuthService) -> Result<()> {
    require_session(service)?;
    println!("{}", console::render_dashboard(&service.session()));
    Ok(())
}

fn teachers(service: &AuthService, search: &str, page: usize) -> Result<()> {
    require_session(service)?;
    let roster = roster::seed_teachers();
    println!(
        "{}",
        console::render_teachers(&roster::page(&roster, search, page))
    );
    Ok(())
}

fn require_session(service: &AuthService) -> Result<()> {
    if !service.is_authenticated() {
        return Err(Error::Custom(
            "not signed in; run `maktab_cli login` first".to_string(),
        ));
    }
    Ok(())
}
