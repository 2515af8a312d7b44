use calculus_assistant::app::run_loop;
use calculus_assistant::error::AssistantError;
use calculus_assistant::logger::initialize as LoggerInitialize;

use client_core::APP_NAME;
use client_core::config::env::load_dotenv;
use client_core::config::{AppConfig, default_config_dir};
use client_core::session::SolverSession;
use client_core::solver_client::SolverClient;
use client_core::typeset::{TypesetService, UnicodeTypesetter};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::io::stdout;
use std::panic::Location;
use std::process::ExitCode;

use log::{error, info};
use tokio::io::{BufReader, stdin};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AssistantError> {
    let log_dir = dirs::data_local_dir()
        .map(|dir| dir.join(APP_NAME))
        .ok_or_else(|| AssistantError::Assistant {
            message: String::from("Failed to get log directory"),
            location: ErrorLocation::from(Location::caller()),
        })?;

    create_dir_all(&log_dir).map_err(|e| AssistantError::Assistant {
        message: format!("Failed to create log directory: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    // Initialize logger FIRST
    LoggerInitialize(&log_dir)?;

    info!("Calculus Assistant starting");
    info!("Log directory: {}", log_dir.display());

    let env = load_dotenv();
    if !env.loaded {
        info!("No .env file loaded");
    }

    let mut config = AppConfig::load(&default_config_dir()?)?;
    config.apply_env_overrides()?;

    let client = SolverClient::from_config(&config.server)?;
    info!("Solve endpoint: {}", client.solve_url());

    let mut typesetter = TypesetService::new(UnicodeTypesetter::new(), config.typeset_config()?);
    typesetter.mount()?;

    let session = SolverSession::new(client);

    let reader = BufReader::new(stdin());
    let mut writer = stdout();
    let result = run_loop(reader, &mut writer, &session, &typesetter, &config.render).await;

    typesetter.teardown();
    info!("Calculus Assistant stopped");

    result
}
