use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use metaview::api::cli::{Args, Command};
use metaview::domain::get::dto::get_request::GetRequest;
use metaview::domain::get::service::get_service::execute_get;
use metaview::errors::{AppError, DEFAULT_ERROR_EXIT_CODE};

/// Filter directives for diagnostics, e.g. `METAVIEW_LOG=metaview=debug`.
const LOG_ENV: &str = "METAVIEW_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _guard = init_tracing();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = match err.downcast_ref::<AppError>() {
                Some(app_err) => {
                    eprintln!("{}", app_err);
                    app_err.exit_code()
                }
                None => {
                    eprintln!("{:#}", err);
                    DEFAULT_ERROR_EXIT_CODE
                }
            };
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

/// Diagnostics go to stderr so stdout only carries rendered output.
fn init_tracing() -> WorkerGuard {
    let (writer, guard) = tracing_appender::non_blocking(io::stderr());
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true)
        .init();

    guard
}

fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Get(get) => {
            let request = GetRequest::from(get);
            debug!("Reading metadata snapshot {}", request.input.display());

            let stdout = io::stdout();
            let mut out = stdout.lock();
            execute_get(request, &mut out, Utc::now())?;
            out.flush().context("failed to flush standard output")?;
        }
    }
    Ok(())
}
