use std::io;
use std::process::ExitCode;

use holiday_tracker::config::{Config, LogFormat};
use holiday_tracker::console::Console;
use holiday_tracker::{fetch_all, Error, NagerClient, TRACKED_COUNTRY, TRACKED_YEARS};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(io::stderr),
            )
            .init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let config = Config::from_env();
    init_tracing(config.log_format);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());
    console.announce_loading()?;

    let client = NagerClient::new(&config, TRACKED_COUNTRY);
    let report = fetch_all(&client, &TRACKED_YEARS).await;
    console.report_load(&report)?;

    let store = match report.into_loaded_store() {
        Ok(store) => store,
        Err(err @ Error::NoRecords) => {
            tracing::error!(error = %err, "startup aborted");
            console.report_no_records()?;
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    console.run(&store)?;
    Ok(ExitCode::SUCCESS)
}
