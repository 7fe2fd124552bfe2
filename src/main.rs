use anyhow::Context;
use cep_race::config::cli::USAGE;
use cep_race::utils::{logger, validation::Validate};
use cep_race::{render_outcome, CliConfig, RaceCoordinator, RaceOutcome};
use clap::Parser;
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    let Some(cep) = config.cep.as_deref() else {
        println!("{}", USAGE);
        std::process::exit(1);
    };

    tracing::debug!("CLI config: {:?}", config);

    let lookup = config.lookup_config();
    if let Err(e) = lookup.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let client = reqwest::Client::builder()
        .build()
        .context("failed to build HTTP client")?;

    let race = RaceCoordinator::from_config(&client, &lookup);
    let outcome = race.run(cep).await;

    if let RaceOutcome::Failed(e) = &outcome {
        tracing::debug!("Lookup failed (Category: {:?}): {}", e.category(), e);
    }

    // Exit status stays 0 on provider failure and timeout.
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render_outcome(&outcome).as_bytes())?;
    stdout.flush()?;

    Ok(())
}
