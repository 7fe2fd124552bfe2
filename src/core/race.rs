//! First-responder race across every configured provider.
//!
//! Each provider runs in its own task and reports through a shared channel.
//! The coordinator resolves exactly once: on the first success, on a failure
//! once no provider is left that could still succeed, or on the deadline.
//! Losing tasks are not cancelled; their late reports go nowhere.

use crate::adapters::default_providers;
use crate::domain::model::{NormalizedAddress, RaceOutcome};
use crate::domain::ports::{CepProvider, ConfigProvider};
use crate::utils::error::{LookupError, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(1);

// Stand-in deadline when `started + deadline` overflows.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

type Report = (String, Result<NormalizedAddress>);

pub struct RaceCoordinator {
    providers: Vec<Arc<dyn CepProvider>>,
    deadline: Duration,
}

impl RaceCoordinator {
    pub fn new(providers: Vec<Arc<dyn CepProvider>>, deadline: Duration) -> Self {
        Self {
            providers,
            deadline,
        }
    }

    pub fn with_default_deadline(providers: Vec<Arc<dyn CepProvider>>) -> Self {
        Self::new(providers, DEFAULT_DEADLINE)
    }

    /// Races the two public providers at the URLs and deadline from `config`.
    pub fn from_config<C: ConfigProvider>(client: &Client, config: &C) -> Self {
        Self::new(default_providers(client, config), config.deadline())
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    pub async fn run(&self, cep: &str) -> RaceOutcome {
        let started = Instant::now();
        let deadline = deadline_instant(started, self.deadline);

        // Capacity covers one report per provider, so no sender ever waits.
        let (tx, mut rx) = mpsc::channel::<Report>(self.providers.len().max(1));

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let tx = tx.clone();
            let cep = cep.to_string();
            tokio::spawn(async move {
                let result = provider.lookup(&cep).await;
                // Fails only when the race already resolved.
                let _ = tx.send((provider.service().to_string(), result)).await;
            });
        }
        drop(tx);

        tracing::debug!(
            "Racing {} providers for CEP {} with a {:?} deadline",
            self.providers.len(),
            cep,
            self.deadline
        );

        let sleep = tokio::time::sleep_until(deadline);
        tokio::pin!(sleep);
        let mut first_failure: Option<LookupError> = None;

        loop {
            tokio::select! {
                report = rx.recv() => match report {
                    Some((service, Ok(address))) => {
                        tracing::debug!("{} answered first after {:?}", service, started.elapsed());
                        return RaceOutcome::Found(address);
                    }
                    Some((service, Err(err))) => {
                        tracing::debug!("{} failed after {:?}: {}", service, started.elapsed(), err);
                        if first_failure.is_none() {
                            first_failure = Some(err);
                        }
                    }
                    None => {
                        let err = first_failure.unwrap_or(LookupError::ProvidersExhausted);
                        tracing::debug!("No provider succeeded: {}", err);
                        return RaceOutcome::Failed(err);
                    }
                },
                _ = &mut sleep => {
                    return match first_failure {
                        Some(err) => {
                            tracing::debug!("Deadline reached with only failures reported");
                            RaceOutcome::Failed(err)
                        }
                        None => {
                            tracing::warn!("No provider answered CEP {} within {:?}", cep, self.deadline);
                            RaceOutcome::TimedOut
                        }
                    };
                }
            }
        }
    }
}

fn deadline_instant(started: Instant, deadline: Duration) -> Instant {
    started
        .checked_add(deadline)
        .unwrap_or_else(|| started + FAR_FUTURE)
}
