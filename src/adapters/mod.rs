// Adapters layer: the HTTP lookup services a race is run against.

pub mod brasilapi;
pub mod http;
pub mod viacep;

use crate::domain::ports::{CepProvider, ConfigProvider};
use reqwest::Client;
use std::sync::Arc;

pub use brasilapi::BrasilApiProvider;
pub use viacep::ViaCepProvider;

/// Both public providers, pointed at the base URLs from `config`.
pub fn default_providers<C: ConfigProvider>(
    client: &Client,
    config: &C,
) -> Vec<Arc<dyn CepProvider>> {
    let viacep: Arc<dyn CepProvider> =
        Arc::new(ViaCepProvider::new(client.clone(), config.viacep_url()));
    let brasilapi: Arc<dyn CepProvider> =
        Arc::new(BrasilApiProvider::new(client.clone(), config.brasilapi_url()));
    vec![viacep, brasilapi]
}
