use crate::adapters::http::{build_url, fetch_json};
use crate::domain::model::NormalizedAddress;
use crate::domain::ports::CepProvider;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const SERVICE: &str = "brasilapi.com.br";
pub const DEFAULT_BASE_URL: &str = "https://brasilapi.com.br";
pub const PATH_TEMPLATE: &str = "/api/cep/v1/{cep}";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrasilApiResponse {
    pub cep: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub street: Option<String>,
    /// Upstream source BrasilAPI consulted. Not the provider tag.
    pub service: Option<String>,
}

impl BrasilApiResponse {
    pub fn into_address(self) -> NormalizedAddress {
        NormalizedAddress {
            postal_code: self.cep,
            state: self.state,
            city: self.city,
            neighborhood: self.neighborhood,
            street: self.street,
            source_service: Some(SERVICE.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BrasilApiProvider {
    client: Client,
    base_url: String,
}

impl BrasilApiProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CepProvider for BrasilApiProvider {
    fn service(&self) -> &str {
        SERVICE
    }

    async fn lookup(&self, cep: &str) -> Result<NormalizedAddress> {
        let url = build_url(&self.base_url, PATH_TEMPLATE, cep)?;
        let raw: BrasilApiResponse = fetch_json(&self.client, SERVICE, url).await?;
        Ok(raw.into_address())
    }
}
