use crate::adapters::http::{build_url, fetch_json};
use crate::domain::model::NormalizedAddress;
use crate::domain::ports::CepProvider;
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub const SERVICE: &str = "viacep.com.br";
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br";
pub const PATH_TEMPLATE: &str = "/ws/{cep}/json/";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViaCepResponse {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub complemento: Option<String>,
    pub unidade: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
    pub estado: Option<String>,
    pub regiao: Option<String>,
    pub ibge: Option<String>,
    pub gia: Option<String>,
    pub ddd: Option<String>,
    pub siafi: Option<String>,
    /// Set on a 200 answer for a well-formed CEP ViaCEP does not know.
    /// Seen both as `true` and as `"true"`.
    pub erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    pub fn is_unknown_cep(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    pub fn into_address(self) -> NormalizedAddress {
        NormalizedAddress {
            postal_code: self.cep,
            // `uf` is the two-letter code BrasilAPI also reports; `estado` is the full name.
            state: self.uf.or(self.estado),
            city: self.localidade,
            neighborhood: self.bairro,
            street: self.logradouro,
            source_service: Some(SERVICE.to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ViaCepProvider {
    client: Client,
    base_url: String,
}

impl ViaCepProvider {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl CepProvider for ViaCepProvider {
    fn service(&self) -> &str {
        SERVICE
    }

    async fn lookup(&self, cep: &str) -> Result<NormalizedAddress> {
        let url = build_url(&self.base_url, PATH_TEMPLATE, cep)?;
        let raw: ViaCepResponse = fetch_json(&self.client, SERVICE, url).await?;
        if raw.is_unknown_cep() {
            return Err(LookupError::NotFound {
                service: SERVICE.to_string(),
                cep: cep.to_string(),
            });
        }
        Ok(raw.into_address())
    }
}
