use crate::domain::model::NormalizedAddress;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait CepProvider: Send + Sync {
    /// Identifier stamped into `NormalizedAddress::source_service`.
    fn service(&self) -> &str;

    async fn lookup(&self, cep: &str) -> Result<NormalizedAddress>;
}

pub trait ConfigProvider: Send + Sync {
    fn viacep_url(&self) -> &str;
    fn brasilapi_url(&self) -> &str;
    fn deadline(&self) -> Duration;
}
