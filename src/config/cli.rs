use crate::adapters::{brasilapi, viacep};
use crate::config::LookupConfig;
use clap::Parser;

pub const USAGE: &str = "Use: cep-race <CEP>";

#[derive(Debug, Clone, Parser)]
#[command(name = "cep-race")]
#[command(about = "Resolve a Brazilian postal code (CEP) by racing ViaCEP and BrasilAPI")]
pub struct CliConfig {
    /// Postal code to look up, digits only. Not validated.
    pub cep: Option<String>,

    #[arg(long, default_value = "1000", help = "Race deadline in milliseconds")]
    pub timeout_ms: u64,

    #[arg(long, default_value = viacep::DEFAULT_BASE_URL)]
    pub viacep_url: String,

    #[arg(long, default_value = brasilapi::DEFAULT_BASE_URL)]
    pub brasilapi_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn lookup_config(&self) -> LookupConfig {
        LookupConfig {
            viacep_url: self.viacep_url.clone(),
            brasilapi_url: self.brasilapi_url.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}
