pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{BrasilApiProvider, ViaCepProvider};
pub use config::LookupConfig;
pub use crate::core::{race::RaceCoordinator, report::render_outcome};
pub use domain::model::{NormalizedAddress, RaceOutcome};
pub use domain::ports::{CepProvider, ConfigProvider};
pub use utils::error::{LookupError, Result};
