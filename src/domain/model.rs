use crate::utils::error::LookupError;
use serde::{Deserialize, Serialize};

/// Provider-agnostic address record. Built once by a provider on a successful decode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NormalizedAddress {
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub street: Option<String>,
    pub source_service: Option<String>,
}

/// The single event a race resolves to.
#[derive(Debug)]
pub enum RaceOutcome {
    Found(NormalizedAddress),
    Failed(LookupError),
    TimedOut,
}

impl RaceOutcome {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RaceOutcome::TimedOut)
    }

    pub fn address(&self) -> Option<&NormalizedAddress> {
        match self {
            RaceOutcome::Found(address) => Some(address),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LookupError> {
        match self {
            RaceOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}
