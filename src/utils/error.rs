use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("request to {service} failed with status: {status}")]
    RequestStatus {
        service: String,
        status: reqwest::StatusCode,
    },

    #[error("request to {service} failed: {source}")]
    Transport {
        service: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} has no address for CEP {cep}")]
    NotFound { service: String, cep: String },

    #[error("failed to decode response from {service}: {source}")]
    Decode {
        service: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("all providers finished without reporting an outcome")]
    ProvidersExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Request,
    Decode,
    Configuration,
    Coordination,
}

impl LookupError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LookupError::RequestStatus { .. }
            | LookupError::Transport { .. }
            | LookupError::NotFound { .. } => ErrorCategory::Request,
            LookupError::Decode { .. } => ErrorCategory::Decode,
            LookupError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            LookupError::ProvidersExhausted => ErrorCategory::Coordination,
        }
    }

    /// The provider that produced this error, if any.
    pub fn service(&self) -> Option<&str> {
        match self {
            LookupError::RequestStatus { service, .. }
            | LookupError::Transport { service, .. }
            | LookupError::NotFound { service, .. }
            | LookupError::Decode { service, .. } => Some(service.as_str()),
            _ => None,
        }
    }

    /// Display text followed by every underlying cause not already part of it.
    /// reqwest keeps the connect/DNS failure out of its own message.
    pub fn detailed_message(&self) -> String {
        let mut message = self.to_string();
        let mut cause = std::error::Error::source(self);
        while let Some(err) = cause {
            let text = err.to_string();
            if !message.contains(&text) {
                message.push_str(": ");
                message.push_str(&text);
            }
            cause = std::error::Error::source(err);
        }
        message
    }

    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            LookupError::RequestStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_is_request_category() {
        let err = LookupError::RequestStatus {
            service: "viacep.com.br".to_string(),
            status: reqwest::StatusCode::BAD_REQUEST,
        };

        assert_eq!(err.category(), ErrorCategory::Request);
        assert_eq!(err.service(), Some("viacep.com.br"));
        assert_eq!(err.status(), Some(reqwest::StatusCode::BAD_REQUEST));
        assert_eq!(
            err.to_string(),
            "request to viacep.com.br failed with status: 400 Bad Request"
        );
    }

    #[test]
    fn test_decode_error_category() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LookupError::Decode {
            service: "brasilapi.com.br".to_string(),
            source,
        };

        assert_eq!(err.category(), ErrorCategory::Decode);
        assert!(err.status().is_none());
        assert!(err
            .to_string()
            .starts_with("failed to decode response from brasilapi.com.br"));
    }

    #[test]
    fn test_detailed_message_does_not_repeat_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let source_text = source.to_string();
        let err = LookupError::Decode {
            service: "viacep.com.br".to_string(),
            source,
        };

        let message = err.detailed_message();
        assert_eq!(message, err.to_string());
        assert_eq!(message.matches(&source_text).count(), 1);
    }

    #[tokio::test]
    async fn test_detailed_message_includes_connect_cause() {
        // Port 1 is never bound in the test environment.
        let source = reqwest::Client::new()
            .get("http://127.0.0.1:1/ws/01001000/json/")
            .send()
            .await
            .unwrap_err();
        let err = LookupError::Transport {
            service: "viacep.com.br".to_string(),
            source,
        };

        let message = err.detailed_message();
        assert!(message.starts_with("request to viacep.com.br failed: "));
        assert!(message.to_lowercase().contains("connection refused"));
    }

    #[test]
    fn test_not_found_is_request_category() {
        let err = LookupError::NotFound {
            service: "viacep.com.br".to_string(),
            cep: "99999999".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Request);
        assert_eq!(err.service(), Some("viacep.com.br"));
        assert_eq!(err.to_string(), "viacep.com.br has no address for CEP 99999999");
    }

    #[test]
    fn test_exhausted_has_no_service() {
        let err = LookupError::ProvidersExhausted;
        assert_eq!(err.category(), ErrorCategory::Coordination);
        assert!(err.service().is_none());
    }
}
