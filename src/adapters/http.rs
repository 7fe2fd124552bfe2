//! Request logic shared by every provider: build the URL, GET it, check the
//! status and decode the body.

use crate::utils::error::{LookupError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

/// Path segment in a provider template that receives the postal code.
pub const CEP_PLACEHOLDER: &str = "{cep}";

/// Appends `template` to `base_url`, substituting the postal code into the
/// `{cep}` segment. Each segment is percent-encoded, so the postal code can
/// never add path segments of its own.
pub fn build_url(base_url: &str, template: &str, cep: &str) -> Result<Url> {
    let invalid = |reason: String| LookupError::InvalidConfigValue {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason,
    };

    let mut url =
        Url::parse(base_url).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;

    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| invalid("URL cannot be used as a base".to_string()))?;
        segments.pop_if_empty();
        for part in template.trim_start_matches('/').split('/') {
            if part == CEP_PLACEHOLDER {
                segments.push(cep);
            } else {
                segments.push(part);
            }
        }
    }

    Ok(url)
}

/// Issues one GET and decodes the JSON body into `T`.
///
/// A non-2xx status fails with `RequestStatus` before the body is read.
/// Connection and body read failures are `Transport`; a body that is not
/// valid JSON for `T` is `Decode`.
pub async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    service: &str,
    url: Url,
) -> Result<T> {
    tracing::debug!("Making request to {}: {}", service, url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| LookupError::Transport {
            service: service.to_string(),
            source,
        })?;

    let status = response.status();
    tracing::debug!("{} response status: {}", service, status);

    if !status.is_success() {
        return Err(LookupError::RequestStatus {
            service: service.to_string(),
            status,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| LookupError::Transport {
            service: service.to_string(),
            source,
        })?;

    serde_json::from_slice(&body).map_err(|source| LookupError::Decode {
        service: service.to_string(),
        source,
    })
}
