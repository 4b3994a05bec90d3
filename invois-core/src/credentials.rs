//! Per-request tenant credential selection.
use std::fmt;

use http::HeaderMap;
use tracing::debug;

use crate::error::Error;

pub const CLIENT_ID_HEADER: &str = "x-client-id";
pub const CLIENT_SECRET_HEADER: &str = "x-client-secret";

/// Client id and secret used against the MyInvois API for one request.
#[derive(Clone, PartialEq, Eq)]
pub struct TenantCredentials {
    client_id: String,
    client_secret: String,
}

impl TenantCredentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for TenantCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TenantCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Picks the credentials for a request.
///
/// Both tenant headers present selects them, neither selects `fallback`. A single header is
/// rejected; a header value is never paired with the other half of the fallback.
///
/// # Examples
/// ```rust
/// use http::HeaderMap;
/// use invois_core::credentials::{TenantCredentials, resolve_credentials};
///
/// let fallback = TenantCredentials::new("gateway-id", "gateway-secret");
/// let mut headers = HeaderMap::new();
/// headers.insert("x-client-id", "tenant-id".parse().unwrap());
/// headers.insert("x-client-secret", "tenant-secret".parse().unwrap());
///
/// let creds = resolve_credentials(&headers, &fallback)?;
/// assert_eq!(creds.client_id(), "tenant-id");
/// # Ok::<(), invois_core::Error>(())
/// ```
pub fn resolve_credentials(
    headers: &HeaderMap,
    fallback: &TenantCredentials,
) -> Result<TenantCredentials, Error> {
    let client_id = header_value(headers, CLIENT_ID_HEADER)?;
    let client_secret = header_value(headers, CLIENT_SECRET_HEADER)?;

    match (client_id, client_secret) {
        (Some(client_id), Some(client_secret)) => {
            debug!(source = "headers", "using tenant credentials");
            Ok(TenantCredentials::new(client_id, client_secret))
        }
        (None, None) => {
            debug!(source = "fallback", "using gateway credentials");
            Ok(fallback.clone())
        }
        _ => Err(Error::configuration(
            "Both X-CLIENT-ID and X-CLIENT-SECRET must be provided together",
        )),
    }
}

// Empty counts as absent.
fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Result<Option<&'a str>, Error> {
    let Some(value) = headers.get(name) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| {
        Error::configuration(format!(
            "{} header must contain only visible ASCII characters",
            name.to_ascii_uppercase()
        ))
    })?;
    Ok((!value.is_empty()).then_some(value))
}
