//! Failure vocabulary shared by credential resolution and signing.
//!
//! Resolution of signing material at startup never fails (see [`crate::config`]); everything
//! here is raised once a request actually tries to use credentials or sign. The HTTP layer maps
//! these to responses through [`Error::status`], [`Error::code`] and [`ErrorResponse`].
use serde::Serialize;
use thiserror::Error;

use crate::config::MaterialKind;

/// Errors raised while resolving tenant credentials or preparing a signature.
#[derive(Debug, Error)]
pub enum Error {
    /// The tenant credential headers were not supplied as a pair, or carried unusable values.
    #[error("{message}")]
    Configuration { message: String },

    /// Signing was attempted while key or certificate material is not configured.
    #[error("document signing is unavailable: {missing} is not configured")]
    SigningUnavailable { missing: MaterialKind },

    /// The PEM wrapper is missing or its body is not valid base64.
    #[error("invalid PEM private key format: {reason}")]
    KeyFormat { reason: String },

    /// The decoded PKCS#8 bytes were rejected as an RSA signing key.
    #[error("failed to import private key: {source}")]
    KeyImport {
        #[source]
        source: rsa::pkcs8::Error,
    },

    /// The certificate is not base64 encoded DER of a valid X.509 structure.
    #[error("failed to process certificate: {message}")]
    CertificateParse { message: String },
}

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status the boundary layer should answer with.
    pub fn status(&self) -> u16 {
        match self {
            Error::Configuration { .. } => 400,
            Error::SigningUnavailable { .. } => 503,
            Error::KeyFormat { .. } | Error::KeyImport { .. } | Error::CertificateParse { .. } => {
                500
            }
        }
    }

    /// Stable machine readable code for API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Configuration { .. } => "BAD_REQUEST",
            Error::SigningUnavailable { .. } => "SIGNING_UNAVAILABLE",
            Error::KeyFormat { .. } => "KEY_FORMAT_ERROR",
            Error::KeyImport { .. } => "KEY_IMPORT_ERROR",
            Error::CertificateParse { .. } => "CERTIFICATE_PARSE_ERROR",
        }
    }

    /// True when the error means "feature off" rather than "feature broken".
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::SigningUnavailable { .. })
    }
}

/// JSON error body returned by the gateway.
///
/// # Examples
/// ```rust
/// use invois_core::{Error, ErrorResponse};
/// use invois_core::config::MaterialKind;
///
/// let err = Error::SigningUnavailable { missing: MaterialKind::PrivateKey };
/// let body = ErrorResponse::from(&err);
/// assert_eq!(body.status, 503);
/// assert_eq!(body.code, "SIGNING_UNAVAILABLE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub status: u16,
    pub code: &'static str,
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        ErrorResponse {
            message: err.to_string(),
            status: err.status(),
            code: err.code(),
        }
    }
}
