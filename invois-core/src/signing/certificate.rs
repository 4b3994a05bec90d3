use std::fmt::Write;

use base64ct::{Base64, Encoding};
use serde::Serialize;
use sha2::{Digest, Sha256};
use x509_cert::{Certificate, der::Decode};

use crate::error::Error;

/// Certificate fields the XAdES signing certificate block needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateFacts {
    issuer_name: String,
    serial_number: String,
    digest_base64: String,
}

impl CertificateFacts {
    /// Issuer distinguished name in RFC 4514 form.
    pub fn issuer_name(&self) -> &str {
        &self.issuer_name
    }

    /// Upper-case hex serial number.
    pub fn serial_number(&self) -> &str {
        &self.serial_number
    }

    /// Base64 SHA-256 over the certificate's DER bytes.
    pub fn digest_base64(&self) -> &str {
        &self.digest_base64
    }
}

/// Decode a base64 DER certificate (no PEM armour) and extract its signing facts.
///
/// Line breaks and other ASCII whitespace in the input are ignored.
pub fn process_certificate(certificate_base64: &str) -> Result<CertificateFacts, Error> {
    let compact = compact_base64(certificate_base64);
    let der = Base64::decode_vec(&compact).map_err(|e| Error::CertificateParse {
        message: format!("certificate is not valid base64: {e}"),
    })?;
    facts_from_der(&der)
}

/// Extract signing facts from raw DER certificate bytes.
pub fn facts_from_der(der: &[u8]) -> Result<CertificateFacts, Error> {
    let cert = Certificate::from_der(der).map_err(|e| Error::CertificateParse {
        message: format!("invalid X.509 DER: {e}"),
    })?;
    let tbs = &cert.tbs_certificate;

    // The digest covers the bytes exactly as supplied, never a re-encoding of `cert`.
    let digest = Sha256::digest(der);

    Ok(CertificateFacts {
        issuer_name: tbs.issuer.to_string(),
        serial_number: serial_hex(tbs.serial_number.as_bytes()),
        digest_base64: Base64::encode_string(&digest),
    })
}

pub(crate) fn compact_base64(input: &str) -> String {
    input.chars().filter(|c| !c.is_ascii_whitespace()).collect()
}

fn serial_hex(bytes: &[u8]) -> String {
    // Drop the DER sign padding; a zero serial keeps one byte.
    let start = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len().saturating_sub(1));

    let mut hex = String::with_capacity((bytes.len() - start) * 2);
    for byte in &bytes[start..] {
        let _ = write!(&mut hex, "{:02X}", byte);
    }
    hex
}
