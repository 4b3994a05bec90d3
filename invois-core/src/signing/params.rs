use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::config::{MaterialKind, ResolvedSigningMaterial};
use crate::error::Error;
use crate::signing::certificate::{compact_base64, process_certificate};
use crate::signing::key::{SigningKeyHandle, import_private_key};

/// Everything the external UBL signer needs except the document itself.
#[derive(Clone)]
pub struct SignatureParams {
    private_key: SigningKeyHandle,
    signing_certificate_base64: String,
    certificate_digest_base64: String,
    certificate_issuer_name: String,
    certificate_serial_number: String,
    document_to_sign: Option<Value>,
}

impl SignatureParams {
    pub fn private_key(&self) -> &SigningKeyHandle {
        &self.private_key
    }

    /// The certificate's base64 DER, with any line breaks removed.
    pub fn signing_certificate_base64(&self) -> &str {
        &self.signing_certificate_base64
    }

    pub fn certificate_digest_base64(&self) -> &str {
        &self.certificate_digest_base64
    }

    pub fn certificate_issuer_name(&self) -> &str {
        &self.certificate_issuer_name
    }

    pub fn certificate_serial_number(&self) -> &str {
        &self.certificate_serial_number
    }

    /// `None` until the caller attaches a document with [`SignatureParams::with_document`].
    pub fn document_to_sign(&self) -> Option<&Value> {
        self.document_to_sign.as_ref()
    }

    pub fn with_document(mut self, document: Value) -> Self {
        self.document_to_sign = Some(document);
        self
    }
}

impl fmt::Debug for SignatureParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignatureParams")
            .field("private_key", &self.private_key)
            .field("certificate_digest_base64", &self.certificate_digest_base64)
            .field("certificate_issuer_name", &self.certificate_issuer_name)
            .field("certificate_serial_number", &self.certificate_serial_number)
            .field("has_document", &self.document_to_sign.is_some())
            .finish_non_exhaustive()
    }
}

/// Build signature parameters from the startup material.
///
/// Missing material is [`Error::SigningUnavailable`]. Malformed material surfaces the key or
/// certificate error unchanged.
pub fn assemble(material: &ResolvedSigningMaterial) -> Result<SignatureParams, Error> {
    let private_key_pem = material
        .private_key_pem()
        .ok_or(Error::SigningUnavailable {
            missing: MaterialKind::PrivateKey,
        })?;
    let certificate_base64 =
        material
            .signing_certificate_base64()
            .ok_or(Error::SigningUnavailable {
                missing: MaterialKind::Certificate,
            })?;

    let private_key = import_private_key(private_key_pem)?;
    let facts = process_certificate(certificate_base64)?;

    debug!(
        key_source = %material.private_key_source(),
        certificate_source = %material.certificate_source(),
        issuer = facts.issuer_name(),
        serial = facts.serial_number(),
        "assembled signature parameters"
    );

    Ok(SignatureParams {
        private_key,
        signing_certificate_base64: compact_base64(certificate_base64),
        certificate_digest_base64: facts.digest_base64().to_string(),
        certificate_issuer_name: facts.issuer_name().to_string(),
        certificate_serial_number: facts.serial_number().to_string(),
        document_to_sign: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_KEY_PEM: &str = include_str!("../../tests/fixtures/private_key.pem");
    const TEST_CERT_B64: &str = include_str!("../../tests/fixtures/certificate_base64.txt");

    #[test]
    fn missing_key_is_reported_before_certificate() {
        let err = assemble(&ResolvedSigningMaterial::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::SigningUnavailable {
                missing: MaterialKind::PrivateKey
            }
        ));
    }

    #[test]
    fn malformed_key_is_not_reported_as_unavailable() {
        let material = ResolvedSigningMaterial::inline(
            Some("not a pem".into()),
            Some(TEST_CERT_B64.into()),
        );
        let err = assemble(&material).unwrap_err();
        assert!(matches!(err, Error::KeyFormat { .. }));
        assert!(!err.is_unavailable());
    }

    #[test]
    fn certificate_text_is_compacted_and_document_starts_empty() {
        let material =
            ResolvedSigningMaterial::inline(Some(TEST_KEY_PEM.into()), Some(TEST_CERT_B64.into()));
        let params = assemble(&material).expect("assemble");
        assert_eq!(params.signing_certificate_base64(), TEST_CERT_B64.trim());
        assert!(params.document_to_sign().is_none());

        let params = params.with_document(serde_json::json!({ "Invoice": [] }));
        assert_eq!(
            params.document_to_sign(),
            Some(&serde_json::json!({ "Invoice": [] }))
        );
    }

    #[test]
    fn debug_omits_key_and_certificate() {
        let material =
            ResolvedSigningMaterial::inline(Some(TEST_KEY_PEM.into()), Some(TEST_CERT_B64.into()));
        let debug = format!("{:?}", assemble(&material).expect("assemble"));
        assert!(!debug.contains("BEGIN"));
        assert!(!debug.contains(TEST_CERT_B64.trim()));
        assert!(debug.contains("has_document: false"));
    }
}
