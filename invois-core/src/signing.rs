//! Signing key import, certificate processing and signature parameter assembly.
//!
//! All functions here are synchronous and CPU bound. Async hosts should call them from a
//! blocking task (e.g. `tokio::task::spawn_blocking`).
pub mod certificate;
pub mod key;
pub mod params;
pub mod profile;

pub use certificate::{CertificateFacts, facts_from_der, process_certificate};
pub use key::{SigningKeyHandle, import_private_key};
pub use params::{SignatureParams, assemble};
