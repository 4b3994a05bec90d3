//! Credential resolution and signature parameter assembly for a MyInvois e-invoicing gateway.
//!
//! Startup builds one immutable [`config::GatewayConfig`]; requests then pick tenant credentials
//! with [`credentials::resolve_credentials`] and, when a document must be signed, build
//! [`signing::SignatureParams`] with [`signing::assemble`].
//!
//! # Examples
//! ```rust
//! use std::collections::HashMap;
//! use invois_core::config::{ConfigResolver, GatewayConfig};
//!
//! let env: HashMap<String, String> = HashMap::new();
//! let config = GatewayConfig::from_env(&env, &ConfigResolver::new("/nonexistent"))?;
//! let err = invois_core::signing::assemble(config.signing()).unwrap_err();
//! assert!(err.is_unavailable());
//! # Ok::<(), invois_core::config::ConfigError>(())
//! ```
pub mod config;
pub mod credentials;
pub mod error;
pub mod signing;

pub use error::{Error, ErrorResponse};
