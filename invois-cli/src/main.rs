use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64ct::{Base64, Encoding};
use clap::{Parser, Subcommand};
use invois_core::ErrorResponse;
use invois_core::config::{ConfigResolver, GatewayConfig, ProcessEnv};
use invois_core::signing::{self, profile};
use serde_json::json;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "invois")]
#[command(about = "Check and exercise MyInvois gateway signing configuration")]
struct Cli {
    /// Directory the default `certs/` paths are resolved against.
    #[arg(long, env = "INVOIS_BASE_DIR", default_value = ".")]
    base_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve configuration from the environment and try to assemble signature parameters.
    Check,
    /// Print issuer, serial and digest of a base64 DER certificate file.
    Certificate {
        #[arg(long)]
        file: PathBuf,
    },
    /// Sign a file with the configured key and print the base64 signature.
    Sign {
        #[arg(long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => check(&cli.base_dir),
        Commands::Certificate { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("reading certificate file {}", file.display()))?;
            let facts = signing::process_certificate(&content)?;
            println!("{}", serde_json::to_string_pretty(&facts)?);
            Ok(())
        }
        Commands::Sign { input } => {
            let config = load_config(&cli.base_dir)?;
            let params = signing::assemble(config.signing())?;
            let data = std::fs::read(&input)
                .with_context(|| format!("reading input file {}", input.display()))?;
            info!(
                bytes = data.len(),
                algorithm = params.private_key().algorithm(),
                "signing input"
            );
            println!("{}", Base64::encode_string(&params.private_key().sign(&data)));
            Ok(())
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(base_dir: &Path) -> Result<GatewayConfig> {
    GatewayConfig::from_env(&ProcessEnv, &ConfigResolver::new(base_dir))
        .context("loading gateway configuration")
}

fn check(base_dir: &Path) -> Result<()> {
    let config = load_config(base_dir)?;
    let material = config.signing();

    let mut report = json!({
        "environment": config.env().as_str(),
        "api_base_url": config.env().api_base_url(),
        "port": config.port(),
        "client_id": config.fallback_credentials().client_id(),
        "private_key_source": material.private_key_source().as_str(),
        "certificate_source": material.certificate_source().as_str(),
    });

    match signing::assemble(material) {
        Ok(params) => {
            report["signing"] = json!("available");
            report["certificate"] = json!({
                "issuer_name": params.certificate_issuer_name(),
                "serial_number": params.certificate_serial_number(),
                "digest_base64": params.certificate_digest_base64(),
            });
            report["profile"] = json!({
                "ubl_extension_uri": profile::UBL_EXTENSION_URI,
                "signature_information_id": profile::SIGNATURE_INFORMATION_ID,
                "referenced_signature_id": profile::REFERENCED_SIGNATURE_ID,
                "signature_id": profile::SIGNATURE_ID,
                "signed_properties_id": profile::SIGNED_PROPERTIES_ID,
                "signed_properties_type": profile::SIGNED_PROPERTIES_TYPE,
                "signature_method": profile::SIGNATURE_METHOD,
                "digest_method": profile::DIGEST_METHOD,
                "key_algorithm": params.private_key().algorithm(),
                "namespaces": { "ds": profile::DS_NS, "xades": profile::XADES_NS },
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(err) if err.is_unavailable() => {
            report["signing"] = json!("unavailable");
            report["reason"] = json!(err.to_string());
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(err) => {
            report["signing"] = json!("error");
            report["error"] = serde_json::to_value(ErrorResponse::from(&err))?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Err(err).context("signing configuration is invalid")
        }
    }
}
