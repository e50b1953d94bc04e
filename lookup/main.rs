#![forbid(unsafe_code)]

//! `aqs-lookup` — companion CLI for `aqs-seed`.
//!
//! Resolves a collection method's server id by custom id, for wiring
//! external tooling to a tenant by hand.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use aqs_seed::config::TlsOptions;
use aqs_seed::{AppConfig, AppError, Result, SamplesClient};

#[derive(Debug, Parser)]
#[command(
    name = "aqs-lookup",
    about = "Resolve a collection method id on an AQUARIUS Samples tenant",
    version,
    long_about = None
)]
struct Cli {
    /// Bearer token for the target tenant.
    #[arg(long)]
    token: String,

    /// Tenant hostname, expanded to `https://<host>/api/`.
    #[arg(long)]
    host: String,

    /// CA bundle path, or `system` for the OS trust store. TLS
    /// verification is disabled when omitted.
    #[arg(long)]
    certs: Option<String>,

    /// Custom id of the collection method to resolve.
    #[arg(long, default_value = "Water Quality")]
    custom_id: String,
}

fn main() -> Result<()> {
    // usage errors on stdout with exit status 2, like aqs-seed
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            print!("{err}");
            std::process::exit(err.exit_code());
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    let tls = TlsOptions::from_flags(args.certs.as_deref(), None, None)?;
    let config = AppConfig::for_host(&args.token, &args.host, tls)?;
    let client = SamplesClient::new(&config)?;

    match client.collection_method_id(&args.custom_id).await? {
        Some(id) => {
            println!("{id}");
            Ok(())
        }
        None => Err(AppError::NotFound(format!(
            "collection method {} does not exist",
            args.custom_id
        ))),
    }
}
