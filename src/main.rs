#![forbid(unsafe_code)]

//! `aqs-seed` — populate one or two AQUARIUS Samples tenants with the
//! connector demonstration data set.
//!
//! With only `--host`, the second-sync plan is seeded onto that tenant.
//! With `--host2` as well, the first-sync plan goes to `--host` and the
//! second-sync plan to `--host2`.

use std::path::PathBuf;
use std::sync::Mutex;

use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use aqs_seed::config::TlsOptions;
use aqs_seed::seed::{plans, LocationPlan, TenantSeeder};
use aqs_seed::{AppConfig, AppError, Result, SamplesClient};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "aqs-seed",
    about = "Populate an AQUARIUS Samples tenant with connector demo data",
    version,
    long_about = None
)]
struct Cli {
    /// Bearer token for the target tenant(s).
    #[arg(long)]
    token: String,

    /// Primary tenant hostname, expanded to `https://<host>/api/`.
    #[arg(long)]
    host: String,

    /// Secondary tenant hostname for paired-sync seeding.
    #[arg(long)]
    host2: Option<String>,

    /// CA bundle path, or `system` for the OS trust store. TLS
    /// verification is disabled when omitted.
    #[arg(long)]
    certs: Option<String>,

    /// PEM client certificate for mutual TLS.
    #[arg(long)]
    client_cert: Option<PathBuf>,

    /// PEM private key for `--client-cert`.
    #[arg(long)]
    client_key: Option<PathBuf>,

    /// Append logs to this file in addition to the console.
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let args = parse_cli();
    init_tracing(args.log_format, args.log.as_deref())?;
    info!("aqs-seed bootstrap");

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

/// Parse the command line, reporting usage errors on stdout with exit
/// status 2, the way the original scripts did.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            print!("{err}");
            std::process::exit(err.exit_code());
        }
    }
}

async fn run(args: Cli) -> Result<()> {
    let tls = TlsOptions::from_flags(args.certs.as_deref(), args.client_cert, args.client_key)?;

    match args.host2 {
        None => {
            seed_tenant(&args.token, &args.host, tls, &plans::second_sync_plan()).await?;
        }
        Some(ref host2) => {
            seed_tenant(&args.token, &args.host, tls.clone(), &plans::first_sync_plan()).await?;
            seed_tenant(&args.token, host2, tls, &plans::second_sync_plan()).await?;
        }
    }

    info!("seeding complete");
    Ok(())
}

async fn seed_tenant(
    token: &str,
    host: &str,
    tls: TlsOptions,
    plan: &[LocationPlan],
) -> Result<()> {
    let config = AppConfig::for_host(token, host, tls)?;
    info!(base_url = %config.base_url, "seeding tenant");
    let client = SamplesClient::new(&config)?;
    let seeder = TenantSeeder::connect(client).await?;
    seeder.populate(plan).await
}


fn init_tracing(log_format: LogFormat, log_file: Option<&std::path::Path>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| AppError::Config(format!("cannot open log file: {err}")))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer);

    match log_format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
