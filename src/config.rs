//! Runtime configuration assembled from command-line flags.
//!
//! Unlike a long-running service, the seeding scripts carry their entire
//! configuration on the command line: bearer token, target host(s), TLS
//! trust selection, and an optional log file. This module holds the
//! validated form of those flags.

use std::path::PathBuf;

use crate::{AppError, Result};

/// Keyword accepted by `--certs` to select the OS trust store instead of a
/// CA bundle file.
pub const SYSTEM_TRUST: &str = "system";

/// Server certificate verification mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TlsMode {
    /// No certificate verification. The historical default for seeding
    /// freshly provisioned test tenants with self-signed certificates.
    Insecure,
    /// Verify against the operating system trust store.
    SystemTrust,
    /// Verify against a PEM CA bundle at the given path.
    CaBundle(PathBuf),
}

/// Client certificate pair presented to servers that require mutual TLS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCertPair {
    /// PEM-encoded client certificate.
    pub cert: PathBuf,
    /// PEM-encoded private key for `cert`.
    pub key: PathBuf,
}

/// Complete TLS configuration for the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsOptions {
    /// Server certificate verification mode.
    pub mode: TlsMode,
    /// Optional mutual-TLS identity.
    pub client_cert: Option<ClientCertPair>,
}

impl Default for TlsOptions {
    fn default() -> Self {
        Self {
            mode: TlsMode::Insecure,
            client_cert: None,
        }
    }
}

impl TlsOptions {
    /// Build TLS options from the raw `--certs` / `--client-cert` /
    /// `--client-key` flag values.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when only one half of the client
    /// certificate pair is supplied.
    pub fn from_flags(
        certs: Option<&str>,
        client_cert: Option<PathBuf>,
        client_key: Option<PathBuf>,
    ) -> Result<Self> {
        let mode = match certs {
            None => TlsMode::Insecure,
            Some(value) if value == SYSTEM_TRUST => TlsMode::SystemTrust,
            Some(path) => TlsMode::CaBundle(PathBuf::from(path)),
        };

        let client_cert = match (client_cert, client_key) {
            (None, None) => None,
            (Some(cert), Some(key)) => Some(ClientCertPair { cert, key }),
            _ => {
                return Err(AppError::Config(
                    "--client-cert and --client-key must be given together".into(),
                ))
            }
        };

        Ok(Self { mode, client_cert })
    }
}

/// Validated configuration for one target tenant.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer token for the tenant.
    pub token: String,
    /// Fully qualified API base URL, e.g. `https://host/api/`.
    pub base_url: String,
    /// TLS configuration for the transport.
    pub tls: TlsOptions,
}

impl AppConfig {
    /// Build a config for `host`, expanding it to the fixed
    /// `https://<host>/api/` base URL pattern.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the token or host is empty.
    pub fn for_host(token: &str, host: &str, tls: TlsOptions) -> Result<Self> {
        if token.is_empty() {
            return Err(AppError::Config("token must not be empty".into()));
        }
        if host.is_empty() {
            return Err(AppError::Config("host must not be empty".into()));
        }
        Ok(Self {
            token: token.to_owned(),
            base_url: format!("https://{host}/api/"),
            tls,
        })
    }
}
