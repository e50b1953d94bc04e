//! Authenticated HTTP transport and response classification.
//!
//! Every call funnels through [`Transport::send`] or [`Transport::upload`]
//! and is classified before the response is handed back: 2xx passes, a 409
//! without a structured `errorCode` passes (import endpoints report replays
//! that way), everything else becomes [`AppError::Api`].

use std::fmt::{Display, Formatter};
use std::fs;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::{TlsMode, TlsOptions};
use crate::{AppError, Result};

/// HTTP method selector for [`Transport::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Classified response returned by the transport.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// HTTP reason phrase, when the status has a canonical one.
    pub reason: Option<String>,
    /// Raw response body.
    pub body: String,
}

impl ApiResponse {
    /// Parse the response body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Json` when the body does not deserialize.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// One file destined for a multipart import endpoint.
#[derive(Debug, Clone)]
pub struct FileUpload {
    /// File name reported to the server.
    pub file_name: String,
    /// File bytes.
    pub content: Vec<u8>,
    /// Optional serialized domain object accompanying the file.
    pub domain_object: Option<String>,
}

/// Seam between the domain-object client and the HTTP stack. Production
/// code uses [`RestTransport`]; tests substitute a recording stub.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a JSON request and classify the response. A caller-supplied
    /// `headers` set replaces the transport's defaults for this call; it is
    /// not merged into them.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Http` on transport failure and `AppError::Api`
    /// when classification rejects the response.
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse>;

    /// Issue a multipart POST carrying `upload` and classify the response.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Http` on transport failure and `AppError::Api`
    /// when classification rejects the response.
    async fn upload(&self, url: &str, upload: FileUpload) -> Result<ApiResponse>;
}

/// `reqwest`-backed transport with fixed default headers and TLS settings.
pub struct RestTransport {
    http: reqwest::Client,
    headers: HeaderMap,
}

impl RestTransport {
    /// Build a transport whose requests carry
    /// `Content-Type: application/json` and `Authorization: token <token>`
    /// unless a call supplies its own header set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the token is not header-safe or a
    /// certificate file cannot be loaded.
    pub fn new(token: &str, tls: &TlsOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let auth = HeaderValue::from_str(&format!("token {token}"))
            .map_err(|err| AppError::Config(format!("token is not header-safe: {err}")))?;
        headers.insert(AUTHORIZATION, auth);

        let mut builder = reqwest::Client::builder();

        builder = match &tls.mode {
            TlsMode::Insecure => builder.danger_accept_invalid_certs(true),
            TlsMode::SystemTrust => builder,
            TlsMode::CaBundle(path) => {
                let pem = fs::read(path)
                    .map_err(|err| AppError::Config(format!("cannot read CA bundle: {err}")))?;
                let cert = reqwest::Certificate::from_pem(&pem)
                    .map_err(|err| AppError::Config(format!("invalid CA bundle: {err}")))?;
                builder.add_root_certificate(cert)
            }
        };

        if let Some(pair) = &tls.client_cert {
            // reqwest's rustls identity wants certificate and key in one
            // PEM buffer.
            let mut pem = fs::read(&pair.cert)
                .map_err(|err| AppError::Config(format!("cannot read client cert: {err}")))?;
            let key = fs::read(&pair.key)
                .map_err(|err| AppError::Config(format!("cannot read client key: {err}")))?;
            pem.extend_from_slice(b"\n");
            pem.extend_from_slice(&key);
            let identity = reqwest::Identity::from_pem(&pem)
                .map_err(|err| AppError::Config(format!("invalid client identity: {err}")))?;
            builder = builder.identity(identity);
        }

        let http = builder
            .build()
            .map_err(|err| AppError::Config(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { http, headers })
    }

    async fn classify(response: reqwest::Response) -> Result<ApiResponse> {
        let status = response.status();
        let reason = status.canonical_reason().map(str::to_owned);
        let body = response.text().await?;
        classify_response(status.as_u16(), reason.as_deref(), &body)?;
        Ok(ApiResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

#[async_trait]
impl Transport for RestTransport {
    async fn send(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<Value>,
        headers: Option<HeaderMap>,
    ) -> Result<ApiResponse> {
        debug!(%method, url, "sending request");
        let mut request = match method {
            HttpMethod::Get => self.http.get(url),
            HttpMethod::Post => self.http.post(url),
            HttpMethod::Put => self.http.put(url),
            HttpMethod::Delete => self.http.delete(url),
        };
        request = request.headers(effective_headers(&self.headers, headers));
        if let Some(body) = body {
            request = request.json(&body);
        }
        let response = request.send().await?;
        Self::classify(response).await
    }

    async fn upload(&self, url: &str, upload: FileUpload) -> Result<ApiResponse> {
        debug!(url, file_name = %upload.file_name, "posting file");
        let part = multipart::Part::bytes(upload.content).file_name(upload.file_name);
        let mut form = multipart::Form::new().part("file", part);
        if let Some(domain_object) = upload.domain_object {
            form = form.text("domainObject", domain_object);
        }
        // multipart supplies its own boundary content type
        let mut headers = self.headers.clone();
        headers.remove(CONTENT_TYPE);
        let response = self
            .http
            .post(url)
            .headers(headers)
            .multipart(form)
            .send()
            .await?;
        Self::classify(response).await
    }
}

/// Pick the header set for one call: a caller-supplied set replaces the
/// defaults wholesale, it is not merged into them.
#[must_use]
pub fn effective_headers(defaults: &HeaderMap, overrides: Option<HeaderMap>) -> HeaderMap {
    overrides.unwrap_or_else(|| defaults.clone())
}

/// Classify an HTTP outcome: 2xx is success, a 409 whose body carries no
/// `errorCode` is a benign import replay, everything else is an error built
/// from the structured `errorCode`/`message` fields when present or the
/// reason phrase when not.
///
/// # Errors
///
/// Returns `AppError::Api` for every response that does not classify as
/// success.
pub fn classify_response(status: u16, reason: Option<&str>, body: &str) -> Result<()> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let field = |name: &str| -> Option<String> {
        parsed
            .as_ref()
            .and_then(|value| value.get(name))
            .and_then(Value::as_str)
            .map(str::to_owned)
    };

    let code = field("errorCode");
    if status == 409 && code.is_none() {
        // Import endpoints answer 409 without an errorCode when the data
        // is already present.
        return Ok(());
    }

    let err = match code {
        Some(code) => {
            let message = field("message").unwrap_or_default();
            if let Some(stack_trace) = field("stackTrace") {
                error!(%stack_trace, "server stack trace");
            }
            AppError::Api {
                status,
                code: Some(code),
                message,
            }
        }
        None => AppError::Api {
            status,
            code: None,
            message: reason.unwrap_or("unknown error").to_owned(),
        },
    };
    error!(%err, "request failed");
    Err(err)
}
