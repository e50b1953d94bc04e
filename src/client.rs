//! Generic domain-object client over the transport layer.
//!
//! Builds resource URLs from the base URL, API version segment, and
//! resource path, and offers CRUD-style operations over any
//! [`DomainResource`]. Two creation protocols coexist: [`SamplesClient::create`]
//! POSTs and lets the server assign the id, while
//! [`SamplesClient::upsert_by_id`] PUTs to an id the caller (or this client)
//! chose. Callers must pick the one the endpoint expects.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;
use url::form_urlencoded;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::DomainResource;
use crate::transport::{ApiResponse, FileUpload, HttpMethod, RestTransport, Transport};
use crate::{AppError, Result};

/// API version segment inserted between the base URL and resource paths.
pub const API_VERSION: &str = "v1";

/// Search envelope wrapping every list response.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct SearchResult<T> {
    /// Matching domain objects.
    #[serde(default)]
    pub domain_objects: Vec<T>,
    /// Total matches server-side, when reported.
    pub total_count: Option<u64>,
}

/// Join URL segments with exactly one slash between each.
#[must_use]
pub fn url_join(base: &str, segments: &[&str]) -> String {
    let mut url = base.to_owned();
    for segment in segments {
        if !url.ends_with('/') {
            url.push('/');
        }
        url.push_str(segment);
    }
    url
}

/// Build `base/version/path[/id][?query]`; the query string is appended
/// only when `params` is non-empty.
#[must_use]
pub fn build_url(
    base: &str,
    version: &str,
    path: &str,
    id: Option<&str>,
    params: &[(&str, &str)],
) -> String {
    let mut url = url_join(base, &[version, path]);
    if let Some(id) = id {
        url = url_join(&url, &[id]);
    }
    if !params.is_empty() {
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params)
            .finish();
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(&query);
    }
    url
}

/// Client for one Samples tenant.
#[derive(Clone)]
pub struct SamplesClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    token: String,
}

impl SamplesClient {
    /// Build a client backed by the real HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the transport cannot be constructed
    /// from the given configuration.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let transport = RestTransport::new(&config.token, &config.tls)?;
        Ok(Self::with_transport(
            Arc::new(transport),
            &config.base_url,
            &config.token,
        ))
    }

    /// Build a client over an arbitrary transport. Tests use this to
    /// substitute a recording stub.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>, base_url: &str, token: &str) -> Self {
        Self {
            transport,
            base_url: base_url.to_owned(),
            token: token.to_owned(),
        }
    }

    /// Build a resource URL against this client's base URL. With
    /// `with_token`, the bearer token is carried as a query parameter —
    /// the import endpoints cannot read header auth.
    #[must_use]
    pub fn resource_url(
        &self,
        path: &str,
        id: Option<&str>,
        params: &[(&str, &str)],
        with_token: bool,
    ) -> String {
        if with_token {
            let mut all: Vec<(&str, &str)> = vec![("token", &self.token)];
            all.extend_from_slice(params);
            build_url(&self.base_url, API_VERSION, path, id, &all)
        } else {
            build_url(&self.base_url, API_VERSION, path, id, params)
        }
    }

    /// Verify the tenant answers its status endpoint with a release marker.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unavailable` when the status body carries no
    /// `releaseName` field.
    pub async fn check_availability(&self) -> Result<()> {
        let url = self.resource_url("status", None, &[], false);
        let response = self.transport.send(HttpMethod::Get, &url, None, None).await?;
        let body: Value = response.json()?;
        match body.get("releaseName").and_then(Value::as_str) {
            Some(release_name) => {
                info!(release_name, "tenant is available");
                Ok(())
            }
            None => Err(AppError::Unavailable(
                "status response carries no releaseName".into(),
            )),
        }
    }

    /// Search a typed resource collection.
    ///
    /// # Errors
    ///
    /// Propagates transport/classification errors and body parse failures.
    pub async fn search<T: DomainResource>(
        &self,
        params: &[(&str, &str)],
    ) -> Result<SearchResult<T>> {
        let url = self.resource_url(T::PATH, None, params, false);
        let response = self.transport.send(HttpMethod::Get, &url, None, None).await?;
        response.json()
    }

    /// Search an arbitrary path and return the raw JSON body.
    ///
    /// # Errors
    ///
    /// Propagates transport/classification errors and body parse failures.
    pub async fn search_raw(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = self.resource_url(path, None, params, false);
        let response = self.transport.send(HttpMethod::Get, &url, None, None).await?;
        response.json()
    }

    /// Look up one object by its custom id.
    ///
    /// The server's `customId` filter also matches partially, so results
    /// are linear-scanned for an exact match.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotFound` when nothing matches exactly and
    /// `fail_if_absent` is set.
    pub async fn find_by_custom_id<T: DomainResource>(
        &self,
        custom_id: &str,
        fail_if_absent: bool,
    ) -> Result<Option<T>> {
        let result = self.search::<T>(&[("customId", custom_id)]).await?;
        let found = result
            .domain_objects
            .into_iter()
            .find(|object| object.custom_id() == Some(custom_id));
        if found.is_none() && fail_if_absent {
            return Err(AppError::NotFound(format!(
                "{} with customId {custom_id} does not exist",
                T::PATH
            )));
        }
        Ok(found)
    }

    /// POST a new object; the server assigns the id.
    ///
    /// # Errors
    ///
    /// Propagates transport/classification errors and body parse failures.
    pub async fn create<T: DomainResource>(&self, object: &T) -> Result<T> {
        let url = self.resource_url(T::PATH, None, &[], false);
        let body = serde_json::to_value(object)?;
        let response = self
            .transport
            .send(HttpMethod::Post, &url, Some(body), None)
            .await?;
        response.json()
    }

    /// PUT an object to `path/<id>`, generating a fresh UUID locally when
    /// the object carries none. This is the id-driven creation protocol,
    /// distinct from [`Self::create`].
    ///
    /// # Errors
    ///
    /// Propagates transport/classification errors and body parse failures.
    pub async fn upsert_by_id<T: DomainResource>(&self, mut object: T) -> Result<T> {
        let id = match object.id() {
            Some(id) => id.to_owned(),
            None => {
                let generated = Uuid::new_v4().to_string();
                object.set_id(generated.clone());
                generated
            }
        };
        let url = self.resource_url(T::PATH, Some(&id), &[], false);
        let body = serde_json::to_value(&object)?;
        let response = self
            .transport
            .send(HttpMethod::Put, &url, Some(body), None)
            .await?;
        response.json()
    }

    /// DELETE one object by id.
    ///
    /// # Errors
    ///
    /// Propagates transport/classification errors.
    pub async fn delete_by_id<T: DomainResource>(&self, id: &str) -> Result<()> {
        let url = self.resource_url(T::PATH, Some(id), &[], false);
        self.transport.send(HttpMethod::Delete, &url, None, None).await?;
        Ok(())
    }

    /// DELETE a filtered collection, e.g. all observations of a location.
    ///
    /// # Errors
    ///
    /// Propagates transport/classification errors.
    pub async fn delete_collection(&self, path: &str, params: &[(&str, &str)]) -> Result<()> {
        let url = self.resource_url(path, None, params, false);
        self.transport.send(HttpMethod::Delete, &url, None, None).await?;
        Ok(())
    }

    /// Multipart-POST a file to an import endpoint, authenticating via the
    /// token query parameter. When `content` is `None` the named file is
    /// read from local storage; otherwise `content` is sent under
    /// `filename` as-is.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` when the local file cannot be read, plus the
    /// usual transport/classification errors.
    pub async fn import_file(
        &self,
        path: &str,
        filename: &str,
        content: Option<Vec<u8>>,
        params: &[(&str, &str)],
        domain_object: Option<String>,
    ) -> Result<ApiResponse> {
        let url = self.resource_url(path, None, params, true);
        let upload = match content {
            Some(content) => FileUpload {
                file_name: filename.to_owned(),
                content,
                domain_object,
            },
            None => {
                let content = std::fs::read(filename)?;
                let file_name = Path::new(filename)
                    .file_name()
                    .and_then(std::ffi::OsStr::to_str)
                    .unwrap_or(filename)
                    .to_owned();
                FileUpload {
                    file_name,
                    content,
                    domain_object,
                }
            }
        };
        self.transport.upload(&url, upload).await
    }

    /// The idempotency primitive every seeding script builds on: look the
    /// object up by its custom id and create it only when absent.
    ///
    /// The lookup-then-create pair is not atomic; acceptable under this
    /// system's single-writer, sequential execution.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when the object carries no custom id,
    /// plus the usual transport/classification errors.
    pub async fn get_or_create<T: DomainResource>(&self, object: T) -> Result<T> {
        let custom_id = object
            .custom_id()
            .ok_or_else(|| {
                AppError::Config(format!("{} object needs a customId to get_or_create", T::PATH))
            })?
            .to_owned();
        if let Some(existing) = self.find_by_custom_id::<T>(&custom_id, false).await? {
            return Ok(existing);
        }
        self.create(&object).await
    }

    /// Resolve a collection method's server id by custom id. Older servers
    /// answer this list as a bare array, newer ones wrap it in the
    /// `domainObjects` envelope; both shapes are accepted.
    ///
    /// # Errors
    ///
    /// Propagates transport/classification errors and body parse failures.
    pub async fn collection_method_id(&self, custom_id: &str) -> Result<Option<String>> {
        let body = self
            .search_raw(crate::models::CollectionMethod::PATH, &[])
            .await?;
        let items: &[Value] = match &body {
            Value::Array(items) => items,
            other => other
                .get("domainObjects")
                .and_then(Value::as_array)
                .map_or(&[][..], Vec::as_slice),
        };
        Ok(items
            .iter()
            .find(|method| method.get("customId").and_then(Value::as_str) == Some(custom_id))
            .and_then(|method| method.get("id"))
            .and_then(Value::as_str)
            .map(str::to_owned))
    }
}
