//! Thin records for resources the scripts only look up, never create.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DomainResource;

/// An observed property (parameter) already provisioned on the tenant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObservedProperty {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Caller-facing stable identifier, e.g. `Ammonia`.
    pub custom_id: String,
    /// Server-side fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DomainResource for ObservedProperty {
    const PATH: &'static str = "observedproperties";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn custom_id(&self) -> Option<&str> {
        Some(&self.custom_id)
    }
}

/// A sample collection method, e.g. `Water Quality`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMethod {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Caller-facing stable identifier.
    pub custom_id: String,
    /// Server-side fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DomainResource for CollectionMethod {
    const PATH: &'static str = "collectionmethods";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn custom_id(&self) -> Option<&str> {
        Some(&self.custom_id)
    }
}
