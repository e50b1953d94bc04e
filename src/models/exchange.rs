//! Exchange configuration records.
//!
//! The exchange configuration is a singleton per connector type, fetched by
//! a `type` search and always fully replaced: callers clear the three
//! mapping sequences, PUT the emptied record, rebuild the sequences, and
//! PUT again. Unknown server fields ride along in `extra` so the round trip
//! is lossless.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DomainResource;

/// Connector type of the exchange configuration the seeding scripts own.
pub const AQUARIUS_TIMESERIES: &str = "AQUARIUS_TIMESERIES";

/// Reference to another domain object by server id only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceRef {
    /// Server-assigned identifier of the referenced object.
    pub id: String,
}

/// One key/value connector setting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExchangeSetting {
    /// Setting name.
    pub key: String,
    /// Setting value.
    pub value: String,
}

/// Maps a local sampling location to an external system location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SamplingLocationMapping {
    /// Local location, referenced by id.
    pub sampling_location: ResourceRef,
    /// External system location identifier.
    pub external_location: String,
}

/// Maps a local observed property to an external parameter and unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ObservationMapping {
    /// Local observed property, referenced by id.
    pub observed_property: ResourceRef,
    /// External parameter type.
    pub external_observed_property: String,
    /// External unit identifier.
    pub external_unit: String,
}

/// Cross-system field and parameter mapping configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeConfiguration {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Connector type, e.g. [`AQUARIUS_TIMESERIES`].
    #[serde(rename = "type")]
    pub config_type: String,
    /// Ordered key/value settings.
    #[serde(default)]
    pub settings: Vec<ExchangeSetting>,
    /// Ordered local-to-external location pairs.
    #[serde(default)]
    pub sampling_location_mappings: Vec<SamplingLocationMapping>,
    /// Ordered observed-property-to-external-parameter triples.
    #[serde(default)]
    pub observation_mappings: Vec<ObservationMapping>,
    /// Server-side fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ExchangeConfiguration {
    /// Empty all three mapping sequences ahead of a full rebuild.
    pub fn clear(&mut self) {
        self.settings.clear();
        self.sampling_location_mappings.clear();
        self.observation_mappings.clear();
    }
}

impl DomainResource for ExchangeConfiguration {
    const PATH: &'static str = "exchangeconfigurations";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn custom_id(&self) -> Option<&str> {
        self.extra.get("customId").and_then(Value::as_str)
    }
}
