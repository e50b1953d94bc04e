//! Sampling location record and builder.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::DomainResource;

/// Default coordinates for demo locations (Vancouver, BC).
const DEFAULT_LATITUDE: &str = "49.2061028";
const DEFAULT_LONGITUDE: &str = "-123.1504412";

const DEFAULT_HORIZONTAL_DATUM: &str = "NAD83";
const DEFAULT_VERTICAL_DATUM: &str = "NAVD88";
const DEFAULT_HORIZONTAL_COLLECTION_METHOD: &str = "GPS-Unspecified";
const DEFAULT_VERTICAL_COLLECTION_METHOD: &str = "Precise Leveling-Bench mark";

/// Physical type of a sampling location.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationType {
    /// River or stream site.
    River,
    /// Lake or reservoir site.
    Lake,
    /// Any type this client does not model.
    #[serde(other)]
    Other,
}

/// A place where field visits occur and observations are recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SamplingLocation {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Caller-chosen stable identifier.
    pub custom_id: String,
    /// Display name.
    pub name: String,
    /// Physical location type.
    #[serde(rename = "type")]
    pub location_type: LocationType,
    /// Latitude in decimal degrees, serialized as a string.
    pub latitude: String,
    /// Longitude in decimal degrees, serialized as a string.
    pub longitude: String,
    /// Horizontal reference datum.
    pub horizontal_datum: String,
    /// Vertical reference datum.
    pub vertical_datum: String,
    /// How the horizontal position was collected.
    pub horizontal_collection_method: String,
    /// How the vertical position was collected.
    pub vertical_collection_method: String,
    /// Server-side fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SamplingLocation {
    /// Start building a location from the demo defaults.
    #[must_use]
    pub fn builder() -> SamplingLocationBuilder {
        SamplingLocationBuilder::default()
    }
}

impl DomainResource for SamplingLocation {
    const PATH: &'static str = "samplinglocations";

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

/// Builder with named optional fields; anything left unset takes the demo
/// default, and a missing custom id becomes a fresh UUID.
#[derive(Debug, Default)]
pub struct SamplingLocationBuilder {
    custom_id: Option<String>,
    name: Option<String>,
    location_type: Option<LocationType>,
    latitude: Option<String>,
    longitude: Option<String>,
    horizontal_datum: Option<String>,
    vertical_datum: Option<String>,
    horizontal_collection_method: Option<String>,
    vertical_collection_method: Option<String>,
}

impl SamplingLocationBuilder {
    /// Set the caller-chosen stable identifier.
    #[must_use]
    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    /// Set the display name. Defaults to the custom id.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the location type.
    #[must_use]
    pub fn location_type(mut self, location_type: LocationType) -> Self {
        self.location_type = Some(location_type);
        self
    }

    /// Set the latitude in decimal degrees.
    #[must_use]
    pub fn latitude(mut self, latitude: impl Into<String>) -> Self {
        self.latitude = Some(latitude.into());
        self
    }

    /// Set the longitude in decimal degrees.
    #[must_use]
    pub fn longitude(mut self, longitude: impl Into<String>) -> Self {
        self.longitude = Some(longitude.into());
        self
    }

    /// Set the horizontal reference datum.
    #[must_use]
    pub fn horizontal_datum(mut self, datum: impl Into<String>) -> Self {
        self.horizontal_datum = Some(datum.into());
        self
    }

    /// Set the vertical reference datum.
    #[must_use]
    pub fn vertical_datum(mut self, datum: impl Into<String>) -> Self {
        self.vertical_datum = Some(datum.into());
        self
    }

    /// Set the horizontal collection method.
    #[must_use]
    pub fn horizontal_collection_method(mut self, method: impl Into<String>) -> Self {
        self.horizontal_collection_method = Some(method.into());
        self
    }

    /// Set the vertical collection method.
    #[must_use]
    pub fn vertical_collection_method(mut self, method: impl Into<String>) -> Self {
        self.vertical_collection_method = Some(method.into());
        self
    }

    /// Produce the fully populated record.
    #[must_use]
    pub fn build(self) -> SamplingLocation {
        let custom_id = self
            .custom_id
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        SamplingLocation {
            id: None,
            name: self.name.unwrap_or_else(|| custom_id.clone()),
            custom_id,
            location_type: self.location_type.unwrap_or(LocationType::River),
            latitude: self.latitude.unwrap_or_else(|| DEFAULT_LATITUDE.into()),
            longitude: self.longitude.unwrap_or_else(|| DEFAULT_LONGITUDE.into()),
            horizontal_datum: self
                .horizontal_datum
                .unwrap_or_else(|| DEFAULT_HORIZONTAL_DATUM.into()),
            vertical_datum: self
                .vertical_datum
                .unwrap_or_else(|| DEFAULT_VERTICAL_DATUM.into()),
            horizontal_collection_method: self
                .horizontal_collection_method
                .unwrap_or_else(|| DEFAULT_HORIZONTAL_COLLECTION_METHOD.into()),
            vertical_collection_method: self
                .vertical_collection_method
                .unwrap_or_else(|| DEFAULT_VERTICAL_COLLECTION_METHOD.into()),
            extra: Map::new(),
        }
    }
}
