//! Activity record and builder.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::field_visit::FieldVisit;
use super::sampling_location::SamplingLocation;
use super::DomainResource;

/// Kind of work performed during an activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityType {
    /// Routine grab sample.
    SampleRoutine,
    /// Integrated vertical profile sample.
    SampleIntegratedVerticalProfile,
    /// Any type this client does not model.
    #[serde(other)]
    Other,
}

/// Medium the activity samples.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Medium {
    /// Surface or ground water.
    Water,
    /// Any medium this client does not model.
    #[serde(other)]
    Other,
}

/// Sampling work performed during one field visit.
///
/// References its visit and, derived from it, the sampling location; both
/// are embedded by value the way the API expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Caller-chosen stable identifier.
    pub custom_id: String,
    /// The location this activity took place at, mirroring the visit's.
    pub sampling_location: SamplingLocation,
    /// The visit this activity belongs to.
    pub field_visit: FieldVisit,
    /// Kind of work performed.
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    /// Medium sampled.
    pub medium: Medium,
    /// Start of the activity, inherited from the visit by default.
    #[serde(with = "super::time::iso_millis")]
    pub start_time: DateTime<FixedOffset>,
    /// End of the activity, inherited from the visit by default.
    #[serde(with = "super::time::iso_millis")]
    pub end_time: DateTime<FixedOffset>,
    /// Server-side fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Activity {
    /// Start building an activity from the demo defaults.
    #[must_use]
    pub fn builder() -> ActivityBuilder {
        ActivityBuilder::default()
    }
}

impl DomainResource for Activity {
    const PATH: &'static str = "activities";

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

/// Builder with named optional fields. When no visit is supplied a freshly
/// defaulted one is used; the location and time range derive from the visit
/// unless overridden.
#[derive(Debug, Default)]
pub struct ActivityBuilder {
    custom_id: Option<String>,
    field_visit: Option<FieldVisit>,
    sampling_location: Option<SamplingLocation>,
    activity_type: Option<ActivityType>,
    medium: Option<Medium>,
    start_time: Option<DateTime<FixedOffset>>,
    end_time: Option<DateTime<FixedOffset>>,
}

impl ActivityBuilder {
    /// Set the caller-chosen stable identifier.
    #[must_use]
    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    /// Set the owning field visit.
    #[must_use]
    pub fn field_visit(mut self, field_visit: FieldVisit) -> Self {
        self.field_visit = Some(field_visit);
        self
    }

    /// Override the location, which otherwise mirrors the visit's.
    #[must_use]
    pub fn sampling_location(mut self, location: SamplingLocation) -> Self {
        self.sampling_location = Some(location);
        self
    }

    /// Set the kind of work performed.
    #[must_use]
    pub fn activity_type(mut self, activity_type: ActivityType) -> Self {
        self.activity_type = Some(activity_type);
        self
    }

    /// Set the medium sampled.
    #[must_use]
    pub fn medium(mut self, medium: Medium) -> Self {
        self.medium = Some(medium);
        self
    }

    /// Override the inherited start time.
    #[must_use]
    pub fn start_time(mut self, start_time: DateTime<FixedOffset>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Override the inherited end time.
    #[must_use]
    pub fn end_time(mut self, end_time: DateTime<FixedOffset>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Produce the fully populated record.
    #[must_use]
    pub fn build(self) -> Activity {
        let field_visit = self
            .field_visit
            .unwrap_or_else(|| FieldVisit::builder().build());
        Activity {
            id: None,
            custom_id: self
                .custom_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            sampling_location: self
                .sampling_location
                .unwrap_or_else(|| field_visit.sampling_location.clone()),
            start_time: self.start_time.unwrap_or(field_visit.start_time),
            end_time: self.end_time.unwrap_or(field_visit.end_time),
            field_visit,
            activity_type: self.activity_type.unwrap_or(ActivityType::SampleRoutine),
            medium: self.medium.unwrap_or(Medium::Water),
            extra: Map::new(),
        }
    }
}
