//! Field visit record and builder.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use super::sampling_location::SamplingLocation;
use super::time::{self, DEMO_VISIT_END, DEMO_VISIT_START};
use super::DomainResource;

/// Planning lifecycle of a field visit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanningStatus {
    /// Visit scheduled but not started.
    Planned,
    /// Visit in progress.
    InProgress,
    /// Visit completed.
    Done,
    /// Visit cancelled.
    Cancelled,
}

/// A visit to one sampling location over a time window.
///
/// The API embeds the referenced location by value, not by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldVisit {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Caller-chosen stable identifier.
    pub custom_id: String,
    /// The visited location, embedded by value.
    pub sampling_location: SamplingLocation,
    /// Start of the visit window.
    #[serde(with = "time::iso_millis")]
    pub start_time: DateTime<FixedOffset>,
    /// End of the visit window.
    #[serde(with = "time::iso_millis")]
    pub end_time: DateTime<FixedOffset>,
    /// Planning lifecycle state.
    pub planning_status: PlanningStatus,
    /// Server-side fields this client does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldVisit {
    /// Start building a visit from the demo defaults.
    #[must_use]
    pub fn builder() -> FieldVisitBuilder {
        FieldVisitBuilder::default()
    }
}

impl DomainResource for FieldVisit {
    const PATH: &'static str = "fieldvisits";

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

/// Builder with named optional fields. When no location is supplied a
/// freshly defaulted one is used; the time window defaults to the fixed
/// 2014-10-29 09:00–17:00 demo window with status `DONE`.
#[derive(Debug, Default)]
pub struct FieldVisitBuilder {
    custom_id: Option<String>,
    sampling_location: Option<SamplingLocation>,
    start_time: Option<DateTime<FixedOffset>>,
    end_time: Option<DateTime<FixedOffset>>,
    planning_status: Option<PlanningStatus>,
}

impl FieldVisitBuilder {
    /// Set the caller-chosen stable identifier.
    #[must_use]
    pub fn custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    /// Set the visited location.
    #[must_use]
    pub fn sampling_location(mut self, location: SamplingLocation) -> Self {
        self.sampling_location = Some(location);
        self
    }

    /// Set the start of the visit window.
    #[must_use]
    pub fn start_time(mut self, start_time: DateTime<FixedOffset>) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the end of the visit window.
    #[must_use]
    pub fn end_time(mut self, end_time: DateTime<FixedOffset>) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Set the planning lifecycle state.
    #[must_use]
    pub fn planning_status(mut self, status: PlanningStatus) -> Self {
        self.planning_status = Some(status);
        self
    }

    /// Produce the fully populated record.
    #[must_use]
    pub fn build(self) -> FieldVisit {
        FieldVisit {
            id: None,
            custom_id: self
                .custom_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            sampling_location: self
                .sampling_location
                .unwrap_or_else(|| SamplingLocation::builder().build()),
            start_time: self
                .start_time
                .unwrap_or_else(|| time::parse_fixed(DEMO_VISIT_START)),
            end_time: self
                .end_time
                .unwrap_or_else(|| time::parse_fixed(DEMO_VISIT_END)),
            planning_status: self.planning_status.unwrap_or(PlanningStatus::Done),
            extra: Map::new(),
        }
    }
}
