//! Typed domain-object records exchanged with the Samples API.
//!
//! The API itself treats every resource as a loose key/value mapping; here
//! each variant the seeding scripts touch is a concrete serde record, with
//! unknown server-side fields preserved through a flattened `extra` map so
//! fetched objects can be written back without loss.

use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod activity;
pub mod exchange;
pub mod field_visit;
pub mod lookup;
pub mod sampling_location;
pub(crate) mod time;

pub use activity::{Activity, ActivityType, Medium};
pub use exchange::{
    ExchangeConfiguration, ExchangeSetting, ObservationMapping, ResourceRef,
    SamplingLocationMapping, AQUARIUS_TIMESERIES,
};
pub use field_visit::{FieldVisit, PlanningStatus};
pub use lookup::{CollectionMethod, ObservedProperty};
pub use sampling_location::{LocationType, SamplingLocation};

/// A remote resource manipulated through the generic CRUD operations of
/// [`crate::SamplesClient`].
///
/// The server assigns `id`; callers pick `customId` as the stable external
/// identifier that idempotent lookups key on.
pub trait DomainResource: Serialize + DeserializeOwned + Send + Sync {
    /// Resource collection path under the API version segment.
    const PATH: &'static str;

    /// Server-assigned identifier, when known.
    fn id(&self) -> Option<&str>;

    /// Assign a locally generated identifier before an id-driven PUT.
    fn set_id(&mut self, id: String);

    /// Caller-chosen stable identifier, when the variant carries one.
    fn custom_id(&self) -> Option<&str>;
}
