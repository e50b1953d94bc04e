//! Location plans and fixed mapping tables for the connector demo data.

use super::fixtures;

/// How a planned location receives its observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservationSource {
    /// Seed a field visit + vertical-profile activity and import the
    /// vertical profile fixture.
    VerticalProfile,
    /// Import the given Simple CSV pattern.
    SimpleCsv(&'static str),
    /// No observations; the location only participates in the exchange
    /// configuration mappings.
    Empty,
}

/// One sampling location to ensure exists, with its observation source and
/// the external system location it maps to.
#[derive(Debug, Clone, Copy)]
pub struct LocationPlan {
    /// Custom id of the sampling location.
    pub custom_id: &'static str,
    /// External system location the exchange configuration maps this
    /// location to. Empty on the first sync, which has no counterpart yet.
    pub external_location: &'static str,
    /// Observation source for the location.
    pub source: ObservationSource,
}

/// Locations seeded on the first tenant of a paired sync.
#[must_use]
pub fn first_sync_plan() -> Vec<LocationPlan> {
    vec![
        LocationPlan {
            custom_id: "AqsConnectorLoc1",
            external_location: "",
            source: ObservationSource::VerticalProfile,
        },
        LocationPlan {
            custom_id: "AqsConnectorLoc2",
            external_location: "",
            source: ObservationSource::SimpleCsv(fixtures::OBSERVATIONS_BASIC),
        },
        LocationPlan {
            custom_id: "AqsConnectorLoc3",
            external_location: "",
            source: ObservationSource::SimpleCsv(fixtures::OBSERVATIONS_EXTREME_DATES),
        },
    ]
}

/// Locations seeded on the second tenant, mapped back to the first
/// tenant's locations. `AqtsConnectorLoc4` deliberately maps to a location
/// that does not exist on the far side.
#[must_use]
pub fn second_sync_plan() -> Vec<LocationPlan> {
    vec![
        LocationPlan {
            custom_id: "AqtsConnectorLoc1",
            external_location: "AqsConnectorLoc1",
            source: ObservationSource::VerticalProfile,
        },
        LocationPlan {
            custom_id: "AqtsConnectorLoc2",
            external_location: "AqsConnectorLoc2",
            source: ObservationSource::SimpleCsv(fixtures::OBSERVATIONS_SECOND_SYNC),
        },
        LocationPlan {
            custom_id: "AqtsConnectorLoc3",
            external_location: "AqsConnectorLoc3",
            source: ObservationSource::SimpleCsv(fixtures::OBSERVATIONS_EXTREME_DATES),
        },
        LocationPlan {
            custom_id: "AqtsConnectorLoc4",
            external_location: "NoneExistingLocation",
            source: ObservationSource::Empty,
        },
    ]
}

/// Connector settings written into the exchange configuration.
pub const CONNECTOR_SETTINGS: &[(&str, &str)] = &[
    ("DEFAULT_TIME_ZONE_OFFSET_HOURS", "-7"),
    ("DEFAULT_LOCATION_PATH", "All Locations"),
    ("DEPTH_PARAMETER", "DEPTH"),
    ("DEPTH_PARAMETER_UNIT", "ft"),
    ("NON_DETECT_ALGORITHM", "HALF_MDL"),
];

/// Observed-property custom id → external parameter type and unit. Every
/// property is expected to already exist on the tenant.
pub const OBSERVATION_MAP: &[(&str, &str, &str)] = &[
    ("Ammonia", "NH4NH3_dis", "mg/l"),
    ("Battery Voltage", "VB", "V"),
    ("Chlorophyll a", "WY", "μg/l"),
    ("DO (Concentration)", "WO", "mg/l"),
    ("DO (Saturation)", "WX", "%"),
    ("ORP", "ORP", "mV"),
    ("pH", "PH", "pH Units"),
    ("Specific conductance", "SpCond", "μS/cm"),
    ("Temperature", "TW", "°F"),
    ("Total Dissolved Solids", "TDS", "mg/l"),
    ("Total suspended solids", "TSS", "mg/l"),
    ("Turbidity", "WTNTU", "_NTU"),
];
