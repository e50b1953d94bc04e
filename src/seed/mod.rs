//! Tenant seeding flow: reset-and-reseed locations, visits, activities,
//! observation imports, and the exchange configuration rebuild.

use tracing::{debug, info};

use crate::models::{
    Activity, ActivityType, ExchangeConfiguration, ExchangeSetting, FieldVisit, ObservationMapping,
    ObservedProperty, ResourceRef, SamplingLocation, SamplingLocationMapping,
    AQUARIUS_TIMESERIES,
};
use crate::{AppError, Result, SamplesClient};

pub mod fixtures;
pub mod plans;

pub use plans::{LocationPlan, ObservationSource};

/// Import endpoint for Simple CSV observation files.
const OBSERVATIONS_IMPORT_PATH: &str = "services/import/observations";
/// Import endpoint for vertical profile data files.
const VERTICAL_PROFILE_IMPORT_PATH: &str = "services/import/verticalprofiledata";

fn require_id<'a>(id: Option<&'a str>, what: &str) -> Result<&'a str> {
    id.ok_or_else(|| AppError::NotFound(format!("{what} carries no server id")))
}

/// Seeds one tenant with the connector demo data set.
pub struct TenantSeeder {
    client: SamplesClient,
}

impl std::fmt::Debug for TenantSeeder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TenantSeeder").finish_non_exhaustive()
    }
}

impl TenantSeeder {
    /// Verify the tenant is available and wrap the client.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Unavailable` when the tenant's status endpoint
    /// carries no release marker.
    pub async fn connect(client: SamplesClient) -> Result<Self> {
        client.check_availability().await?;
        Ok(Self { client })
    }

    /// Run the full seeding sequence for `plan`: ensure every location
    /// exists with its observations, then rebuild the exchange
    /// configuration from the result.
    ///
    /// # Errors
    ///
    /// Aborts on the first failing call; the tenant may be left partially
    /// seeded. Re-running is safe — every step is get-or-create or a full
    /// replacement.
    pub async fn populate(&self, plan: &[LocationPlan]) -> Result<()> {
        let locations = self.populate_locations(plan).await?;
        self.populate_exchange_configuration(&locations, plan).await
    }

    async fn populate_locations(&self, plan: &[LocationPlan]) -> Result<Vec<SamplingLocation>> {
        let mut locations = Vec::with_capacity(plan.len());
        for entry in plan {
            let location = self
                .client
                .get_or_create(
                    SamplingLocation::builder()
                        .custom_id(entry.custom_id)
                        .build(),
                )
                .await?;

            match entry.source {
                ObservationSource::VerticalProfile => {
                    self.populate_vertical_profile(&location).await?;
                }
                ObservationSource::SimpleCsv(pattern) => {
                    self.populate_csv_observations(&location, pattern).await?;
                }
                ObservationSource::Empty => {}
            }

            info!(custom_id = entry.custom_id, "location populated");
            locations.push(location);
        }
        Ok(locations)
    }

    /// Delete a location's observations, then its field visits. Removing a
    /// visit cascades to its activities.
    async fn clear_location_history(&self, location: &SamplingLocation) -> Result<()> {
        let location_id = require_id(location.id.as_deref(), &location.custom_id)?;
        self.client
            .delete_collection("observations", &[("samplingLocationIds", location_id)])
            .await?;
        let visits = self
            .client
            .search::<FieldVisit>(&[("samplingLocationIds", location_id)])
            .await?;
        for visit in visits.domain_objects {
            if let Some(visit_id) = visit.id.as_deref() {
                self.client.delete_by_id::<FieldVisit>(visit_id).await?;
            }
        }
        Ok(())
    }

    async fn populate_vertical_profile(&self, location: &SamplingLocation) -> Result<()> {
        self.clear_location_history(location).await?;

        let visit = self
            .client
            .get_or_create(
                FieldVisit::builder()
                    .sampling_location(location.clone())
                    .custom_id(format!("{}_FV_20141029", location.custom_id))
                    .build(),
            )
            .await?;

        let activity = self
            .client
            .get_or_create(
                Activity::builder()
                    .field_visit(visit)
                    .custom_id(format!("{}_VPA_20141029", location.custom_id))
                    .activity_type(ActivityType::SampleIntegratedVerticalProfile)
                    .build(),
            )
            .await?;

        let activity_id = require_id(activity.id.as_deref(), &activity.custom_id)?;
        let location_id = require_id(location.id.as_deref(), &location.custom_id)?;
        self.client
            .import_file(
                VERTICAL_PROFILE_IMPORT_PATH,
                fixtures::VERTICAL_PROFILE_FILE_NAME,
                Some(fixtures::VERTICAL_PROFILE.as_bytes().to_vec()),
                &[
                    ("activityId", activity_id),
                    ("samplingLocationIds", location_id),
                ],
                None,
            )
            .await?;
        Ok(())
    }

    async fn populate_csv_observations(
        &self,
        location: &SamplingLocation,
        pattern: &str,
    ) -> Result<()> {
        self.clear_location_history(location).await?;

        let observations_csv = fixtures::for_location(pattern, &location.custom_id);
        debug!(%observations_csv, "observations csv");
        self.client
            .import_file(
                OBSERVATIONS_IMPORT_PATH,
                fixtures::OBSERVATIONS_FILE_NAME,
                Some(observations_csv.into_bytes()),
                &[
                    ("fileType", "SIMPLE_CSV"),
                    ("timeZoneOffset", "-08"),
                    ("linkFieldVisitsForNewObservations", "true"),
                ],
                None,
            )
            .await?;
        Ok(())
    }

    /// Fetch the tenant's `AQUARIUS_TIMESERIES` exchange configuration,
    /// reset it to empty, then rebuild its settings and mappings from the
    /// seeded locations and the fixed observed-property table. Full
    /// replacement, never an incremental merge.
    async fn populate_exchange_configuration(
        &self,
        locations: &[SamplingLocation],
        plan: &[LocationPlan],
    ) -> Result<()> {
        let result = self
            .client
            .search::<ExchangeConfiguration>(&[("type", AQUARIUS_TIMESERIES)])
            .await?;
        let mut configuration = result.domain_objects.into_iter().next().ok_or_else(|| {
            AppError::NotFound(format!(
                "tenant has no {AQUARIUS_TIMESERIES} exchange configuration"
            ))
        })?;

        configuration.clear();
        let mut configuration = self.client.upsert_by_id(configuration).await?;

        for (key, value) in plans::CONNECTOR_SETTINGS {
            configuration.settings.push(ExchangeSetting {
                key: (*key).to_owned(),
                value: (*value).to_owned(),
            });
        }

        for (location, entry) in locations.iter().zip(plan) {
            let id = require_id(location.id.as_deref(), &location.custom_id)?.to_owned();
            configuration
                .sampling_location_mappings
                .push(SamplingLocationMapping {
                    sampling_location: ResourceRef { id },
                    external_location: entry.external_location.to_owned(),
                });
        }

        for (custom_id, parameter_type, parameter_unit) in plans::OBSERVATION_MAP {
            let property = self
                .client
                .find_by_custom_id::<ObservedProperty>(custom_id, true)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "observedproperties with customId {custom_id} does not exist"
                    ))
                })?;
            let id = require_id(property.id.as_deref(), &property.custom_id)?.to_owned();
            configuration.observation_mappings.push(ObservationMapping {
                observed_property: ResourceRef { id },
                external_observed_property: (*parameter_type).to_owned(),
                external_unit: (*parameter_unit).to_owned(),
            });
        }

        self.client.upsert_by_id(configuration).await?;
        info!("exchange configuration populated");
        Ok(())
    }
}
