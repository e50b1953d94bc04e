use std::sync::Arc;

use aqs_seed::client::SamplesClient;
use aqs_seed::models::{Activity, ActivityType, FieldVisit, SamplingLocation};
use aqs_seed::seed::{fixtures, plans, LocationPlan, ObservationSource, TenantSeeder};
use aqs_seed::transport::HttpMethod;
use aqs_seed::AppError;
use serde_json::{json, Value};

use super::stub_transport::StubTransport;

fn client_over(stub: &Arc<StubTransport>) -> SamplesClient {
    SamplesClient::with_transport(Arc::clone(stub) as Arc<_>, "https://host/api/", "tok")
}

fn envelope(items: &[Value]) -> Value {
    json!({ "domainObjects": items, "totalCount": items.len() })
}

fn location_with_id(custom_id: &str, id: &str) -> SamplingLocation {
    let mut location = SamplingLocation::builder().custom_id(custom_id).build();
    location.id = Some(id.to_owned());
    location
}

fn as_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("serializes")
}

fn exchange_configuration_raw() -> Value {
    json!({
        "id": "EC1",
        "type": "AQUARIUS_TIMESERIES",
        "settings": [{"key": "STALE", "value": "1"}],
        "samplingLocationMappings": [
            {"samplingLocation": {"id": "OLD"}, "externalLocation": "OldLoc"}
        ],
        "observationMappings": [
            {
                "observedProperty": {"id": "OLD"},
                "externalObservedProperty": "TW",
                "externalUnit": "°F"
            }
        ],
        "connectorVersion": "2.1.0"
    })
}

fn exchange_configuration_cleared() -> Value {
    json!({
        "id": "EC1",
        "type": "AQUARIUS_TIMESERIES",
        "settings": [],
        "samplingLocationMappings": [],
        "observationMappings": [],
        "connectorVersion": "2.1.0"
    })
}

fn enqueue_observed_property_lookups(stub: &StubTransport) {
    for (index, (custom_id, _, _)) in plans::OBSERVATION_MAP.iter().enumerate() {
        stub.enqueue_json(&envelope(&[json!({
            "id": format!("P{index}"),
            "customId": custom_id,
        })]));
    }
}

/// Seeding a fresh tenant with a vertical-profile location and a CSV
/// location: two location creates, one visit + one vertical-profile
/// activity, one CSV import, and a fully rebuilt exchange configuration.
#[tokio::test]
async fn seeds_a_fresh_tenant_end_to_end() {
    let stub = Arc::new(StubTransport::new());
    let client = client_over(&stub);

    let plan = [
        LocationPlan {
            custom_id: "LOC1",
            external_location: "EXT1",
            source: ObservationSource::VerticalProfile,
        },
        LocationPlan {
            custom_id: "LOC2",
            external_location: "EXT2",
            source: ObservationSource::SimpleCsv(fixtures::OBSERVATIONS_BASIC),
        },
    ];

    let loc1 = location_with_id("LOC1", "L1");
    let loc2 = location_with_id("LOC2", "L2");
    let mut visit = FieldVisit::builder()
        .sampling_location(loc1.clone())
        .custom_id("LOC1_FV_20141029")
        .build();
    visit.id = Some("V1".into());
    let mut activity = Activity::builder()
        .field_visit(visit.clone())
        .custom_id("LOC1_VPA_20141029")
        .activity_type(ActivityType::SampleIntegratedVerticalProfile)
        .build();
    activity.id = Some("A1".into());

    // connect
    stub.enqueue_json(&json!({"releaseName": "2024.03.544"}));
    // LOC1: lookup miss, create, reset history, visit, activity, import
    stub.enqueue_json(&envelope(&[]));
    stub.enqueue_json(&as_json(&loc1));
    stub.enqueue_ok("");
    stub.enqueue_json(&envelope(&[]));
    stub.enqueue_json(&envelope(&[]));
    stub.enqueue_json(&as_json(&visit));
    stub.enqueue_json(&envelope(&[]));
    stub.enqueue_json(&as_json(&activity));
    stub.enqueue_ok("{}");
    // LOC2: lookup miss, create, reset history, CSV import
    stub.enqueue_json(&envelope(&[]));
    stub.enqueue_json(&as_json(&loc2));
    stub.enqueue_ok("");
    stub.enqueue_json(&envelope(&[]));
    stub.enqueue_ok("{}");
    // exchange configuration: search, reset PUT, property lookups, final PUT
    stub.enqueue_json(&envelope(&[exchange_configuration_raw()]));
    stub.enqueue_json(&exchange_configuration_cleared());
    enqueue_observed_property_lookups(&stub);
    stub.enqueue_json(&exchange_configuration_cleared());

    let seeder = TenantSeeder::connect(client).await.expect("tenant available");
    seeder.populate(&plan).await.expect("populate succeeds");

    // Creates: two locations, one visit, one activity.
    assert_eq!(stub.count(HttpMethod::Post), 4);
    // Resets: one observations delete per location, no stale visits.
    assert_eq!(stub.count(HttpMethod::Delete), 2);
    // Exchange configuration: reset PUT + rebuilt PUT.
    assert_eq!(stub.count(HttpMethod::Put), 2);

    let uploads = stub.uploads();
    assert_eq!(uploads.len(), 2);
    assert!(uploads[0].url.contains("services/import/verticalprofiledata"));
    assert!(uploads[0].url.contains("activityId=A1"));
    assert!(uploads[0].url.contains("samplingLocationIds=L1"));
    assert!(uploads[0].url.contains("token=tok"));
    assert!(uploads[1].url.contains("services/import/observations"));
    assert!(uploads[1].url.contains("fileType=SIMPLE_CSV"));
    assert!(uploads[1].url.contains("linkFieldVisitsForNewObservations=true"));

    let csv = String::from_utf8(uploads[1].content.clone()).expect("utf8 csv");
    assert!(csv.contains("LOC2_SA_20141029_1"), "placeholder substituted");
    assert!(!csv.contains(fixtures::LOCATION_PLACEHOLDER));

    let calls = stub.calls();
    let activity_post = calls
        .iter()
        .find(|call| call.method == HttpMethod::Post && call.url.ends_with("/activities"))
        .expect("activity create");
    let activity_body = activity_post.body.as_ref().expect("activity body");
    assert_eq!(activity_body["type"], "SAMPLE_INTEGRATED_VERTICAL_PROFILE");

    let final_put = calls.last().expect("final call");
    assert_eq!(final_put.method, HttpMethod::Put);
    assert!(final_put.url.ends_with("/exchangeconfigurations/EC1"));
    let body = final_put.body.as_ref().expect("put body");
    assert_eq!(
        body["settings"].as_array().expect("settings").len(),
        plans::CONNECTOR_SETTINGS.len()
    );
    assert_eq!(
        body["samplingLocationMappings"],
        json!([
            {"samplingLocation": {"id": "L1"}, "externalLocation": "EXT1"},
            {"samplingLocation": {"id": "L2"}, "externalLocation": "EXT2"}
        ])
    );
    let mappings = body["observationMappings"].as_array().expect("mappings");
    assert_eq!(mappings.len(), plans::OBSERVATION_MAP.len());
    assert_eq!(mappings[0]["observedProperty"]["id"], "P0");
    assert_eq!(mappings[0]["externalObservedProperty"], "NH4NH3_dis");
    // Unmodelled server fields survive the clear-and-rebuild round trip.
    assert_eq!(body["connectorVersion"], "2.1.0");
}

#[tokio::test]
async fn stale_field_visits_are_deleted_before_reseeding() {
    let stub = Arc::new(StubTransport::new());
    let client = client_over(&stub);

    let plan = [LocationPlan {
        custom_id: "LOC2",
        external_location: "EXT2",
        source: ObservationSource::SimpleCsv(fixtures::OBSERVATIONS_BASIC),
    }];

    let loc2 = location_with_id("LOC2", "L2");
    let mut stale_visit = FieldVisit::builder()
        .sampling_location(loc2.clone())
        .custom_id("LOC2_FV_20141029")
        .build();
    stale_visit.id = Some("V9".into());

    stub.enqueue_json(&json!({"releaseName": "2024.03.544"}));
    // Location already exists; observations and the stale visit go away.
    stub.enqueue_json(&envelope(&[as_json(&loc2)]));
    stub.enqueue_ok("");
    stub.enqueue_json(&envelope(&[as_json(&stale_visit)]));
    stub.enqueue_ok("");
    stub.enqueue_ok("{}");
    stub.enqueue_json(&envelope(&[exchange_configuration_raw()]));
    stub.enqueue_json(&exchange_configuration_cleared());
    enqueue_observed_property_lookups(&stub);
    stub.enqueue_json(&exchange_configuration_cleared());

    let seeder = TenantSeeder::connect(client).await.expect("tenant available");
    seeder.populate(&plan).await.expect("populate succeeds");

    assert_eq!(stub.count(HttpMethod::Post), 0, "nothing to create");
    let calls = stub.calls();
    assert!(
        calls
            .iter()
            .any(|call| call.method == HttpMethod::Delete
                && call.url.ends_with("/fieldvisits/V9")),
        "stale visit deleted; activity removal cascades server-side"
    );
}

#[tokio::test]
async fn populate_fails_without_an_exchange_configuration() {
    let stub = Arc::new(StubTransport::new());
    let client = client_over(&stub);

    stub.enqueue_json(&json!({"releaseName": "2024.03.544"}));
    stub.enqueue_json(&envelope(&[]));

    let seeder = TenantSeeder::connect(client).await.expect("tenant available");
    let err = seeder.populate(&[]).await.expect_err("no configuration");
    match err {
        AppError::NotFound(msg) => assert!(msg.contains("AQUARIUS_TIMESERIES"), "got: {msg}"),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn unavailable_tenant_refuses_to_seed() {
    let stub = Arc::new(StubTransport::new());
    let client = client_over(&stub);
    stub.enqueue_json(&json!({"status": "starting"}));

    let err = TenantSeeder::connect(client).await.expect_err("unavailable");
    assert!(matches!(err, AppError::Unavailable(_)));
}
