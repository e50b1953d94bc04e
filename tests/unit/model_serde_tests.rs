use aqs_seed::models::{
    Activity, ActivityType, ExchangeConfiguration, FieldVisit, SamplingLocation,
};
use serde_json::{json, Value};

#[test]
fn location_serializes_with_api_field_names() {
    let location = SamplingLocation::builder().custom_id("LOC1").build();
    let value = serde_json::to_value(&location).expect("serializes");

    assert_eq!(value["customId"], "LOC1");
    assert_eq!(value["type"], "RIVER");
    assert_eq!(value["horizontalDatum"], "NAD83");
    assert_eq!(value["horizontalCollectionMethod"], "GPS-Unspecified");
    assert!(
        value.get("id").is_none(),
        "unset id must not be serialized, the server assigns it"
    );
}

#[test]
fn visit_serializes_millisecond_timestamps() {
    let visit = FieldVisit::builder().custom_id("LOC1_FV").build();
    let value = serde_json::to_value(&visit).expect("serializes");

    assert_eq!(value["startTime"], "2014-10-29T09:00:00.000-07:00");
    assert_eq!(value["endTime"], "2014-10-29T17:00:00.000-07:00");
    assert_eq!(value["planningStatus"], "DONE");
    assert_eq!(value["samplingLocation"]["customId"], "LOC1");
}

#[test]
fn activity_serializes_visit_and_location_by_value() {
    let activity = Activity::builder()
        .custom_id("LOC1_VPA")
        .activity_type(ActivityType::SampleIntegratedVerticalProfile)
        .build();
    let value = serde_json::to_value(&activity).expect("serializes");

    assert_eq!(value["type"], "SAMPLE_INTEGRATED_VERTICAL_PROFILE");
    assert_eq!(value["medium"], "WATER");
    assert!(value["fieldVisit"].is_object());
    assert!(value["samplingLocation"].is_object());
}

#[test]
fn location_roundtrip_preserves_unmodelled_fields() {
    let raw = json!({
        "id": "L1",
        "customId": "LOC1",
        "name": "LOC1",
        "type": "RIVER",
        "latitude": "49.2061028",
        "longitude": "-123.1504412",
        "horizontalDatum": "NAD83",
        "verticalDatum": "NAVD88",
        "horizontalCollectionMethod": "GPS-Unspecified",
        "verticalCollectionMethod": "Precise Leveling-Bench mark",
        "auditAttributes": {"creationUserProfileId": "u1"}
    });

    let location: SamplingLocation = serde_json::from_value(raw.clone()).expect("parses");
    assert_eq!(location.id.as_deref(), Some("L1"));
    let back = serde_json::to_value(&location).expect("serializes");
    assert_eq!(back["auditAttributes"], raw["auditAttributes"]);
}

#[test]
fn unknown_location_type_parses_as_other() {
    let raw = json!({
        "customId": "LOC1",
        "name": "LOC1",
        "type": "ESTUARY",
        "latitude": "0",
        "longitude": "0",
        "horizontalDatum": "NAD83",
        "verticalDatum": "NAVD88",
        "horizontalCollectionMethod": "GPS-Unspecified",
        "verticalCollectionMethod": "Precise Leveling-Bench mark"
    });
    let location: SamplingLocation = serde_json::from_value(raw).expect("parses");
    assert_eq!(
        location.location_type,
        aqs_seed::models::LocationType::Other
    );
}

fn sample_exchange_configuration() -> Value {
    json!({
        "id": "EC1",
        "type": "AQUARIUS_TIMESERIES",
        "settings": [{"key": "OLD", "value": "1"}],
        "samplingLocationMappings": [
            {"samplingLocation": {"id": "L0"}, "externalLocation": "Old"}
        ],
        "observationMappings": [
            {
                "observedProperty": {"id": "P0"},
                "externalObservedProperty": "TW",
                "externalUnit": "°F"
            }
        ],
        "connectorVersion": "2.1.0"
    })
}

#[test]
fn exchange_configuration_clear_empties_all_three_sequences() {
    let mut configuration: ExchangeConfiguration =
        serde_json::from_value(sample_exchange_configuration()).expect("parses");

    assert_eq!(configuration.settings.len(), 1);
    configuration.clear();

    assert!(configuration.settings.is_empty());
    assert!(configuration.sampling_location_mappings.is_empty());
    assert!(configuration.observation_mappings.is_empty());
}

#[test]
fn exchange_configuration_roundtrip_keeps_server_fields() {
    let configuration: ExchangeConfiguration =
        serde_json::from_value(sample_exchange_configuration()).expect("parses");
    let back = serde_json::to_value(&configuration).expect("serializes");

    assert_eq!(back["type"], "AQUARIUS_TIMESERIES");
    assert_eq!(back["connectorVersion"], "2.1.0");
    assert_eq!(back["observationMappings"][0]["externalUnit"], "°F");
}
