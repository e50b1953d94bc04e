//! Timestamp handling for the API's millisecond-precision offset format,
//! e.g. `2014-10-29T09:00:00.000-07:00`.

use chrono::{DateTime, FixedOffset, Utc};

/// Start of the fixed demo field-visit window.
pub(crate) const DEMO_VISIT_START: &str = "2014-10-29T09:00:00.000-07:00";
/// End of the fixed demo field-visit window.
pub(crate) const DEMO_VISIT_END: &str = "2014-10-29T17:00:00.000-07:00";

/// Parse a known-good RFC 3339 literal, falling back to the epoch rather
/// than panicking.
pub(crate) fn parse_fixed(value: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(value)
        .unwrap_or_else(|_| DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
}

/// Serde adapter serializing with an explicit `.SSS` millisecond field,
/// which chrono's default RFC 3339 form omits for whole seconds.
pub(crate) mod iso_millis {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

    pub(crate) fn serialize<S>(
        value: &DateTime<FixedOffset>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(FORMAT).to_string())
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}
