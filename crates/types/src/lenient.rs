//! Field decoders for backend records that are loosely typed on the wire.
//!
//! The content API stores documents without a schema, so a field may be
//! absent, `null`, or carry a timestamp in either ISO form or epoch millis.

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Decode `null` the same as a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireTimestamp {
    Text(String),
    Millis(i64),
    Other(IgnoredAny),
}

/// Accept an RFC 3339 string or epoch milliseconds; anything else is `None`.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let parsed = match Option::<WireTimestamp>::deserialize(deserializer)? {
        Some(WireTimestamp::Text(text)) => DateTime::parse_from_rfc3339(&text)
            .ok()
            .map(|stamp| stamp.with_timezone(&Utc)),
        Some(WireTimestamp::Millis(millis)) => DateTime::from_timestamp_millis(millis),
        Some(WireTimestamp::Other(_)) | None => None,
    };
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Record {
        #[serde(deserialize_with = "null_as_default")]
        name: String,
        #[serde(deserialize_with = "timestamp")]
        at: Option<DateTime<Utc>>,
    }

    fn decode(value: serde_json::Value) -> Record {
        serde_json::from_value(value).expect("record decodes")
    }

    #[test]
    fn null_and_missing_fall_back_to_default() {
        assert_eq!(decode(json!({ "name": null })).name, "");
        assert_eq!(decode(json!({})).name, "");
        assert_eq!(decode(json!({ "name": "Design" })).name, "Design");
    }

    #[test]
    fn timestamps_accept_iso_and_millis() {
        let iso = decode(json!({ "at": "2024-03-09T16:00:00.000Z" })).at;
        let millis = decode(json!({ "at": 1_710_000_000_000_i64 })).at;
        assert_eq!(iso, millis);
        assert!(iso.is_some());
    }

    #[test]
    fn unparseable_timestamps_become_none() {
        assert_eq!(decode(json!({ "at": "last tuesday" })).at, None);
        assert_eq!(decode(json!({ "at": { "$date": 1 } })).at, None);
        assert_eq!(decode(json!({ "at": null })).at, None);
    }
}
