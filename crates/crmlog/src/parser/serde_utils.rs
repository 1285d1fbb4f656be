use std::fmt;
use chrono::NaiveDateTime;
use serde::{Serializer, Deserializer};
use serde::de::{self, Visitor};
use super::TIMESTAMP_FORMAT;

pub fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    struct TimestampVisitor;

    impl<'de> Visitor<'de> for TimestampVisitor {
        type Value = NaiveDateTime;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a timestamp formatted as yyyy-MM-dd HH:mm:ss.fff")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
                .map_err(|e| E::custom(format!("invalid timestamp {:?}: {}", value, e)))
        }
    }

    deserializer.deserialize_str(TimestampVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Serialize, Deserialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(
            serialize_with = "serialize_timestamp",
            deserialize_with = "deserialize_timestamp"
        )]
        at: NaiveDateTime,
    }

    #[test]
    fn test_serialize_keeps_milliseconds() {
        let at = NaiveDateTime::parse_from_str("2015-12-08 10:15:30.007", TIMESTAMP_FORMAT).unwrap();
        let json = serde_json::to_string(&Wrapper { at }).unwrap();
        assert_eq!(json, r#"{"at":"2015-12-08 10:15:30.007"}"#);
    }

    #[test]
    fn test_deserialize_valid() {
        let w: Wrapper = serde_json::from_str(r#"{"at":"2015-12-08 23:59:59.999"}"#).unwrap();
        assert_eq!(w.at.format(TIMESTAMP_FORMAT).to_string(), "2015-12-08 23:59:59.999");
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: Result<Wrapper, _> = serde_json::from_str(r#"{"at":"yesterday"}"#);
        assert!(result.is_err());
    }
}
