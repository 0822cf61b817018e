use super::util;
use chrono::{DateTime, TimeZone, Utc};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Milliseconds between the unix epoch and the first second of 2015
pub const DISCORD_EPOCH: u64 = 1_420_070_400_000;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Snowflake(pub u64);

impl Snowflake {
    /// The moment this ID was generated, taken from the top 42 bits.
    pub fn created_at(&self) -> DateTime<Utc> {
        let millis = (self.0 >> 22) + DISCORD_EPOCH;
        Utc.timestamp_millis_opt(millis as i64)
            .single()
            .unwrap_or_default()
    }

}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        if let Some(i) = value.as_u64() {
            return Ok(Snowflake(i));
        }

        if let Some(s) = value.as_str() {
            return Ok(Snowflake(s.parse().map_err(Error::custom)?));
        }

        Err(Error::invalid_type(
            util::to_unexpected(value),
            &"a string or u64",
        ))
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Snowflake {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Snowflake(s.parse()?))
    }
}

impl From<u64> for Snowflake {
    fn from(x: u64) -> Self {
        Snowflake(x)
    }
}

impl From<&Snowflake> for Snowflake {
    fn from(x: &Snowflake) -> Self {
        *x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_int_and_string() {
        let from_str: Snowflake = serde_json::from_value(json!("623335224318754826")).unwrap();
        let from_int: Snowflake = serde_json::from_value(json!(623335224318754826u64)).unwrap();
        assert_eq!(from_str, from_int);
        assert_eq!(serde_json::to_value(from_int).unwrap(), json!("623335224318754826"));
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(serde_json::from_value::<Snowflake>(json!("abc")).is_err());
        assert!(serde_json::from_value::<Snowflake>(json!(true)).is_err());
        assert!(serde_json::from_value::<Snowflake>(json!(null)).is_err());
    }

    #[test]
    fn test_created_at() {
        // 175928847299117063 is the example ID from the API reference
        let created = Snowflake(175928847299117063).created_at();
        assert_eq!(created.timestamp_millis(), 1462015105796);
    }
}
