use super::util;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::fmt::Formatter;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Discriminator(pub u16);

impl Discriminator {
    pub const MAX: u16 = 9999;

    pub fn new(value: u16) -> Option<Discriminator> {
        if value <= Self::MAX {
            Some(Discriminator(value))
        } else {
            None
        }
    }
}

impl Serialize for Discriminator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:0>4}", self.0))
    }
}

impl<'de> Deserialize<'de> for Discriminator {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        let raw: u64 = match &value {
            Value::Number(n) => n.as_u64().ok_or_else(|| {
                Error::invalid_type(util::to_unexpected(value.clone()), &"a discriminator")
            })?,
            Value::String(s) => s.parse().map_err(Error::custom)?,
            _ => {
                return Err(Error::invalid_type(
                    util::to_unexpected(value),
                    &"a string or integer",
                ))
            }
        };

        if raw > Discriminator::MAX as u64 {
            return Err(Error::custom(format!(
                "discriminator {} is outside 0-{}",
                raw,
                Discriminator::MAX
            )));
        }

        Ok(Discriminator(raw as u16))
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:0>4}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_padded() {
        let d: Discriminator = serde_json::from_value(json!("0042")).unwrap();
        assert_eq!(d, Discriminator(42));
        assert_eq!(d.to_string(), "0042");
        assert_eq!(serde_json::to_value(d).unwrap(), json!("0042"));
    }

    #[test]
    fn test_out_of_range() {
        assert!(serde_json::from_value::<Discriminator>(json!("10000")).is_err());
        assert!(serde_json::from_value::<Discriminator>(json!(10000)).is_err());
        assert!(Discriminator::new(10000).is_none());
        assert_eq!(
            serde_json::from_value::<Discriminator>(json!(9999)).unwrap(),
            Discriminator(9999)
        );
    }
}
