use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::types::Frequency;

/// Serializes a Frequency as its MHz display string
pub fn serialize_display<S>(frequency: &Frequency, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    frequency.to_string().serialize(serializer)
}

/// Deserializes a kHz Frequency from an MHz display string
pub fn deserialize_display<'de, D>(deserializer: D) -> Result<Frequency, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    let hz = crate::frequency::parse_mhz(&text).map_err(de::Error::custom)?;
    if hz < 0 || hz > i64::from(u32::MAX) {
        return Err(de::Error::custom(format!("frequency out of bounds: {}", text)));
    }
    Ok(Frequency::hz(hz as u32).to_khz())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[derive(Serialize, Deserialize)]
    struct Test {
        #[serde(serialize_with = "serialize_display")]
        #[serde(deserialize_with = "deserialize_display")]
        frequency: Frequency,
    }

    #[test]
    fn test_display_serialization() {
        let original = Test {
            frequency: Frequency::khz(118_025),
        };

        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, r#"{"frequency":"118.025"}"#);

        let deserialized: Test = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized.frequency, original.frequency);
    }

    #[test]
    fn test_hz_serializes_as_display() {
        let original = Test {
            frequency: Frequency::hz(121_500_000),
        };
        let serialized = serde_json::to_string(&original).unwrap();
        assert_eq!(serialized, r#"{"frequency":"121.500"}"#);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Test>(r#"{"frequency":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Test>(r#"{"frequency":"-1.0"}"#).is_err());
    }
}
