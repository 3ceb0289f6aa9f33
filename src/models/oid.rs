use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes an optional `_id` as its plain hex string, the form the
/// frontend consumes (`"_id": "65a1..."` instead of the extended-JSON
/// `{"$oid": ...}` map).
pub fn serialize_option_oid_as_hex<S>(oid: &Option<ObjectId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match oid {
        Some(oid) => serializer.serialize_str(&oid.to_hex()),
        None => serializer.serialize_none(),
    }
}

/// Accepts an `_id` as a native ObjectId (driver reads), a hex string
/// (clients echoing documents back), or an extended-JSON `{"$oid": ...}` map.
pub fn deserialize_option_oid<'de, D>(deserializer: D) -> Result<Option<ObjectId>, D::Error>
where
    D: Deserializer<'de>,
{
    let bson = Option::<Bson>::deserialize(deserializer)?;
    match bson {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::ObjectId(oid)) => Ok(Some(oid)),
        Some(Bson::String(s)) => ObjectId::parse_str(&s)
            .map(Some)
            .map_err(serde::de::Error::custom),
        Some(Bson::Document(doc)) => match doc.get_str("$oid") {
            Ok(hex) => ObjectId::parse_str(hex)
                .map(Some)
                .map_err(serde::de::Error::custom),
            Err(_) => Err(serde::de::Error::custom("expected an ObjectId document")),
        },
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected ObjectId, hex string or null, got {:?}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Wrapper {
        #[serde(
            rename = "_id",
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_option_oid_as_hex",
            deserialize_with = "deserialize_option_oid",
            default
        )]
        id: Option<ObjectId>,
    }

    #[test]
    fn test_serializes_id_as_plain_hex() {
        let oid = ObjectId::new();
        let wrapper = Wrapper { id: Some(oid) };
        let json = serde_json::to_value(&wrapper).unwrap();
        assert_eq!(json["_id"], serde_json::json!(oid.to_hex()));
    }

    #[test]
    fn test_skips_missing_id() {
        let json = serde_json::to_value(&Wrapper { id: None }).unwrap();
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn test_deserializes_hex_string_id() {
        let oid = ObjectId::new();
        let wrapper: Wrapper =
            serde_json::from_value(serde_json::json!({ "_id": oid.to_hex() })).unwrap();
        assert_eq!(wrapper.id, Some(oid));
    }

    #[test]
    fn test_deserializes_extended_json_id() {
        let oid = ObjectId::new();
        let wrapper: Wrapper =
            serde_json::from_value(serde_json::json!({ "_id": { "$oid": oid.to_hex() } }))
                .unwrap();
        assert_eq!(wrapper.id, Some(oid));
    }

    #[test]
    fn test_rejects_garbage_id() {
        let result: Result<Wrapper, _> =
            serde_json::from_value(serde_json::json!({ "_id": "not-a-hex-id" }));
        assert!(result.is_err());
    }
}
