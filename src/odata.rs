// odata.rs
//! Open Data Protocol helpers shared by every resource type.
//!
//! Relation fields come back from the API in one of two shapes: a deferred
//! stub carrying the related entity id and a follow-up URI, or (when the
//! query asked for `$expand`) an inlined array of full entity bodies. A
//! [`Reference`] detects the shape while keeping the raw JSON around so the
//! caller can decode an expanded relation into its concrete type afterwards.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::error::Category;
use serde_json::value::RawValue;
use std::fmt;

use crate::error::FleetHubError;

/// Formats an OData entity id path, e.g. `v4/device(4218895)`.
pub fn entity_url(base: &str, id: impl fmt::Display) -> String {
    format!("{}({})", base, id)
}

/// Which of the two wire shapes a relation field arrived in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// A stub pointing at the related entity: fetch `uri` to get full data.
    Deferred { id: i64, uri: String },
    /// The relation was expanded in place; the entity bodies live in the
    /// retained raw payload and can be read with [`Reference::decode_as`].
    Expanded,
}

/// A polymorphic relation field.
///
/// A `null` relation decodes without error into a zero-valued deferred stub
/// (id 0, empty URI), which callers treat as "no relation".
#[derive(Debug, Clone)]
pub struct Reference {
    shape: Shape,
    raw: String,
}

impl Reference {
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Related entity id for the deferred shape, 0 otherwise.
    pub fn id(&self) -> i64 {
        match self.shape {
            Shape::Deferred { id, .. } => id,
            Shape::Expanded => 0,
        }
    }

    /// Follow-up URI for the deferred shape, empty otherwise.
    pub fn uri(&self) -> &str {
        match &self.shape {
            Shape::Deferred { uri, .. } => uri,
            Shape::Expanded => "",
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.shape, Shape::Expanded)
    }

    /// True for the zero-valued stub the API sends when no relation exists.
    pub fn is_empty(&self) -> bool {
        matches!(&self.shape, Shape::Deferred { id: 0, uri } if uri.is_empty())
    }

    /// Decodes the retained raw JSON into a concrete type.
    ///
    /// For an expanded relation the target is typically a `Vec` of the
    /// related resource's response type.
    pub fn decode_as<T: DeserializeOwned>(&self) -> Result<T, FleetHubError> {
        serde_json::from_str(&self.raw).map_err(Into::into)
    }

    /// The raw JSON this reference was decoded from.
    pub fn raw_json(&self) -> &str {
        &self.raw
    }

    fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct StubFields {
            #[serde(rename = "__id")]
            id: Option<i64>,
            #[serde(rename = "__deferred")]
            deferred: Option<DeferredField>,
        }
        #[derive(Deserialize)]
        struct DeferredField {
            uri: Option<String>,
        }

        match serde_json::from_str::<Option<StubFields>>(raw) {
            Ok(None) => Ok(Self {
                shape: Shape::Deferred { id: 0, uri: String::new() },
                raw: raw.to_string(),
            }),
            Ok(Some(fields)) => Ok(Self {
                shape: Shape::Deferred {
                    id: fields.id.unwrap_or(0),
                    uri: fields.deferred.and_then(|d| d.uri).unwrap_or_default(),
                },
                raw: raw.to_string(),
            }),
            // A shape mismatch (not a syntax error) means the relation was
            // expanded into an entity array; anything else is a real decode
            // failure and propagates.
            Err(err) if err.classify() == Category::Data => {
                serde_json::from_str::<Vec<&RawValue>>(raw)?;
                Ok(Self { shape: Shape::Expanded, raw: raw.to_string() })
            }
            Err(err) => Err(err),
        }
    }
}

impl Default for Reference {
    fn default() -> Self {
        Self {
            shape: Shape::Deferred { id: 0, uri: String::new() },
            raw: "null".to_string(),
        }
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Self::parse(raw.get()).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Reference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let raw = RawValue::from_string(self.raw.clone()).map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    const DEFERRED_MESSAGE: &str = r#"{
        "__id": 124474,
        "__deferred": {
            "uri": "/fleet/service_instance(@id)?@id=124474"
        }
    }"#;

    const EXPANDED_MESSAGE: &str = r#"[
        {
            "id": 5,
            "slug": "raspberrypi3-64",
            "name": "Raspberry Pi 3 (using 64bit OS)"
        }
    ]"#;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestEntity {
        id: i64,
        slug: String,
        name: String,
    }

    #[test]
    fn test_deferred_stub() {
        let reference: Reference = serde_json::from_str(DEFERRED_MESSAGE).unwrap();
        assert_eq!(reference.id(), 124474);
        assert_eq!(reference.uri(), "/fleet/service_instance(@id)?@id=124474");
        assert!(!reference.is_expanded());
        assert!(!reference.is_empty());
    }

    #[test]
    fn test_expanded_array() {
        let reference: Reference = serde_json::from_str(EXPANDED_MESSAGE).unwrap();
        assert!(reference.is_expanded());
        assert_eq!(reference.id(), 0);
        assert_eq!(reference.uri(), "");

        let entities: Vec<TestEntity> = reference.decode_as().unwrap();
        assert_eq!(
            entities,
            vec![TestEntity {
                id: 5,
                slug: "raspberrypi3-64".to_string(),
                name: "Raspberry Pi 3 (using 64bit OS)".to_string(),
            }]
        );
    }

    #[test]
    fn test_null_is_zero_valued_stub() {
        let reference: Reference = serde_json::from_str("null").unwrap();
        assert_eq!(reference.id(), 0);
        assert_eq!(reference.uri(), "");
        assert!(reference.is_empty());
    }

    #[test]
    fn test_empty_object_is_zero_valued_stub() {
        let reference: Reference = serde_json::from_str("{}").unwrap();
        assert!(reference.is_empty());
    }

    #[test]
    fn test_decode_as_reproduces_stub_bytes() {
        let reference: Reference = serde_json::from_str(DEFERRED_MESSAGE).unwrap();
        #[derive(Debug, Deserialize, PartialEq)]
        struct Stub {
            #[serde(rename = "__id")]
            id: i64,
        }
        let stub: Stub = reference.decode_as().unwrap();
        assert_eq!(stub, Stub { id: 124474 });
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(serde_json::from_str::<Reference>("{\"__id\": ").is_err());
    }

    #[test]
    fn test_scalar_is_an_error() {
        assert!(serde_json::from_str::<Reference>("42").is_err());
    }

    #[test]
    fn test_serialize_emits_raw_payload() {
        let reference: Reference = serde_json::from_str(EXPANDED_MESSAGE).unwrap();
        let serialized = serde_json::to_string(&reference).unwrap();
        assert_eq!(serialized, EXPANDED_MESSAGE);
    }

    #[test]
    fn test_entity_url() {
        assert_eq!(entity_url("v4/device", 4218895), "v4/device(4218895)");
        assert_eq!(entity_url("v4/application", "42"), "v4/application(42)");
    }
}
