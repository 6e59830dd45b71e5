use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Tag given to nodes whose `type` is not a string, or that are not objects.
pub(crate) const UNKNOWN_KIND: &str = "unknown";

/// Raw `{"type": T, T: {...}, ...}` object as the service sends it.
///
/// Blocks and property values share this shape: the tag names the variant and
/// the payload lives under a key equal to the tag. Everything else on the
/// object (ids, timestamps, `has_children`, ...) is kept in `fields` and ignored.
///
/// Any JSON value is accepted. A missing tag is `""`; a non-string tag or a
/// non-object node gets [`UNKNOWN_KIND`] so the caller degrades it.
#[derive(Debug)]
pub(crate) struct Tagged {
    pub kind: String,
    pub fields: Map<String, Value>,
}

impl<'de> Deserialize<'de> for Tagged {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_value(Value::deserialize(deserializer)?))
    }
}

impl Tagged {
    fn from_value(value: Value) -> Self {
        let mut fields = match value {
            Value::Object(fields) => fields,
            other => {
                log::debug!("node is not an object: {other}");
                return Self {
                    kind: UNKNOWN_KIND.to_string(),
                    fields: Map::new(),
                };
            }
        };
        let kind = match fields.remove("type") {
            None => String::new(),
            Some(Value::String(kind)) => kind,
            Some(other) => {
                log::debug!("node has a non-string type: {other}");
                UNKNOWN_KIND.to_string()
            }
        };
        Self { kind, fields }
    }

    /// Removes the payload stored under `key` and deserializes it.
    ///
    /// Returns `None` when the key is missing or the payload does not have the
    /// expected shape; callers degrade to their `Unsupported` variant.
    pub fn take<T: DeserializeOwned>(&mut self, key: &str) -> Option<T> {
        let value = self.fields.remove(key)?;
        match serde_json::from_value(value) {
            Ok(payload) => Some(payload),
            Err(err) => {
                log::debug!("malformed `{key}` payload: {err}");
                None
            }
        }
    }
}
