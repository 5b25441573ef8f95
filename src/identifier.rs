// identifier.rs

use std::fmt;

/// An identifier that is either a numeric entity id or a UUID string.
///
/// Which lookups accept a UUID directly and which resolve it to a numeric
/// id first is resource-specific; see the individual service methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdOrUuid {
    value: String,
    is_uuid: bool,
}

impl IdOrUuid {
    pub fn id(id: i64) -> Self {
        Self { value: id.to_string(), is_uuid: false }
    }

    pub fn uuid(uuid: impl Into<String>) -> Self {
        Self { value: uuid.into(), is_uuid: true }
    }

    pub fn is_uuid(&self) -> bool {
        self.is_uuid
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for IdOrUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
