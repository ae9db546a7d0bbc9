use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Unique identifier for a column (e.g., "todo", or a generated UUID)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(String);

impl ColumnId {
    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ColumnId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ColumnId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for ColumnId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::error::BoardError::InvalidColumnId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a case, unique across the whole board
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CaseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CaseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl FromStr for CaseId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(crate::error::BoardError::InvalidCaseId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of raw identifiers for new columns and cases.
///
/// Implementations only need to produce non-empty strings. The board
/// rejects values that collide with a live id and asks again, so a
/// generator does not have to know about ids seeded from elsewhere.
pub trait IdGenerator: fmt::Debug {
    fn generate(&mut self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter based ids (e.g., "C1", "C2", ...)
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("")
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_id_parsing() {
        let id = ColumnId::from_str("todo").unwrap();
        assert_eq!(id.as_str(), "todo");

        let id = ColumnId::from_str("  done ").unwrap();
        assert_eq!(id.as_str(), "done");

        assert!(ColumnId::from_str("").is_err());
        assert!(ColumnId::from_str("   ").is_err());
    }

    #[test]
    fn test_case_id_parsing() {
        let id = CaseId::from_str("42").unwrap();
        assert_eq!(id.to_string(), "42");

        assert!(CaseId::from_str("").is_err());
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::new("C");
        assert_eq!(ids.generate(), "C1");
        assert_eq!(ids.generate(), "C2");

        let mut bare = SequentialIds::default();
        assert_eq!(bare.generate(), "1");
    }

    #[test]
    fn test_uuid_generator_is_random() {
        let mut ids = UuidGenerator;
        let a = ids.generate();
        let b = ids.generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(&a).is_ok());
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&ColumnId::from("in-progress")).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let id: CaseId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(id.as_str(), "7");
    }
}
