use crate::domain::ids::{CaseId, ColumnId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fire-and-forget signal for the presentation layer (e.g., a toast)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    ColumnAdded {
        column_id: ColumnId,
        title: String,
    },
    ColumnRenamed {
        column_id: ColumnId,
        title: String,
    },
    ColumnDeleted {
        column_id: ColumnId,
        title: String,
        cases_removed: usize,
    },
    CaseCreated {
        case_id: CaseId,
        column_id: ColumnId,
        column_title: String,
    },
    CaseMoved {
        case_id: CaseId,
        case_title: String,
        from_column: ColumnId,
        to_column: ColumnId,
        to_title: String,
    },
}

impl Notification {
    /// Human-readable text for the notification
    pub fn message(&self) -> String {
        match self {
            Self::ColumnAdded { title, .. } => format!("Column \"{}\" added", title),
            Self::ColumnRenamed { title, .. } => format!("Column renamed to \"{}\"", title),
            Self::ColumnDeleted { .. } => "Column deleted successfully".to_string(),
            Self::CaseCreated { column_title, .. } => format!("Case created in {}", column_title),
            Self::CaseMoved { to_title, .. } => format!("Moved to {}", to_title),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let deleted = Notification::ColumnDeleted {
            column_id: ColumnId::from("todo"),
            title: "TODO".to_string(),
            cases_removed: 2,
        };
        assert_eq!(deleted.message(), "Column deleted successfully");

        let moved = Notification::CaseMoved {
            case_id: CaseId::from("1"),
            case_title: "Case 1".to_string(),
            from_column: ColumnId::from("todo"),
            to_column: ColumnId::from("done"),
            to_title: "DONE".to_string(),
        };
        assert_eq!(moved.to_string(), "Moved to DONE");
    }

    #[test]
    fn test_serialization_is_tagged() {
        let added = Notification::ColumnAdded {
            column_id: ColumnId::from("x"),
            title: "New Column".to_string(),
        };
        let json = serde_json::to_string(&added).unwrap();
        assert!(json.contains("\"kind\":\"column_added\""));
    }
}
