use crate::domain::ids::{CaseId, ColumnId};
use serde::{Deserialize, Serialize};

/// A named, ordered bucket of cases.
///
/// The column stores only case ids; the case entities live in the board's
/// arena. Position in `cases` is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub cases: Vec<CaseId>,
}

impl Column {
    pub fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            cases: Vec::new(),
        }
    }

    /// Sets the title as given. An empty title leaves the current one in place.
    pub fn set_title(&mut self, title: &str) -> bool {
        if title.is_empty() {
            return false;
        }
        self.title = title.to_string();
        true
    }

    /// Index of a case within this column
    pub fn position_of(&self, case_id: &CaseId) -> Option<usize> {
        self.cases.iter().position(|id| id == case_id)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_creation() {
        let column = Column::new(ColumnId::from("todo"), "TODO".to_string());
        assert!(column.is_empty());
        assert_eq!(column.len(), 0);
    }

    #[test]
    fn test_set_title() {
        let mut column = Column::new(ColumnId::from("todo"), "TODO".to_string());

        assert!(!column.set_title(""));
        assert_eq!(column.title, "TODO");

        assert!(column.set_title("Backlog"));
        assert_eq!(column.title, "Backlog");

        assert!(column.set_title(" Backlog "));
        assert_eq!(column.title, " Backlog ");
    }

    #[test]
    fn test_position_of() {
        let mut column = Column::new(ColumnId::from("todo"), "TODO".to_string());
        column.cases.push(CaseId::from("a"));
        column.cases.push(CaseId::from("b"));

        assert_eq!(column.position_of(&CaseId::from("b")), Some(1));
        assert_eq!(column.position_of(&CaseId::from("z")), None);
    }
}
