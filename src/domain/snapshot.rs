use crate::domain::{case::Case, ids::ColumnId};
use crate::error::Result;
use serde::Serialize;

/// A column with its cases resolved, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnView {
    pub id: ColumnId,
    pub title: String,
    pub cases: Vec<Case>,
}

/// Read-only copy of the board handed to renderers after each mutation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardSnapshot {
    pub name: String,
    pub columns: Vec<ColumnView>,
    /// Column currently in rename mode
    pub renaming: Option<ColumnId>,
}

impl BoardSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn case_count(&self) -> usize {
        self.columns.iter().map(|col| col.cases.len()).sum()
    }
}
