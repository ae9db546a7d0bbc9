use crate::domain::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// Which column title, if any, is currently editable.
///
/// A single value means at most one column can be in rename mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "column", rename_all = "lowercase")]
pub enum RenameMode {
    #[default]
    Idle,
    Editing(ColumnId),
}

impl RenameMode {
    /// The column being edited, if any
    pub fn editing(&self) -> Option<&ColumnId> {
        match self {
            Self::Idle => None,
            Self::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self, column_id: &ColumnId) -> bool {
        self.editing() == Some(column_id)
    }

    /// Enters rename mode for `column_id`, abandoning any other edit
    pub fn begin(&mut self, column_id: ColumnId) {
        *self = Self::Editing(column_id);
    }

    /// Leaves rename mode
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }
}
