use crate::config::BoardConfig;
use crate::domain::{
    case::Case,
    column::Column,
    ids::{CaseId, ColumnId, IdGenerator},
    notification::Notification,
    rename::RenameMode,
    seed,
    snapshot::{BoardSnapshot, ColumnView},
};
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info};

/// What a call to [`Board::move_case`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Same column, new position
    Reordered,
    /// Case now belongs to another column
    Transferred,
    /// Source and destination were identical
    Unchanged,
    /// Unknown column or stale source index; nothing was touched
    Ignored,
}

impl MoveOutcome {
    pub fn is_mutation(self) -> bool {
        matches!(self, Self::Reordered | Self::Transferred)
    }
}

/// Kanban board state.
///
/// Cases live in an arena keyed by id; each column owns the ordered list of
/// ids it contains. Every case id in the arena appears in exactly one column.
#[derive(Debug)]
pub struct Board {
    pub config: BoardConfig,
    columns: Vec<Column>,
    cases: HashMap<CaseId, Case>,
    rename: RenameMode,
    notifications: Vec<Notification>,
    ids: Box<dyn IdGenerator>,
}

impl Board {
    /// Creates an empty board using the id strategy from `config`
    pub fn new(config: BoardConfig) -> Self {
        let ids = config.id_strategy.generator();
        Self::with_id_generator(config, ids)
    }

    /// Creates an empty board with a custom id source
    pub fn with_id_generator(config: BoardConfig, ids: Box<dyn IdGenerator>) -> Self {
        Self {
            config,
            columns: Vec::new(),
            cases: HashMap::new(),
            rename: RenameMode::Idle,
            notifications: Vec::new(),
            ids,
        }
    }

    /// Creates a board from `config`, loading the sample content when
    /// `config.seed` is set
    pub fn from_config(config: BoardConfig) -> Self {
        let seed = config.seed;
        let mut board = Self::new(config);
        if seed {
            board.load_sample();
        }
        board
    }

    /// Board with default configuration and the sample content
    pub fn seeded() -> Self {
        Self::from_config(BoardConfig::default())
    }

    fn load_sample(&mut self) {
        for (mut column, cases) in seed::sample_columns(Utc::now()) {
            for case in cases {
                column.cases.push(case.id.clone());
                self.cases.insert(case.id.clone(), case);
            }
            self.columns.push(column);
        }
    }

    fn column_index(&self, column_id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|col| &col.id == column_id)
    }

    fn fresh_column_id(&mut self) -> ColumnId {
        loop {
            let id = ColumnId::from(self.ids.generate());
            if self.column_index(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_case_id(&mut self) -> CaseId {
        loop {
            let id = CaseId::from(self.ids.generate());
            if !self.cases.contains_key(&id) {
                return id;
            }
        }
    }

    /// Appends an empty column and puts it into rename mode
    pub fn add_column(&mut self) -> ColumnId {
        let id = self.fresh_column_id();
        let title = self.config.default_column_title.clone();

        self.columns.push(Column::new(id.clone(), title.clone()));
        self.rename.begin(id.clone());

        info!(column_id = %id, "Column added");
        self.notifications.push(Notification::ColumnAdded {
            column_id: id.clone(),
            title,
        });
        id
    }

    /// Puts `column_id` into rename mode, replacing any edit in progress
    pub fn begin_rename(&mut self, column_id: &ColumnId) -> bool {
        if self.column_index(column_id).is_none() {
            debug!(column_id = %column_id, "Rename requested for unknown column");
            return false;
        }
        self.rename.begin(column_id.clone());
        true
    }

    /// Leaves rename mode without touching any title
    pub fn cancel_rename(&mut self) {
        self.rename.finish();
    }

    /// Commits a rename. An empty title keeps the current one. Rename mode is
    /// always left, even for unknown ids. Returns whether a title changed.
    pub fn rename_column(&mut self, column_id: &ColumnId, new_title: &str) -> bool {
        self.rename.finish();

        let Some(index) = self.column_index(column_id) else {
            debug!(column_id = %column_id, "Rename of unknown column ignored");
            return false;
        };

        let column = &mut self.columns[index];
        if !column.set_title(new_title) {
            return false;
        }

        info!(column_id = %column_id, title = %column.title, "Column renamed");
        self.notifications.push(Notification::ColumnRenamed {
            column_id: column_id.clone(),
            title: column.title.clone(),
        });
        true
    }

    /// Removes a column together with all of its cases
    pub fn delete_column(&mut self, column_id: &ColumnId) -> bool {
        let Some(index) = self.column_index(column_id) else {
            debug!(column_id = %column_id, "Delete of unknown column ignored");
            return false;
        };

        let column = self.columns.remove(index);
        for case_id in &column.cases {
            self.cases.remove(case_id);
        }
        if self.rename.is_editing(column_id) {
            self.rename.finish();
        }

        let cases_removed = column.len();
        info!(column_id = %column_id, cases_removed, "Column deleted");
        self.notifications.push(Notification::ColumnDeleted {
            column_id: column.id,
            title: column.title,
            cases_removed,
        });
        true
    }

    /// Creates a case at the front of `column_id` (newest first)
    pub fn add_case(&mut self, column_id: &ColumnId) -> Option<CaseId> {
        let Some(index) = self.column_index(column_id) else {
            debug!(column_id = %column_id, "Add case to unknown column ignored");
            return None;
        };

        let id = self.fresh_case_id();
        let case = Case::new(id.clone(), self.config.default_case_title.clone());
        self.cases.insert(id.clone(), case);

        let column = &mut self.columns[index];
        column.cases.insert(0, id.clone());

        info!(case_id = %id, column_id = %column_id, "Case created");
        self.notifications.push(Notification::CaseCreated {
            case_id: id.clone(),
            column_id: column_id.clone(),
            column_title: column.title.clone(),
        });
        Some(id)
    }

    /// Moves the case at `source_position` of `source_column` to
    /// `dest_position` of `dest_column`.
    ///
    /// Within one column the destination index refers to the sequence after
    /// removal. Across columns it refers to the destination as it was. A
    /// destination past the end appends; if that lands a case back on its own
    /// slot the move is `Unchanged`.
    pub fn move_case(
        &mut self,
        source_column: &ColumnId,
        source_position: usize,
        dest_column: &ColumnId,
        dest_position: usize,
    ) -> MoveOutcome {
        let (Some(src), Some(dst)) = (
            self.column_index(source_column),
            self.column_index(dest_column),
        ) else {
            debug!(
                source = %source_column,
                destination = %dest_column,
                "Move between unknown columns ignored"
            );
            return MoveOutcome::Ignored;
        };

        if source_position >= self.columns[src].len() {
            debug!(
                source = %source_column,
                source_position,
                len = self.columns[src].len(),
                "Move from stale position ignored"
            );
            return MoveOutcome::Ignored;
        }

        // Within one column the case is removed first, leaving len - 1 slots.
        let at = if src == dst {
            dest_position.min(self.columns[src].len() - 1)
        } else {
            dest_position.min(self.columns[dst].len())
        };
        if src == dst && at == source_position {
            return MoveOutcome::Unchanged;
        }

        let case_id = self.columns[src].cases.remove(source_position);
        self.columns[dst].cases.insert(at, case_id.clone());

        let case_title = match self.cases.get_mut(&case_id) {
            Some(case) => {
                case.touch();
                case.title.clone()
            }
            None => String::new(),
        };

        if src == dst {
            debug!(case_id = %case_id, from = source_position, to = at, "Case reordered");
            return MoveOutcome::Reordered;
        }

        let to_title = self.columns[dst].title.clone();
        info!(
            case_id = %case_id,
            from = %source_column,
            to = %dest_column,
            position = at,
            "Case moved"
        );
        self.notifications.push(Notification::CaseMoved {
            case_id,
            case_title,
            from_column: source_column.clone(),
            to_column: dest_column.clone(),
            to_title,
        });
        MoveOutcome::Transferred
    }

    /// Columns in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == column_id)
    }

    pub fn case(&self, case_id: &CaseId) -> Option<&Case> {
        self.cases.get(case_id)
    }

    /// Cases of a column in display order
    pub fn cases_in(&self, column_id: &ColumnId) -> Vec<&Case> {
        self.column(column_id)
            .map(|col| col.cases.iter().filter_map(|id| self.cases.get(id)).collect())
            .unwrap_or_default()
    }

    /// Total number of cases on the board
    pub fn case_count(&self) -> usize {
        self.cases.len()
    }

    /// Column and index currently holding `case_id`
    pub fn locate_case(&self, case_id: &CaseId) -> Option<(&ColumnId, usize)> {
        self.columns
            .iter()
            .find_map(|col| col.position_of(case_id).map(|pos| (&col.id, pos)))
    }

    pub fn rename_mode(&self) -> &RenameMode {
        &self.rename
    }

    /// Hands over pending notifications, oldest first
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Read-only view of the board for rendering
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            name: self.config.name.clone(),
            columns: self
                .columns
                .iter()
                .map(|col| ColumnView {
                    id: col.id.clone(),
                    title: col.title.clone(),
                    cases: col
                        .cases
                        .iter()
                        .filter_map(|id| self.cases.get(id).cloned())
                        .collect(),
                })
                .collect(),
            renaming: self.rename.editing().cloned(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::seeded()
    }
}
