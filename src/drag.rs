//! Translation of completed drag gestures into board moves.
//!
//! The gesture library reports where a dragged case started and where it
//! was dropped. Containers are identified by droppable id, which is the
//! column id.

use crate::domain::{
    board::{Board, MoveOutcome},
    ids::ColumnId,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A position inside a droppable container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragLocation {
    pub droppable_id: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(droppable_id: impl Into<String>, index: usize) -> Self {
        Self {
            droppable_id: droppable_id.into(),
            index,
        }
    }
}

/// Result of a finished drag gesture. No destination means the gesture was
/// aborted (e.g., dropped outside every column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragOutcome {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable_id: Option<String>,
    pub source: DragLocation,
    #[serde(default)]
    pub destination: Option<DragLocation>,
}

impl DragOutcome {
    pub fn dropped(source: DragLocation, destination: DragLocation) -> Self {
        Self {
            draggable_id: None,
            source,
            destination: Some(destination),
        }
    }

    pub fn aborted(source: DragLocation) -> Self {
        Self {
            draggable_id: None,
            source,
            destination: None,
        }
    }

    /// Classifies the outcome without touching any board
    pub fn resolve(&self) -> DragResolution {
        let Some(destination) = &self.destination else {
            return DragResolution::Aborted;
        };

        if destination == &self.source {
            return DragResolution::Unchanged;
        }

        DragResolution::Move(MoveInstruction {
            source_column: ColumnId::from(self.source.droppable_id.as_str()),
            source_position: self.source.index,
            dest_column: ColumnId::from(destination.droppable_id.as_str()),
            dest_position: destination.index,
        })
    }
}

/// Arguments for [`Board::move_case`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveInstruction {
    pub source_column: ColumnId,
    pub source_position: usize,
    pub dest_column: ColumnId,
    pub dest_position: usize,
}

impl MoveInstruction {
    pub fn apply(&self, board: &mut Board) -> MoveOutcome {
        board.move_case(
            &self.source_column,
            self.source_position,
            &self.dest_column,
            self.dest_position,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragResolution {
    Aborted,
    Unchanged,
    Move(MoveInstruction),
}

/// What handling a drag did to the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    Aborted,
    Unchanged,
    Applied(MoveOutcome),
}

impl DragEffect {
    /// Whether the board changed and should be re-rendered
    pub fn changed_board(self) -> bool {
        matches!(self, Self::Applied(outcome) if outcome.is_mutation())
    }
}

/// Resolves a finished drag and applies it to `board`.
///
/// Aborted gestures and drops onto the starting slot never reach
/// [`Board::move_case`].
pub fn handle_drag_end(board: &mut Board, outcome: &DragOutcome) -> DragEffect {
    match outcome.resolve() {
        DragResolution::Aborted => {
            debug!(source = %outcome.source.droppable_id, "Drag aborted");
            DragEffect::Aborted
        }
        DragResolution::Unchanged => {
            debug!(source = %outcome.source.droppable_id, "Drag dropped in place");
            DragEffect::Unchanged
        }
        DragResolution::Move(instruction) => DragEffect::Applied(instruction.apply(board)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_aborted() {
        let outcome = DragOutcome::aborted(DragLocation::new("todo", 0));
        assert_eq!(outcome.resolve(), DragResolution::Aborted);
    }

    #[test]
    fn test_resolve_same_slot() {
        let outcome = DragOutcome::dropped(
            DragLocation::new("todo", 1),
            DragLocation::new("todo", 1),
        );
        assert_eq!(outcome.resolve(), DragResolution::Unchanged);
    }

    #[test]
    fn test_resolve_same_index_other_column_is_a_move() {
        let outcome = DragOutcome::dropped(
            DragLocation::new("todo", 0),
            DragLocation::new("done", 0),
        );
        assert_eq!(
            outcome.resolve(),
            DragResolution::Move(MoveInstruction {
                source_column: ColumnId::from("todo"),
                source_position: 0,
                dest_column: ColumnId::from("done"),
                dest_position: 0,
            })
        );
    }

    #[test]
    fn test_handle_drag_end_applies_move() {
        let mut board = Board::seeded();
        let outcome = DragOutcome::dropped(
            DragLocation::new("todo", 0),
            DragLocation::new("done", 1),
        );

        let effect = handle_drag_end(&mut board, &outcome);
        assert_eq!(effect, DragEffect::Applied(MoveOutcome::Transferred));
        assert!(effect.changed_board());

        let done: Vec<&str> = board
            .cases_in(&ColumnId::from("done"))
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(done, vec!["Case 4", "Case 1"]);
    }

    #[test]
    fn test_handle_drag_end_in_place_emits_nothing() {
        let mut board = Board::seeded();
        let outcome = DragOutcome::dropped(
            DragLocation::new("todo", 0),
            DragLocation::new("todo", 0),
        );

        let effect = handle_drag_end(&mut board, &outcome);
        assert_eq!(effect, DragEffect::Unchanged);
        assert!(!effect.changed_board());
        assert!(board.drain_notifications().is_empty());
    }

    #[test]
    fn test_drop_past_end_of_own_column_changes_nothing() {
        let mut board = Board::seeded();
        let before = board.snapshot();
        let outcome = DragOutcome::dropped(
            DragLocation::new("todo", 1),
            DragLocation::new("todo", 99),
        );

        let effect = handle_drag_end(&mut board, &outcome);
        assert_eq!(effect, DragEffect::Applied(MoveOutcome::Unchanged));
        assert!(!effect.changed_board());
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_deserialize_gesture_payload() {
        let json = r#"{
            "draggableId": "3",
            "source": { "droppableId": "in-progress", "index": 0 },
            "destination": { "droppableId": "done", "index": 0 }
        }"#;
        let outcome: DragOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.draggable_id.as_deref(), Some("3"));
        assert!(matches!(outcome.resolve(), DragResolution::Move(_)));

        let json = r#"{ "source": { "droppableId": "todo", "index": 0 }, "destination": null }"#;
        let outcome: DragOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome.resolve(), DragResolution::Aborted);
    }
}
