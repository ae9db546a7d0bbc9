//! # Caseboard Core
//!
//! Board state model for a kanban board of cases grouped into columns.
//!
//! The [`Board`] owns all columns and cases and exposes the mutations a UI
//! triggers: adding, renaming and deleting columns, adding cases, and moving
//! cases. Finished drag gestures go through [`drag::handle_drag_end`], which
//! turns them into [`Board::move_case`] calls. Renderers read a
//! [`BoardSnapshot`] after each mutation and drain [`Notification`]s for
//! toasts.

pub mod config;
pub mod domain;
pub mod drag;
pub mod error;

// Re-export commonly used types
pub use config::{BoardConfig, IdStrategy, Theme};
pub use domain::{
    board::{Board, MoveOutcome},
    case::Case,
    column::Column,
    ids::{CaseId, ColumnId, IdGenerator},
    notification::Notification,
    rename::RenameMode,
    snapshot::BoardSnapshot,
};
pub use drag::{handle_drag_end, DragEffect, DragLocation, DragOutcome};
pub use error::{BoardError, Result};
