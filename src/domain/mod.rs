pub mod board;
pub mod case;
pub mod column;
pub mod ids;
pub mod notification;
pub mod rename;
pub mod seed;
pub mod snapshot;

pub use board::{Board, MoveOutcome};
pub use case::Case;
pub use column::Column;
pub use ids::{CaseId, ColumnId, IdGenerator, SequentialIds, UuidGenerator};
pub use notification::Notification;
pub use rename::RenameMode;
pub use snapshot::{BoardSnapshot, ColumnView};
