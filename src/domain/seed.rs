//! Fixed sample content shown on first display.

use crate::domain::{
    case::Case,
    column::Column,
    ids::{CaseId, ColumnId},
};
use chrono::{DateTime, Duration, Utc};

/// Sample columns with their cases, in display order.
///
/// Case timestamps are set three days before `now`.
pub fn sample_columns(now: DateTime<Utc>) -> Vec<(Column, Vec<Case>)> {
    let stamp = now - Duration::days(3);
    let case = |id: &str, title: &str| Case::stamped(CaseId::from(id), title.to_string(), stamp);

    vec![
        (
            Column::new(ColumnId::from("todo"), "TODO".to_string()),
            vec![case("1", "Case 1"), case("2", "Case 2")],
        ),
        (
            Column::new(ColumnId::from("in-progress"), "IN PROGRESS".to_string()),
            vec![case("3", "Case 3")],
        ),
        (
            Column::new(ColumnId::from("done"), "DONE".to_string()),
            vec![case("4", "Case 4")],
        ),
        (
            Column::new(ColumnId::from("archived"), "ARCHIVED".to_string()),
            Vec::new(),
        ),
    ]
}
