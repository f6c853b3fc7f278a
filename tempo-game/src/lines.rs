//! Row and column detection on the 3x3 board.
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeSet;

use crate::board::Marks;

/// Lines completed by a single mark; two at most (one row, one column).
pub type NewLines = SmallVec<[LineId; 2]>;

/// One of the six celebrated lines. Diagonals do not count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LineId {
    #[serde(rename = "row-0")]
    Row0,
    #[serde(rename = "row-1")]
    Row1,
    #[serde(rename = "row-2")]
    Row2,
    #[serde(rename = "col-0")]
    Col0,
    #[serde(rename = "col-1")]
    Col1,
    #[serde(rename = "col-2")]
    Col2,
}

impl LineId {
    pub const ALL: [Self; 6] = [
        Self::Row0,
        Self::Row1,
        Self::Row2,
        Self::Col0,
        Self::Col1,
        Self::Col2,
    ];

    #[must_use]
    pub const fn cells(self) -> [usize; 3] {
        match self {
            Self::Row0 => [0, 1, 2],
            Self::Row1 => [3, 4, 5],
            Self::Row2 => [6, 7, 8],
            Self::Col0 => [0, 3, 6],
            Self::Col1 => [1, 4, 7],
            Self::Col2 => [2, 5, 8],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Row0 => "row-0",
            Self::Row1 => "row-1",
            Self::Row2 => "row-2",
            Self::Col0 => "col-0",
            Self::Col1 => "col-1",
            Self::Col2 => "col-2",
        }
    }

    #[must_use]
    pub fn is_complete(self, marks: Marks) -> bool {
        self.cells().iter().all(|cell| marks.contains(*cell))
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record every line that `marks` satisfies and `completed` has not seen yet.
///
/// Returns only the newly recorded lines; a line already in `completed` is
/// never returned again.
pub fn record_new_lines(marks: Marks, completed: &mut BTreeSet<LineId>) -> NewLines {
    LineId::ALL
        .into_iter()
        .filter(|line| line.is_complete(marks))
        .filter(|line| completed.insert(*line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_row_completes_once() {
        let marks: Marks = [0, 1, 2].into_iter().collect();
        let mut completed = BTreeSet::new();
        assert_eq!(record_new_lines(marks, &mut completed).as_slice(), &[LineId::Row0]);
        assert!(record_new_lines(marks, &mut completed).is_empty());

        let more: Marks = [0, 1, 2, 4].into_iter().collect();
        assert!(record_new_lines(more, &mut completed).is_empty());
        assert_eq!(completed.len(), 1);
    }

    #[test]
    fn corner_mark_can_close_row_and_column() {
        let marks: Marks = [0, 1, 2, 3, 6].into_iter().collect();
        let mut completed = BTreeSet::new();
        let new = record_new_lines(marks, &mut completed);
        assert_eq!(new.as_slice(), &[LineId::Row0, LineId::Col0]);
    }

    #[test]
    fn diagonals_do_not_count() {
        let marks: Marks = [0, 4, 8].into_iter().collect();
        let mut completed = BTreeSet::new();
        assert!(record_new_lines(marks, &mut completed).is_empty());
    }

    #[test]
    fn ids_serialize_with_dashed_names() {
        assert_eq!(serde_json::to_string(&LineId::Col2).unwrap(), "\"col-2\"");
        assert_eq!(LineId::Row1.to_string(), "row-1");
    }
}
