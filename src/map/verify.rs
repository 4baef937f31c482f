//! Authoring checks for level text.
//!
//! Loading is forgiving, so a malformed level still plays. [`verify_level`]
//! reports what loading would have to paper over, for use by level authors
//! before shipping a level.

use std::fmt;

use crate::map::classify::SOLID_SYMBOL;
use crate::map::loader::{BLUE_SPAWN_SYMBOL, RED_SPAWN_SYMBOL};
use crate::settings::LevelDimensions;

/// A marker every playable level needs at least once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequiredMarker {
    /// `1`
    RedSpawn,
    /// `2`
    BlueSpawn,
    /// `G`
    RedGoal,
    /// `H`
    BlueGoal,
}

impl RequiredMarker {
    /// Every required marker in report order.
    pub const ALL: [Self; 4] = [Self::RedSpawn, Self::BlueSpawn, Self::RedGoal, Self::BlueGoal];

    /// Grid symbol of the marker.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::RedSpawn => RED_SPAWN_SYMBOL,
            Self::BlueSpawn => BLUE_SPAWN_SYMBOL,
            Self::RedGoal => 'G',
            Self::BlueGoal => 'H',
        }
    }
}

/// Symbol tallies over the whole level text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SymbolCounts {
    /// Red spawn markers.
    pub red_spawns: usize,
    /// Blue spawn markers.
    pub blue_spawns: usize,
    /// Red goal doors.
    pub red_goals: usize,
    /// Blue goal doors.
    pub blue_goals: usize,
    /// Plain solid blocks.
    pub solids: usize,
    /// Hazards.
    pub hazards: usize,
}

impl SymbolCounts {
    fn count(&mut self, symbol: char) {
        match symbol {
            RED_SPAWN_SYMBOL => self.red_spawns += 1,
            BLUE_SPAWN_SYMBOL => self.blue_spawns += 1,
            'G' => self.red_goals += 1,
            'H' => self.blue_goals += 1,
            SOLID_SYMBOL => self.solids += 1,
            'X' => self.hazards += 1,
            _ => {}
        }
    }

    /// Occurrences of `marker`.
    #[must_use]
    pub const fn of(&self, marker: RequiredMarker) -> usize {
        match marker {
            RequiredMarker::RedSpawn => self.red_spawns,
            RequiredMarker::BlueSpawn => self.blue_spawns,
            RequiredMarker::RedGoal => self.red_goals,
            RequiredMarker::BlueGoal => self.blue_goals,
        }
    }
}

/// Outcome of checking one level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LevelReport {
    /// Lines found in the text.
    pub rows: usize,
    /// Rows expected by the configured dimensions.
    pub expected_rows: usize,
    /// `(row, width)` of each row whose width differs from the expected one.
    pub ragged_rows: Vec<(usize, usize)>,
    /// Columns expected by the configured dimensions.
    pub expected_columns: usize,
    /// Symbol tallies.
    pub counts: SymbolCounts,
    /// Required markers that never appear.
    pub missing: Vec<RequiredMarker>,
}

impl LevelReport {
    /// Whether the level needs no normalisation and has every marker.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.rows == self.expected_rows && self.ragged_rows.is_empty() && self.missing.is_empty()
    }
}

impl fmt::Display for LevelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows != self.expected_rows {
            writeln!(f, "expected {} rows, found {}", self.expected_rows, self.rows)?;
        }
        for (row, width) in &self.ragged_rows {
            writeln!(
                f,
                "row {row}: {width} columns (expected {})",
                self.expected_columns
            )?;
        }
        for marker in &self.missing {
            writeln!(f, "missing {marker:?} marker `{}`", marker.symbol())?;
        }
        let c = &self.counts;
        write!(
            f,
            "spawns {}/{}, goals {}/{}, solids {}, hazards {}",
            c.red_spawns, c.blue_spawns, c.red_goals, c.blue_goals, c.solids, c.hazards
        )
    }
}

/// Checks `text` against `dimensions` without normalising it.
#[must_use]
pub fn verify_level(text: &str, dimensions: LevelDimensions) -> LevelReport {
    let mut report = LevelReport {
        expected_rows: dimensions.rows,
        expected_columns: dimensions.columns,
        ..LevelReport::default()
    };
    for (row, line) in text.lines().enumerate() {
        report.rows += 1;
        let width = line.chars().count();
        if width != dimensions.columns {
            report.ragged_rows.push((row, width));
        }
        line.chars().for_each(|symbol| report.counts.count(symbol));
    }
    report.missing = RequiredMarker::ALL
        .into_iter()
        .filter(|&marker| report.counts.of(marker) == 0)
        .collect();
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIMS: LevelDimensions = LevelDimensions {
        columns: 4,
        rows: 3,
    };

    #[test]
    fn complete_level_passes() {
        let report = verify_level("1..2\nG..H\n#XX#\n", DIMS);
        assert!(report.is_ok(), "{report}");
        assert_eq!(report.counts.hazards, 2);
        assert_eq!(report.counts.solids, 2);
    }

    #[test]
    fn shape_and_marker_problems_are_listed() {
        let report = verify_level("1..\n####", DIMS);
        assert!(!report.is_ok());
        assert_eq!(report.rows, 2);
        assert_eq!(report.ragged_rows, vec![(0, 3)]);
        assert_eq!(
            report.missing,
            vec![
                RequiredMarker::BlueSpawn,
                RequiredMarker::RedGoal,
                RequiredMarker::BlueGoal
            ]
        );
        let text = report.to_string();
        assert!(text.contains("expected 3 rows, found 2"));
        assert!(text.contains("missing RedGoal marker `G`"));
    }
}
