//! Level fixtures built from literal rows.

use tandem::settings::LevelDimensions;
use tandem::{LoadedLevel, PhysicsSettings, Simulation};

/// Settings sized to fit `rows` exactly.
///
/// # Examples
/// ```
/// use test_utils::levels::settings_for;
/// let settings = settings_for(&["....", "####"]);
/// assert_eq!(settings.dimensions.columns, 4);
/// assert_eq!(settings.dimensions.rows, 2);
/// ```
pub fn settings_for(rows: &[&str]) -> PhysicsSettings {
    PhysicsSettings {
        dimensions: LevelDimensions {
            columns: rows.iter().map(|r| r.chars().count()).max().unwrap_or(0),
            rows: rows.len(),
        },
        ..PhysicsSettings::default()
    }
}

/// Loads `rows` with settings sized to fit them.
pub fn level(rows: &[&str]) -> (LoadedLevel, PhysicsSettings) {
    let settings = settings_for(rows);
    (LoadedLevel::from_text(&rows.join("\n"), &settings), settings)
}

/// A red and blue simulation on `rows`.
pub fn simulation(rows: &[&str]) -> Simulation {
    let (loaded, settings) = level(rows);
    Simulation::new(loaded, settings)
}

/// Flat floor with the red body on the left and blue on the right.
pub const FLAT_ROOM: [&str; 6] = [
    "............",
    "............",
    "............",
    "............",
    "..1......2..",
    "############",
];

/// Red spawn above a hazard pit; blue stands on plain floor.
pub const HAZARD_PIT: [&str; 6] = [
    "............",
    "............",
    "..1.........",
    "............",
    ".........2..",
    "##XX########",
];

/// Red stands on its own zone; blue straddles a red zone beside its own.
pub const COLOR_FLOORS: [&str; 6] = [
    "............",
    "............",
    "............",
    "............",
    "..1......2..",
    "#RRR#BBB#RBB",
];

/// Each body spawns directly above its own goal door.
pub const GOAL_DOORS: [&str; 6] = [
    "............",
    "............",
    "............",
    "..1......2..",
    "..G......H..",
    "############",
];

/// A floorless room: bodies fall out of the playfield.
pub const BOTTOMLESS: [&str; 6] = [
    "............",
    "..1......2..",
    "............",
    "............",
    "............",
    "............",
];

/// A one-tile hill on the floor: `/` rising into `\`.
pub const RAMP_HILL: [&str; 6] = [
    "................",
    "................",
    "................",
    "................",
    ".1....../\\....2.",
    "################",
];

/// Two ramps under a solid ledge too low to stand up beneath.
pub const LOW_RAMP_CEILING: [&str; 6] = [
    "................",
    "................",
    ".......###......",
    "................",
    ".1......//....2.",
    "################",
];
