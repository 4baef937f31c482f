//! Shipped levels must load without normalisation.

use std::fs;
use std::path::Path;

use tandem::map::{load_level, verify_level};
use tandem::PhysicsSettings;

#[test]
fn shipped_levels_verify_cleanly() {
    let settings = PhysicsSettings::default();
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("levels");
    let mut checked = 0;
    for entry in fs::read_dir(&dir).expect("levels directory") {
        let path = entry.expect("directory entry").path();
        if path.extension().is_none_or(|ext| ext != "txt") {
            continue;
        }
        let text = fs::read_to_string(&path).expect("level text");
        let report = verify_level(&text, settings.dimensions);
        assert!(report.is_ok(), "{}: {report}", path.display());
        let level = load_level(&path, &settings);
        assert_eq!(level.map.goal_doors().len(), 2);
        checked += 1;
    }
    assert!(checked > 0, "no levels found in {}", dir.display());
}
