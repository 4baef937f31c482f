//! Logger bootstrap shared by the CLI and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter for the CLI: debug output (respawns, grid normalisation)
/// when `verbose`, otherwise level loads, completion and warnings.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs `env_logger` with [`default_level`]. `RUST_LOG` overrides it.
pub fn init(verbose: bool) {
    init_with(default_level(verbose));
}

/// Installs `env_logger` filtering at `level` unless `RUST_LOG` is set.
///
/// A second call is a no-op, so tests may initialise freely.
pub fn init_with(level: LevelFilter) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder.format_timestamp_millis().format_module_path(false);
    if builder.try_init().is_err() {
        log::trace!("logger already initialised");
    }
}
