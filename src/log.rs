use std::io::Write;

use ::log::LevelFilter;
use env_logger::Builder;

const LEVELS: [LevelFilter; 6] = [
    LevelFilter::Off,
    LevelFilter::Error,
    LevelFilter::Warn,
    LevelFilter::Info,
    LevelFilter::Debug,
    LevelFilter::Trace,
];

/// Installs a logger writing to stderr. Each message is prefixed with `c ` so that it reads as
/// comment line of an instance file.
pub fn build_logger_for_level(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "c {:<5} {}", record.level(), record.args()))
        .init();
}

/// Same as [`build_logger_for_level`] where each `verbosity` step raises `base` by one level
pub fn build_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    build_logger_for_level(level_for_verbosity(base, verbosity));
}

fn level_for_verbosity(base: LevelFilter, verbosity: usize) -> LevelFilter {
    let base_index = LEVELS.iter().position(|&l| l == base).unwrap_or(0);
    LEVELS[(base_index + verbosity).min(LEVELS.len() - 1)]
}
