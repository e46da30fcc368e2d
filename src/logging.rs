use std::path::Path;

use log::LevelFilter;
use log4rs_dynamic_filters::DynamicLevelFilter;

use crate::error::{Error, Result};

/// Default location of the logging configuration.
pub const LOG_CONFIG_PATH: &str = "log4rs.yaml";

/// Logging target used by this crate.
pub const LOG_TARGET: &str = "panchayat";

/// Initialise logging from a log4rs configuration file.
/// The file may use dynamic level filters, which can then be
/// adjusted at runtime with [`set_level`].
pub fn init(path: impl AsRef<Path>) -> Result<()> {
    log4rs::init_file(path, log4rs_dynamic_filters::default_deserializers())
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Change the level of a dynamic filter at runtime.
pub fn set_level(filter_name: &str, level: LevelFilter) {
    DynamicLevelFilter::set(filter_name, level);
}
