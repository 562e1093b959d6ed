//! Console logger setup

use crate::io::configuration::{DEBUG_LOG_FILTER, DEFAULT_LOG_FILTER};
use env_logger::Env;

/// Install the global logger
///
/// `RUST_LOG` takes precedence over the filter chosen by `debug`. Returns `false`
/// if a logger was already installed.
pub fn init_logging(debug: bool) -> bool {
    let filter = if debug {
        DEBUG_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    env_logger::Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp_secs()
        .try_init()
        .is_ok()
}
