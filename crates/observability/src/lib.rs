//! Process logging for registrar binaries.
//!
//! One call to [`init`] installs a `tracing` subscriber whose level comes
//! from `RUST_LOG` and whose line format (JSON for collectors, pretty for
//! terminals) comes from `REGISTRAR_LOG_FORMAT`. See [`LogFormat`].

/// Install the global subscriber using the environment-selected format.
///
/// Later calls leave the first subscriber in place.
pub fn init() {
    tracing::init();
}

pub mod tracing;

pub use tracing::{LogFormat, init_with_format};
