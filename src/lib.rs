pub mod errors;
pub mod config;
pub mod country;
pub mod feed;
pub mod filter;
pub mod messages;
pub mod pipeline;

pub use config::RunConfig;
pub use country::{country_name, CountryCode};
pub use errors::{CodeProblem, FilterError, Result};
pub use feed::{load_records, save_records};
pub use filter::{
    filter_admin, filter_basic, filter_combined, filter_geo, filter_records, matches_admin,
    matches_geo, FilterMode,
};
pub use messages::{Locale, Messages};
pub use pipeline::{run_advanced, run_basic, Summary};

/// Install the stderr log subscriber used by both binaries.
/// `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
