use tracing_subscriber::{prelude::*, EnvFilter};

const SERVER_FILTER: &str = "case_study_service=info,tower_http=warn";
pub(crate) const STUDIO_FILTER: &str = "warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogProfile {
    Server,
    /// Quiet so log lines don't interleave with the interactive screen.
    Studio,
}

/// Installs the global subscriber. `RUST_LOG` overrides the profile's default filter.
pub fn init(profile: LogProfile) {
    let default = match profile {
        LogProfile::Server => SERVER_FILTER,
        LogProfile::Studio => STUDIO_FILTER,
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();

    if let Err(err) = result {
        eprintln!("logging already initialized: {err}");
    }
}
