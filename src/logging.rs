use tracing_subscriber::EnvFilter;

/// Crates whose events reach the log; everything else stays silent.
const CRATE_TARGETS: &[&str] = &[
    "cyclecast",
    "cyclecast_calendar",
    "cyclecast_cycle",
    "cyclecast_store",
];

/// Level for a `-v` count: none is warn, `-v` info, `-vv` debug, more is trace.
fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// `target=level` directives for every cyclecast crate.
fn default_directives(level: &str) -> String {
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the global subscriber, writing to stderr so stdout only carries
/// command output. A set `RUST_LOG` replaces the `-v` derived filter.
pub fn init(verbosity: u8) {
    let directives = default_directives(level_for(verbosity));
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
