use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "COUNTRY_EXPLORER_LOG";

/// Initialize file logging when `COUNTRY_EXPLORER_LOG` names a path.
///
/// Nothing is written to the terminal: the TUI owns it. Each run gets its
/// own file, `{path}.{timestamp}.{pid}`. Verbosity comes from `RUST_LOG`
/// and defaults to `info`.
pub fn init_tracing() {
    let Ok(log_path) = std::env::var(LOG_ENV) else {
        return;
    };

    let unique_path = log_file_name(&log_path, std::process::id());
    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

fn log_file_name(base: &str, pid: u32) -> String {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("{}.{}.{}", base, timestamp, pid)
}

#[cfg(test)]
mod tests {
    use super::log_file_name;

    #[test]
    fn file_name_carries_pid() {
        let name = log_file_name("/tmp/explorer.log", 42);
        assert!(name.starts_with("/tmp/explorer.log."));
        assert!(name.ends_with(".42"));
    }
}
