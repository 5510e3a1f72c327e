//! Logging
//!
//! Records go to the in-app log pane and, when `LOG_DIR` is set, to a daily
//! rotating file. `RUST_LOG` overrides the configured level.

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn level_filter(level: &str) -> log::LevelFilter {
    level.parse().unwrap_or(log::LevelFilter::Info)
}

/// Install the global subscriber
pub fn init_logger(level: &str, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(tui_logger::tracing_subscriber_layer());

    match log_dir {
        Some(dir) => {
            let log_dir = Path::new(dir);
            fs::create_dir_all(log_dir)?;
            let app_log = RollingFileAppender::new(Rotation::DAILY, log_dir, "admin-console");
            let file_layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_writer(std::sync::Mutex::new(app_log))
                .with_filter(EnvFilter::new(level));
            subscriber.with(file_layer).try_init()?;
        }
        None => subscriber.try_init()?,
    }

    // Covers dependencies that still log through the `log` crate
    tui_logger::init_logger(level_filter(level)).ok();
    tui_logger::set_default_level(level_filter(level));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_falls_back_to_info() {
        assert_eq!(level_filter("debug"), log::LevelFilter::Debug);
        assert_eq!(level_filter("nonsense"), log::LevelFilter::Info);
    }
}
