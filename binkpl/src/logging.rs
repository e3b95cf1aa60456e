//! Diagnostic logging on stderr.
//!
//! `RUST_LOG` wins when set. Otherwise `-v`/`-q` pick the level, falling
//! back to `KPL_LOG` and then `warn`.

use std::env;

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Verbosity requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

pub fn init(verbosity: Verbosity) {
    let filter = if env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        let level = match verbosity {
            Verbosity::Verbose => Level::DEBUG,
            Verbosity::Quiet => Level::ERROR,
            Verbosity::Normal => {
                let level_str = env::var("KPL_LOG").unwrap_or_else(|_| "warn".to_string());
                parse_level(&level_str)
            }
        };
        EnvFilter::new(format!("kpl={},libkpl={}", level, level))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}

fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to WARN. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::WARN
        }
    }
}
