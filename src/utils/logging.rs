//! Logging utilities for the application
//!
//! Installs a `tracing_subscriber` registry with an `EnvFilter` and a compact
//! formatter. `RUST_LOG` takes precedence over the default directives.
//! The `log` records emitted by error constructors are picked up by the same
//! subscriber.

use std::io::IsTerminal;

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Directives used when `RUST_LOG` is unset.
///
/// The websocket stack logs every frame at debug level, so it is held at warn.
pub const DEFAULT_LOG_DIRECTIVES: &str = "info,tungstenite=warn,tokio_tungstenite=warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
	pub default_directives: String,
	pub ansi: bool,
}

impl Default for LogSettings {
	fn default() -> Self {
		Self {
			default_directives: DEFAULT_LOG_DIRECTIVES.to_string(),
			ansi: false,
		}
	}
}

/// Setup logging to stdout, with colours when stdout is a terminal
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	let settings = LogSettings {
		ansi: std::io::stdout().is_terminal(),
		..Default::default()
	};
	setup_logging_with(&settings, std::io::stdout)
}

/// Setup logging with a custom writer and the default settings
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	setup_logging_with(&LogSettings::default(), writer)
}

pub fn setup_logging_with<W>(
	settings: &LogSettings,
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(build_filter(&settings.default_directives))
		.with(
			fmt::layer().with_writer(writer).event_format(
				fmt::format()
					.with_level(true)
					.with_target(true)
					.with_thread_ids(false)
					.with_thread_names(false)
					.with_ansi(settings.ansi)
					.compact(),
			),
		)
		.try_init()?;
	Ok(())
}

/// Filter from `RUST_LOG`, or from `default_directives` when unset or invalid.
pub fn build_filter(default_directives: &str) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}
