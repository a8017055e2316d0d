use std::fmt;
use std::io;

use chrono::Local;
use tracing::subscriber::DefaultGuard;
use tracing::{warn, Event, Subscriber};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use crate::config::LogConfig;

pub const LOG_FILE_PREFIX: &str = "clickup_agent";
const MAX_LOG_FILES: usize = 7;

/// `2024-05-01 12:00:00,123 - clickup_agent_rs::dispatch - INFO - message`
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            meta.target(),
            meta.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Keeps the configured subscriber installed for as long as it is alive.
pub struct LogHandle {
    _guard: DefaultGuard,
}

/// Console gets `console_level` and above on stderr; the rotating file under
/// `dir` gets whatever `file_filter` allows. Falls back to console only when
/// the file cannot be opened.
pub fn init(cfg: &LogConfig) -> LogHandle {
    let file_filter = EnvFilter::try_new(&cfg.file_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix("log")
        .max_log_files(MAX_LOG_FILES)
        .build(&cfg.dir);

    let (file_layer, file_error) = match appender {
        Ok(appender) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .event_format(LineFormat)
                    .with_filter(file_filter),
            ),
            None,
        ),
        Err(err) => (None, Some(err)),
    };

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .event_format(LineFormat)
        .with_filter(cfg.console_level);

    let subscriber = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer);
    let guard = tracing::subscriber::set_default(subscriber);

    if let Some(err) = file_error {
        warn!(dir = %cfg.dir.display(), error = %err, "file logging disabled");
    }

    LogHandle { _guard: guard }
}
