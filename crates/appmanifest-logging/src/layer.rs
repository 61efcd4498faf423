//! Tracing layer that writes styled lines to the console

use crate::reload::console_filter;
use crate::{LogLevel, LoggingConfig, ReloadHandle};
use colored::Colorize;
use std::io::{self, Write};
use tracing::field::{Field, Visit};
use tracing::subscriber::NoSubscriber;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Target used by [`log`]; events on it are rendered without level or target.
pub const CONSOLE_TARGET: &str = "appmanifest::console";

/// Tracing layer that renders events as `[prefix] ...` lines
pub struct ConsoleLayer<W = fn() -> io::Stderr> {
    prefix: String,
    styled: bool,
    make_writer: W,
}

impl ConsoleLayer {
    /// Create a layer writing to stderr
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            styled: config.styled,
            make_writer: io::stderr,
        }
    }
}

impl<W> ConsoleLayer<W> {
    /// Replace the output writer
    pub fn with_writer<W2>(self, make_writer: W2) -> ConsoleLayer<W2>
    where
        W2: for<'w> MakeWriter<'w> + 'static,
    {
        ConsoleLayer {
            prefix: self.prefix,
            styled: self.styled,
            make_writer,
        }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl<S, W> Layer<S> for ConsoleLayer<W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.message.unwrap_or_default();

        let line = if metadata.target() == CONSOLE_TARGET {
            format_console_line(&self.prefix, &message, self.styled)
        } else {
            format_event_line(
                &self.prefix,
                Self::convert_level(metadata.level()),
                metadata.target(),
                &message,
                self.styled,
            )
        };

        // Console output is best effort
        let mut writer = self.make_writer.make_writer();
        let _ = writeln!(writer, "{line}");
    }
}

/// Visitor to extract the message field from tracing events
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(format!("{:?}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" || self.message.is_none() {
            self.message = Some(value.to_string());
        }
    }
}

/// Render a [`log`] line: `[prefix] message`.
pub fn format_console_line(prefix: &str, message: &str, styled: bool) -> String {
    let tag = format!("[{prefix}]");
    if styled {
        format!("{} {}", tag.bold().cyan(), message)
    } else {
        format!("{tag} {message}")
    }
}

/// Render a regular event: `[prefix] LEVEL target: message`.
pub fn format_event_line(
    prefix: &str,
    level: LogLevel,
    target: &str,
    message: &str,
    styled: bool,
) -> String {
    let tag = format!("[{prefix}]");
    let level_text = format!("{:>5}", level.to_string());
    if !styled {
        return format!("{tag} {level_text} {target}: {message}");
    }

    let level_text = match level {
        LogLevel::Error => level_text.red().bold(),
        LogLevel::Warn => level_text.yellow().bold(),
        LogLevel::Info => level_text.green(),
        LogLevel::Debug => level_text.blue(),
        LogLevel::Trace | LogLevel::Off => level_text.dimmed(),
    };
    format!(
        "{} {} {}: {}",
        tag.bold().cyan(),
        level_text,
        target.dimmed(),
        message
    )
}

/// Write a stylized, prefixed line to the diagnostic console.
///
/// Goes through the installed subscriber when there is one, so the line
/// uses its prefix and writer. The console target is never filtered by
/// level. Without a subscriber the line is written straight to stderr using
/// the default settings.
pub fn log(message: &str) {
    let installed = tracing::dispatcher::get_default(|dispatch| !dispatch.is::<NoSubscriber>());
    if installed {
        tracing::info!(target: CONSOLE_TARGET, "{}", message);
    } else {
        let config = LoggingConfig::default();
        eprintln!(
            "{}",
            format_console_line(&config.prefix, message, config.styled)
        );
    }
}

/// Install the console layer as the global subscriber.
///
/// The level applies to every target except [`CONSOLE_TARGET`] and is
/// reloadable through [`ReloadHandle::global`]. Calling this more than once
/// leaves the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::reload;

    let parsed = config.log_level();
    let level = parsed.as_ref().copied().unwrap_or(LogLevel::Info);

    let (filter, handle) = reload::Layer::new(console_filter(level));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(config));

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        ReloadHandle::global().set_handle(handle, level);
        if let Err(err) = parsed {
            tracing::warn!("{}, falling back to info", err);
        }
    }
}
