use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// reserved for the verdict.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(ProbeFormatter)
        .init();
}

/// Filter used when `RUST_LOG` is unset. `-v` already shows skipped lookups.
fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

type Paint = fn(ColoredString) -> ColoredString;

fn marker(level: &Level) -> (&'static str, Paint) {
    match *level {
        Level::ERROR => ("[-]", |s| s.red().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        _ => ("[ ]", |s| s.dimmed()),
    }
}

/// Prefixes each event with a level marker. Below `INFO` the emitting
/// module is shown too, so a `Down` verdict can be traced to its source.
pub struct ProbeFormatter;

impl<S, N> FormatEvent<S, N> for ProbeFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let (symbol, paint) = marker(meta.level());

        write!(writer, "{} ", paint(symbol.into()))?;
        if *meta.level() > Level::INFO {
            write!(writer, "{} ", format!("{}:", meta.target()).dimmed())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
