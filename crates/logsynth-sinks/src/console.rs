use chrono::{DateTime, Local};
use logsynth_core::event::Event;
use logsynth_core::traits::EventSink;
use std::io::{self, Write};

/// Human-readable sink: `[<ISO-8601 local timestamp>] <LEVEL>: <message>`.
///
/// Generic over the writer so tests can capture output; production code
/// uses [`ConsoleSink::stdout`].
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

/// Renders the console line for an event.
pub fn format_line(event: &Event) -> String {
    let stamp = DateTime::from_timestamp_millis(event.timestamp)
        .map(|utc| {
            utc.with_timezone(&Local)
                .format("%Y-%m-%dT%H:%M:%S%.3f")
                .to_string()
        })
        .unwrap_or_else(|| event.timestamp.to_string());
    format!("[{stamp}] {}: {}", event.level, event.message)
}

impl<W: Write> EventSink for ConsoleSink<W> {
    fn name(&self) -> &'static str {
        "console"
    }

    fn emit(&mut self, event: &Event) -> io::Result<()> {
        writeln!(self.out, "{}", format_line(event))?;
        self.out.flush()
    }
}
