use crate::event::Event;
use std::io;

/// Produces a stream of generated events.
pub trait EventSource {
    fn next_event(&mut self) -> Event;
}

/// Accepts a single event for delivery to one output target.
pub trait EventSink {
    /// Stable label used in delivery results and operator logs.
    fn name(&self) -> &'static str;
    fn emit(&mut self, event: &Event) -> io::Result<()>;
}
