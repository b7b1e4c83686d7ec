use crate::event::Event;
use crate::traits::EventSink;
use std::io;

/// Result of handing one event to a single sink.
#[derive(Debug)]
pub struct SinkOutcome {
    pub sink: &'static str,
    pub result: io::Result<()>,
}

/// Per-sink outcomes for one delivered event.
#[derive(Debug)]
pub struct DeliveryResult {
    pub outcomes: Vec<SinkOutcome>,
}

impl DeliveryResult {
    pub fn all_ok(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    /// Iterates over the sinks that failed for this event.
    pub fn failures(&self) -> impl Iterator<Item = (&'static str, &io::Error)> + '_ {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|err| (outcome.sink, err))
        })
    }
}

/// Delivers each event to every registered sink.
///
/// Constructed once at process start and handed to the emission loop;
/// the sinks own their underlying handles for the process lifetime.
pub struct SinkFanout {
    sinks: Vec<Box<dyn EventSink + Send>>,
}

impl SinkFanout {
    pub fn new(sinks: Vec<Box<dyn EventSink + Send>>) -> Self {
        Self { sinks }
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Hands the event to every sink; a failing sink never blocks or
    /// skips delivery to the others.
    pub fn deliver(&mut self, event: &Event) -> DeliveryResult {
        let outcomes = self
            .sinks
            .iter_mut()
            .map(|sink| SinkOutcome {
                sink: sink.name(),
                result: sink.emit(event),
            })
            .collect();
        DeliveryResult { outcomes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Level, StreamIdentity};
    use std::sync::{Arc, Mutex};

    struct RecordingSink {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl EventSink for RecordingSink {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn emit(&mut self, event: &Event) -> io::Result<()> {
            self.lines.lock().unwrap().push(event.message.clone());
            Ok(())
        }
    }

    struct FailingSink;

    impl EventSink for FailingSink {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn emit(&mut self, _event: &Event) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "target unwritable"))
        }
    }

    fn sample_event() -> Event {
        let identity = StreamIdentity {
            stream: "stream".to_string(),
            service: "svc".to_string(),
            source: "test".to_string(),
            host: "localhost".to_string(),
        };
        Event::assemble(1, "hello".to_string(), &identity, Level::Info)
    }

    #[test]
    fn failing_sink_does_not_block_others() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let mut fanout = SinkFanout::new(vec![
            Box::new(FailingSink),
            Box::new(RecordingSink { lines: lines.clone() }),
        ]);

        let result = fanout.deliver(&sample_event());

        assert!(!result.all_ok());
        let failed: Vec<&str> = result.failures().map(|(sink, _)| sink).collect();
        assert_eq!(failed, vec!["failing"]);
        assert_eq!(lines.lock().unwrap().len(), 1);
    }

    #[test]
    fn all_ok_when_every_sink_accepts() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let mut fanout = SinkFanout::new(vec![Box::new(RecordingSink { lines })]);
        assert!(fanout.deliver(&sample_event()).all_ok());
    }
}
