use crate::fanout::SinkFanout;
use crate::shutdown::ShutdownFlag;
use crate::traits::EventSource;
use std::thread;
use std::time::Duration;
use tracing::warn;

/// Counters reported when the emission loop stops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Events generated and handed to the fan-out.
    pub emitted: u64,
    /// Individual sink failures observed across all deliveries.
    pub delivery_failures: u64,
}

/// Timed loop that pulls events from a source and pushes them through
/// the sink fan-out until cancelled.
pub struct Emitter<S: EventSource> {
    source: S,
    fanout: SinkFanout,
    interval: Duration,
    max_events: Option<u64>,
    shutdown: ShutdownFlag,
}

impl<S: EventSource> Emitter<S> {
    pub fn new(
        source: S,
        fanout: SinkFanout,
        interval: Duration,
        max_events: Option<u64>,
        shutdown: ShutdownFlag,
    ) -> Self {
        Self {
            source,
            fanout,
            interval,
            max_events,
            shutdown,
        }
    }

    /// Runs until the shutdown flag is tripped or `max_events` is
    /// reached. An in-flight delivery always completes before the loop
    /// observes cancellation.
    pub fn run(&mut self) -> RunSummary {
        let mut summary = RunSummary::default();

        loop {
            if self.shutdown.is_triggered() {
                break;
            }
            if let Some(max) = self.max_events {
                if summary.emitted >= max {
                    break;
                }
            }

            let event = self.source.next_event();
            let result = self.fanout.deliver(&event);
            summary.emitted += 1;
            for (sink, err) in result.failures() {
                summary.delivery_failures += 1;
                warn!(sink, error = %err, "sink delivery failed, line dropped");
            }

            if let Some(max) = self.max_events {
                if summary.emitted >= max {
                    break;
                }
            }
            self.sleep_interval();
        }

        summary
    }

    /// Sleeps one interval in short slices so cancellation is prompt.
    fn sleep_interval(&self) {
        const SLICE: Duration = Duration::from_millis(25);
        let mut remaining = self.interval;
        while !remaining.is_zero() && !self.shutdown.is_triggered() {
            let step = remaining.min(SLICE);
            thread::sleep(step);
            remaining = remaining.saturating_sub(step);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Event, Level, StreamIdentity};
    use crate::traits::EventSink;
    use std::io;
    use std::sync::{Arc, Mutex};

    struct CountingSource {
        next_timestamp: i64,
    }

    impl EventSource for CountingSource {
        fn next_event(&mut self) -> Event {
            let identity = StreamIdentity {
                stream: "stream".to_string(),
                service: "svc".to_string(),
                source: "test".to_string(),
                host: "localhost".to_string(),
            };
            let ts = self.next_timestamp;
            self.next_timestamp += 1;
            Event::assemble(ts, format!("event {ts}"), &identity, Level::Info)
        }
    }

    struct MemorySink {
        name: &'static str,
        events: Arc<Mutex<Vec<Event>>>,
    }

    impl EventSink for MemorySink {
        fn name(&self) -> &'static str {
            self.name
        }

        fn emit(&mut self, event: &Event) -> io::Result<()> {
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    struct BrokenSink;

    impl EventSink for BrokenSink {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn emit(&mut self, _event: &Event) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    #[test]
    fn five_iterations_reach_both_sinks_in_order() {
        let durable = Arc::new(Mutex::new(Vec::new()));
        let console = Arc::new(Mutex::new(Vec::new()));
        let fanout = SinkFanout::new(vec![
            Box::new(MemorySink { name: "durable", events: durable.clone() }),
            Box::new(MemorySink { name: "console", events: console.clone() }),
        ]);
        let mut emitter = Emitter::new(
            CountingSource { next_timestamp: 100 },
            fanout,
            Duration::ZERO,
            Some(5),
            ShutdownFlag::new(),
        );

        let summary = emitter.run();

        assert_eq!(summary.emitted, 5);
        assert_eq!(summary.delivery_failures, 0);
        let durable = durable.lock().unwrap();
        let console = console.lock().unwrap();
        assert_eq!(durable.len(), 5);
        assert_eq!(console.len(), 5);
        for pair in durable.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn pre_triggered_shutdown_emits_nothing() {
        let shutdown = ShutdownFlag::new();
        shutdown.trigger();
        let mut emitter = Emitter::new(
            CountingSource { next_timestamp: 0 },
            SinkFanout::new(Vec::new()),
            Duration::ZERO,
            None,
            shutdown,
        );
        assert_eq!(emitter.run().emitted, 0);
    }

    #[test]
    fn failing_sink_is_counted_and_loop_continues() {
        let console = Arc::new(Mutex::new(Vec::new()));
        let fanout = SinkFanout::new(vec![
            Box::new(BrokenSink),
            Box::new(MemorySink { name: "console", events: console.clone() }),
        ]);
        let mut emitter = Emitter::new(
            CountingSource { next_timestamp: 0 },
            fanout,
            Duration::ZERO,
            Some(3),
            ShutdownFlag::new(),
        );

        let summary = emitter.run();

        assert_eq!(summary.emitted, 3);
        assert_eq!(summary.delivery_failures, 3);
        assert_eq!(console.lock().unwrap().len(), 3);
    }
}
