use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity attached to every generated event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
    Warn,
    Error,
}

impl Level {
    /// Canonical uppercase name used in both sink formats.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a level name outside the closed INFO/WARN/ERROR set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidLevel(pub String);

impl fmt::Display for InvalidLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid level: {} (expected INFO, WARN, or ERROR)", self.0)
    }
}

impl std::error::Error for InvalidLevel {}

impl FromStr for Level {
    type Err = InvalidLevel;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "INFO" => Ok(Level::Info),
            "WARN" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            other => Err(InvalidLevel(other.to_string())),
        }
    }
}

/// Fixed per-process identity stamped onto every event.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamIdentity {
    /// Logical stream name (`logStreamName` on the wire).
    pub stream: String,
    /// Emitting service name.
    pub service: String,
    /// Origin label for the generator.
    pub source: String,
    /// Host the generator claims to run on.
    pub host: String,
}

/// One immutable structured log record.
///
/// Field order matches the durable-sink line layout; `stream` is
/// serialized as `logStreamName`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Milliseconds since the Unix epoch, assigned at generation time.
    pub timestamp: i64,
    /// Freeform message with a category-specific JSON body.
    pub message: String,
    #[serde(rename = "logStreamName")]
    pub stream: String,
    pub level: Level,
    pub service: String,
    pub source: String,
    pub host: String,
}

impl Event {
    /// Assembles an event from the generated parts and the fixed identity.
    pub fn assemble(
        timestamp: i64,
        message: String,
        identity: &StreamIdentity,
        level: Level,
    ) -> Self {
        Self {
            timestamp,
            message,
            stream: identity.stream.clone(),
            level,
            service: identity.service.clone(),
            source: identity.source.clone(),
            host: identity.host.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> StreamIdentity {
        StreamIdentity {
            stream: "service-logs/app-container/instance-001".to_string(),
            service: "log-generator".to_string(),
            source: "logsynth".to_string(),
            host: "localhost".to_string(),
        }
    }

    #[test]
    fn level_parses_closed_set_only() {
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("ERROR".parse::<Level>().unwrap(), Level::Error);
        assert!("DEBUG".parse::<Level>().is_err());
        assert!("info".parse::<Level>().is_err());
    }

    #[test]
    fn assemble_is_idempotent() {
        let a = Event::assemble(1_700_000_000_000, "x: {}".to_string(), &identity(), Level::Info);
        let b = Event::assemble(1_700_000_000_000, "x: {}".to_string(), &identity(), Level::Info);
        assert_eq!(a, b);
    }

    #[test]
    fn jsonl_line_round_trips_all_fields() {
        let event = Event::assemble(
            42,
            r#"API request processed: {"endpoint":"/api/users"}"#.to_string(),
            &identity(),
            Level::Warn,
        );
        let line = serde_json::to_string(&event).expect("serialize");
        assert!(line.contains(r#""logStreamName":"service-logs/app-container/instance-001""#));
        assert!(line.contains(r#""level":"WARN""#));
        let back: Event = serde_json::from_str(&line).expect("deserialize");
        assert_eq!(back, event);
    }

    #[test]
    fn serialization_is_stable() {
        let event = Event::assemble(7, "m".to_string(), &identity(), Level::Error);
        let first = serde_json::to_string(&event).expect("serialize");
        let second = serde_json::to_string(&event.clone()).expect("serialize");
        assert_eq!(first, second);
    }
}
