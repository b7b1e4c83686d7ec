use logsynth_core::event::Event;
use logsynth_core::traits::EventSink;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Durable newline-delimited JSON sink.
///
/// The append target is opened once at construction and owned for the
/// process lifetime; an open failure is fatal at startup, a write
/// failure is surfaced per event through the fan-out.
pub struct JsonlSink {
    path: PathBuf,
    file: BufWriter<File>,
}

impl JsonlSink {
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSink for JsonlSink {
    fn name(&self) -> &'static str {
        "durable"
    }

    fn emit(&mut self, event: &Event) -> io::Result<()> {
        let mut buffer = serde_json::to_vec(event)
            .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
        buffer.push(b'\n');

        // Whole lines only: one write of the full buffer, flushed per event.
        self.file.write_all(&buffer)?;
        self.file.flush()
    }
}
