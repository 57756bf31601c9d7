//! Line-delimited JSON event journal.
//!
//! One JSON object per line, tagged by `type`. The journal never interrupts
//! play: the first write error disables it and is kept for the caller to
//! report once the terminal is restored.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::GameSnapshot;
use crate::types::LockEvent;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JournalRecord {
    SessionStart {
        seed: u32,
        tick_ms: u32,
    },
    Lock {
        piece_id: u32,
        kind: &'static str,
        rows: u32,
        points: u32,
        score: u32,
        lines: u32,
        level: u32,
    },
    GameOver {
        score: u32,
        lines: u32,
        level: u32,
        pieces: u32,
    },
}

impl JournalRecord {
    /// Lock record from the event and the snapshot taken right after it.
    pub fn lock(event: &LockEvent, after: &GameSnapshot) -> Self {
        JournalRecord::Lock {
            // The snapshot already points at the following piece.
            piece_id: after.piece_id.saturating_sub(1),
            kind: event.kind.as_str(),
            rows: event.lines_cleared,
            points: event.points,
            score: after.score,
            lines: after.lines,
            level: after.level,
        }
    }

    pub fn game_over(snap: &GameSnapshot) -> Self {
        JournalRecord::GameOver {
            score: snap.score,
            lines: snap.lines,
            level: snap.level,
            pieces: snap.piece_id.saturating_sub(1),
        }
    }
}

pub struct Journal {
    sink: Option<Box<dyn Write>>,
    buf: Vec<u8>,
    failure: Option<String>,
}

impl Journal {
    /// A journal that drops every record.
    pub fn disabled() -> Self {
        Self {
            sink: None,
            buf: Vec::new(),
            failure: None,
        }
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: &str) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path))?;
        Ok(Self::with_writer(Box::new(BufWriter::new(file))))
    }

    /// Open `path` when given, otherwise return a disabled journal.
    pub fn from_path(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::open(p),
            None => Ok(Self::disabled()),
        }
    }

    pub fn with_writer(sink: Box<dyn Write>) -> Self {
        Self {
            sink: Some(sink),
            buf: Vec::with_capacity(256),
            failure: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    pub fn record(&mut self, rec: &JournalRecord) {
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        self.buf.clear();
        if let Err(e) = serde_json::to_writer(&mut self.buf, rec) {
            self.fail(format!("encode failed: {}", e));
            return;
        }
        self.buf.push(b'\n');

        if let Err(e) = sink.write_all(&self.buf) {
            self.fail(format!("write failed: {}", e));
        }
    }

    pub fn flush(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            if let Err(e) = sink.flush() {
                self.fail(format!("flush failed: {}", e));
            }
        }
    }

    /// The error that disabled the journal, if any. Reported once.
    pub fn take_failure(&mut self) -> Option<String> {
        self.failure.take()
    }

    fn fail(&mut self, msg: String) {
        self.sink = None;
        if self.failure.is_none() {
            self.failure = Some(msg);
        }
    }
}

impl Drop for Journal {
    fn drop(&mut self) {
        if let Some(sink) = self.sink.as_mut() {
            let _ = sink.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::types::{GameAction, PieceKind};
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(data);
            Ok(data.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn lines_of(buf: &SharedBuf) -> Vec<serde_json::Value> {
        let bytes = buf.0.borrow();
        std::str::from_utf8(&bytes)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn records_are_tagged_json_lines() {
        let buf = SharedBuf::default();
        let mut journal = Journal::with_writer(Box::new(buf.clone()));
        journal.record(&JournalRecord::SessionStart { seed: 9, tick_ms: 16 });
        journal.record(&JournalRecord::GameOver {
            score: 100,
            lines: 1,
            level: 1,
            pieces: 12,
        });

        let lines = lines_of(&buf);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "session_start");
        assert_eq!(lines[0]["seed"], 9);
        assert_eq!(lines[1]["type"], "game_over");
        assert_eq!(lines[1]["pieces"], 12);
    }

    #[test]
    fn lock_record_from_session() {
        let mut game = GameState::new(3);
        let snap = game.tick(16, &[GameAction::HardDrop]);
        let event = game.take_last_event().unwrap();

        match JournalRecord::lock(&event, &snap) {
            JournalRecord::Lock {
                piece_id,
                kind,
                rows,
                score,
                ..
            } => {
                assert_eq!(piece_id, 1);
                assert_eq!(PieceKind::from_str(kind), Some(event.kind));
                assert_eq!(rows, 0);
                assert_eq!(score, 0);
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn write_error_disables_and_reports_once() {
        let mut journal = Journal::with_writer(Box::new(Broken));
        journal.record(&JournalRecord::SessionStart { seed: 1, tick_ms: 16 });
        assert!(!journal.is_enabled());

        let msg = journal.take_failure().unwrap();
        assert!(msg.contains("disk full"));

        journal.record(&JournalRecord::SessionStart { seed: 1, tick_ms: 16 });
        assert!(journal.take_failure().is_none());
    }

    #[test]
    fn disabled_journal_is_silent() {
        let mut journal = Journal::from_path(None).unwrap();
        assert!(!journal.is_enabled());
        journal.record(&JournalRecord::SessionStart { seed: 1, tick_ms: 16 });
        journal.flush();
        assert!(journal.take_failure().is_none());
    }

    #[test]
    fn open_appends_to_file() {
        let path = std::env::temp_dir().join(format!("blockfall-journal-{}.jsonl", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let path_str = path.to_string_lossy().to_string();

        for seed in [1, 2] {
            let mut journal = Journal::open(&path_str).unwrap();
            journal.record(&JournalRecord::SessionStart { seed, tick_ms: 16 });
        }

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn open_error_has_path_context() {
        let err = match Journal::open("/nonexistent-dir/for/blockfall.jsonl") {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(err.to_string().contains("open journal"));
    }
}
