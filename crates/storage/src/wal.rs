// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write-ahead log of events.
//!
//! One JSON object per line: `{"seq":N,"event":{...}}`. Appends are buffered
//! and written on [`Wal::flush`]. On open, a damaged tail (invalid JSON or
//! non-UTF-8 bytes) is cut off: the damaged file is rotated to `.bak` and
//! the valid prefix is rewritten.

use crate::snapshot::rotate_bak_path;
use rp_core::Event;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Buffered entries that force a flush.
const FLUSH_THRESHOLD: usize = 100;

/// Maximum time entries may sit in the buffer.
const FLUSH_INTERVAL: Duration = Duration::from_millis(10);

/// Errors that can occur in WAL operations
#[derive(Debug, Error)]
pub enum WalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A sequenced event in the WAL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalEntry {
    pub seq: u64,
    pub event: Event,
}

pub struct Wal {
    path: PathBuf,
    file: File,
    buffer: Vec<u8>,
    buffered: usize,
    write_seq: u64,
    flushed_seq: u64,
    flushed_len: u64,
    last_flush: Instant,
}

impl Wal {
    /// Open (or create) the WAL at `path`.
    ///
    /// `processed_seq` is the sequence already folded into a snapshot; new
    /// entries continue after whichever is larger, it or the last entry.
    pub fn open(path: &Path, processed_seq: u64) -> Result<Self, WalError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut last_seq = 0;
        if path.exists() {
            let bytes = fs::read(path)?;
            let (entries, corrupt) = parse_entries(&bytes);
            if let Some(last) = entries.last() {
                last_seq = last.seq;
            }
            if corrupt {
                let bak = rotate_bak_path(path);
                tracing::warn!(
                    path = %path.display(),
                    bak = %bak.display(),
                    valid_entries = entries.len(),
                    "corrupt WAL, keeping valid prefix"
                );
                fs::rename(path, &bak)?;
                write_entries(path, &entries)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let flushed_len = file.metadata()?.len();
        let write_seq = last_seq.max(processed_seq);
        Ok(Self {
            path: path.to_path_buf(),
            file,
            buffer: Vec::new(),
            buffered: 0,
            write_seq,
            flushed_seq: write_seq,
            flushed_len,
            last_flush: Instant::now(),
        })
    }

    /// Buffer an event; returns its sequence number.
    pub fn append(&mut self, event: &Event) -> Result<u64, WalError> {
        let seq = self.write_seq + 1;
        let entry = WalEntry { seq, event: event.clone() };
        serde_json::to_writer(&mut self.buffer, &entry)?;
        self.buffer.push(b'\n');
        self.buffered += 1;
        self.write_seq = seq;
        Ok(seq)
    }

    /// Write buffered entries to disk.
    pub fn flush(&mut self) -> Result<(), WalError> {
        if !self.buffer.is_empty() {
            self.file.write_all(&self.buffer)?;
            self.file.sync_data()?;
            self.flushed_len += self.buffer.len() as u64;
            self.buffer.clear();
            self.buffered = 0;
            self.flushed_seq = self.write_seq;
        }
        self.last_flush = Instant::now();
        Ok(())
    }

    /// Drop entries that never made it to disk after a failed flush.
    ///
    /// The sequence rolls back to the last flushed entry and any partially
    /// written tail is cut from the file.
    pub fn discard_pending(&mut self) -> Result<(), WalError> {
        self.buffer.clear();
        self.buffered = 0;
        self.write_seq = self.flushed_seq;
        if fs::metadata(&self.path)?.len() > self.flushed_len {
            OpenOptions::new().write(true).open(&self.path)?.set_len(self.flushed_len)?;
        }
        Ok(())
    }

    pub fn needs_flush(&self) -> bool {
        self.buffered >= FLUSH_THRESHOLD
            || (self.buffered > 0 && self.last_flush.elapsed() >= FLUSH_INTERVAL)
    }

    #[cfg(test)]
    pub(crate) fn replace_file(&mut self, file: File) {
        self.file = file;
    }

    /// Sequence number of the last appended entry.
    pub fn write_seq(&self) -> u64 {
        self.write_seq
    }

    /// Flushed entries with `seq > after`, stopping at the first corrupt line.
    pub fn entries_after(&self, after: u64) -> Result<Vec<WalEntry>, WalError> {
        let file = File::open(&self.path)?;
        let mut entries = Vec::new();
        for line in BufReader::new(file).split(b'\n') {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            match serde_json::from_slice::<WalEntry>(&line) {
                Ok(entry) if entry.seq > after => entries.push(entry),
                Ok(_) => {}
                Err(_) => break,
            }
        }
        Ok(entries)
    }

    /// Drop entries with `seq < seq`, keeping the rest.
    pub fn truncate_before(&mut self, seq: u64) -> Result<(), WalError> {
        self.flush()?;
        let keep = self.entries_after(seq.saturating_sub(1))?;
        let tmp = self.path.with_extension("tmp");
        write_entries(&tmp, &keep)?;
        fs::rename(&tmp, &self.path)?;
        self.file = OpenOptions::new().append(true).open(&self.path)?;
        self.flushed_len = self.file.metadata()?.len();
        Ok(())
    }
}

/// Parse the valid prefix of a WAL file; the flag is set when a bad line was hit.
fn parse_entries(bytes: &[u8]) -> (Vec<WalEntry>, bool) {
    let mut entries = Vec::new();
    for line in bytes.split(|b| *b == b'\n') {
        if line.is_empty() {
            continue;
        }
        match serde_json::from_slice::<WalEntry>(line) {
            Ok(entry) => entries.push(entry),
            Err(_) => return (entries, true),
        }
    }
    (entries, false)
}

fn write_entries(path: &Path, entries: &[WalEntry]) -> Result<(), WalError> {
    let mut out = Vec::new();
    for entry in entries {
        serde_json::to_writer(&mut out, entry)?;
        out.push(b'\n');
    }
    let mut file = File::create(path)?;
    file.write_all(&out)?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
#[path = "wal_tests.rs"]
mod tests;
