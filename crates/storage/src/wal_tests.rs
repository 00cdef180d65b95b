// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rp_core::test_support::build_started_event;
use rp_core::BuildId;
use std::io::Write;
use tempfile::tempdir;

fn test_event(n: u32) -> Event {
    build_started_event("wal-test", n)
}

fn append_raw(path: &Path, bytes: &[u8]) {
    let mut f = OpenOptions::new().append(true).open(path).unwrap();
    f.write_all(bytes).unwrap();
}

#[test]
fn test_open_creates_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("events.wal");

    let wal = Wal::open(&path, 0).unwrap();

    assert!(path.exists());
    assert_eq!(wal.write_seq(), 0);
}

#[test]
fn test_append_and_flush() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    let mut wal = Wal::open(&path, 0).unwrap();

    assert_eq!(wal.append(&test_event(1)).unwrap(), 1);
    assert_eq!(wal.append(&test_event(2)).unwrap(), 2);

    // Nothing hits the disk until flush
    assert!(wal.entries_after(0).unwrap().is_empty());

    wal.flush().unwrap();

    let entries = wal.entries_after(0).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].event.build_id(), Some(&BuildId::new("wal-test#2")));
}

#[test]
fn test_reopen_continues_sequence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    {
        let mut wal = Wal::open(&path, 0).unwrap();
        wal.append(&test_event(1)).unwrap();
        wal.append(&test_event(2)).unwrap();
        wal.flush().unwrap();
    }

    let mut wal = Wal::open(&path, 0).unwrap();
    assert_eq!(wal.write_seq(), 2);
    assert_eq!(wal.append(&test_event(3)).unwrap(), 3);
}

#[test]
fn test_reopen_with_processed_seq_ahead_of_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    // Truncated WAL after a snapshot at seq 7
    let mut wal = Wal::open(&path, 7).unwrap();
    assert_eq!(wal.append(&test_event(1)).unwrap(), 8);
}

#[test]
fn test_entries_after() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    let mut wal = Wal::open(&path, 0).unwrap();
    for n in 1..=3 {
        wal.append(&test_event(n)).unwrap();
    }
    wal.flush().unwrap();

    let entries = wal.entries_after(1).unwrap();
    assert_eq!(entries.iter().map(|e| e.seq).collect::<Vec<_>>(), vec![2, 3]);
}

#[test]
fn test_truncate_before() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    let mut wal = Wal::open(&path, 0).unwrap();
    for n in 1..=3 {
        wal.append(&test_event(n)).unwrap();
    }

    // Truncate flushes pending entries first
    wal.truncate_before(2).unwrap();

    let entries = wal.entries_after(0).unwrap();
    assert_eq!(entries.iter().map(|e| e.seq).collect::<Vec<_>>(), vec![2, 3]);

    // Appends keep going after truncation
    assert_eq!(wal.append(&test_event(4)).unwrap(), 4);
    wal.flush().unwrap();
    assert_eq!(wal.entries_after(3).unwrap().len(), 1);
}

#[test]
fn test_needs_flush_threshold() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    let mut wal = Wal::open(&path, 0).unwrap();
    assert!(!wal.needs_flush());

    for n in 0..101 {
        wal.append(&test_event(n)).unwrap();
    }
    assert!(wal.needs_flush());

    wal.flush().unwrap();
    assert!(!wal.needs_flush());
}

#[test]
fn test_open_corrupt_wal_creates_bak_and_preserves_valid_entries() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    {
        let mut wal = Wal::open(&path, 0).unwrap();
        wal.append(&test_event(1)).unwrap();
        wal.append(&test_event(2)).unwrap();
        wal.flush().unwrap();
    }
    append_raw(&path, b"not-valid-json\n");

    let wal = Wal::open(&path, 0).unwrap();

    assert_eq!(wal.write_seq(), 2);
    assert!(path.with_extension("bak").exists());
    assert_eq!(wal.entries_after(0).unwrap().len(), 2);
}

#[test]
fn test_open_corrupt_wal_rotates_bak_files() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    // Four corrupt opens keep at most three backups
    for i in 1..=4u8 {
        std::fs::write(&path, [i; 8]).unwrap();
        let wal = Wal::open(&path, 0).unwrap();
        assert_eq!(wal.write_seq(), 0);
    }

    assert_eq!(std::fs::read(path.with_extension("bak")).unwrap(), vec![4u8; 8]);
    assert_eq!(std::fs::read(path.with_extension("bak.2")).unwrap(), vec![3u8; 8]);
    assert_eq!(std::fs::read(path.with_extension("bak.3")).unwrap(), vec![2u8; 8]);
    assert!(!path.with_extension("bak.4").exists());
}

#[test]
fn test_entries_after_stops_at_binary_data() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    let mut wal = Wal::open(&path, 0).unwrap();
    wal.append(&test_event(1)).unwrap();
    wal.flush().unwrap();

    append_raw(&path, b"\x80\x81\x82\xff\xfe\n");

    let entries = wal.entries_after(0).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].seq, 1);
}

#[test]
fn test_discard_pending_after_failed_flush_rolls_back_sequence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("events.wal");

    let mut wal = Wal::open(&path, 0).unwrap();
    wal.append(&test_event(1)).unwrap();
    wal.flush().unwrap();

    assert_eq!(wal.append(&test_event(2)).unwrap(), 2);
    // Read-only handle makes the write fail; a torn line is left behind
    wal.file = File::open(&path).unwrap();
    append_raw(&path, b"{\"seq\":2,\"ev");
    assert!(wal.flush().is_err());

    wal.discard_pending().unwrap();
    assert_eq!(wal.write_seq(), 1);
    assert_eq!(wal.entries_after(0).unwrap().len(), 1);

    wal.file = OpenOptions::new().append(true).open(&path).unwrap();
    assert_eq!(wal.append(&test_event(3)).unwrap(), 2);
    wal.flush().unwrap();

    let entries = wal.entries_after(0).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].seq, 2);
    assert_eq!(entries[1].event.build_id(), Some(&BuildId::new("wal-test#3")));
}
