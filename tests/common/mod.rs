#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tallyrank::{Recorder, Snapshot};

/// Values 1..=10 inserted out of order.
pub const SEQUENTIAL_VALUES: [i32; 10] = [1, 3, 5, 7, 8, 9, 10, 6, 4, 2];

/// Values with duplicates used by the short scenario.
pub const SMALL_VALUES: [i32; 5] = [3, 9, 3, 4, 6];

pub fn snapshot_of(values: &[i32]) -> Snapshot {
    let mut capture = Recorder::new();
    capture
        .extend(values.iter().copied())
        .expect("values are in the default domain");
    capture.snapshot().expect("snapshot succeeds")
}

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

/// Replace the hex fingerprint of `stats` in `output` with `<fingerprint>`.
///
/// Fails when the fingerprint is missing, so a stale or wrong digest cannot be
/// hidden by the redaction.
pub fn redact_fingerprint(output: &str, stats: &Snapshot) -> String {
    let hex = stats.fingerprint().to_hex();
    assert!(
        output.contains(hex.as_str()),
        "output does not carry fingerprint {}:\n{}",
        hex,
        output
    );
    output.replace(hex.as_str(), "<fingerprint>")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("TALLYRANK_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set TALLYRANK_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n")
}
