use std::io::Write;
use std::process::{Command, Output};

mod common;
use common::{assert_snapshot, redact_fingerprint, snapshot_of, SEQUENTIAL_VALUES};

fn tallyrank(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tallyrank"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("TALLYRANK_MAX_VALUE")
        .output()
        .expect("binary runs")
}

fn stdout_of(args: &[&str]) -> String {
    let output = tallyrank(args);
    assert!(
        output.status.success(),
        "tallyrank {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("utf-8 output")
}

#[test]
fn demo_output() {
    assert_snapshot("demo.txt", &stdout_of(&["demo"]));
}

#[test]
fn query_output() {
    let stdout = stdout_of(&[
        "query", "1", "3", "5", "7", "8", "9", "10", "6", "4", "2", "--less", "7", "--less",
        "200", "--greater", "7", "--greater", "-1", "--between", "-1", "8", "--between", "500",
        "0",
    ]);
    assert_snapshot("query_sequential.txt", &stdout);
}

#[test]
fn query_without_thresholds_prints_summary() {
    let stdout = stdout_of(&["query", "1", "3", "5", "7", "8", "9", "10", "6", "4", "2"]);
    let stats = snapshot_of(&SEQUENTIAL_VALUES);
    assert_snapshot(
        "query_summary.txt",
        &redact_fingerprint(&stdout, &stats),
    );
}

#[test]
fn query_reads_values_file() {
    let path = std::env::temp_dir().join(format!("tallyrank-values-{}.txt", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("create values file");
    writeln!(file, "# sample values").unwrap();
    writeln!(file, "3 9").unwrap();
    writeln!(file, "3 4 # trailing comment").unwrap();
    writeln!(file, "6").unwrap();
    drop(file);

    let stdout = stdout_of(&[
        "query",
        "--input",
        path.to_str().unwrap(),
        "--less",
        "4",
        "--greater",
        "4",
        "--between",
        "3",
        "6",
    ]);
    std::fs::remove_file(&path).ok();

    assert_eq!(stdout, "less(4) = 2\ngreater(4) = 2\nbetween(3, 6) = 4\n");
}

#[test]
fn query_rejects_fractional_value() {
    let output = tallyrank(&["query", "1", "3.1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not an integral value"), "stderr: {stderr}");
}

#[test]
fn query_respects_max_value() {
    let output = tallyrank(&["--max-value", "5", "query", "6"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("outside the accepted range [0, 5]"), "stderr: {stderr}");
}
