//! CLI arg parsing tests for mocktop
use std::process::Command;

// We test the parsing by invoking the binary: --help must mention the
// short and long flags, and bad input must print usage without crashing.

#[test]
fn test_help_mentions_short_and_long_flags() {
    let output = Command::new(env!("CARGO_BIN_EXE_mocktop"))
        .arg("--help")
        .output()
        .expect("run mocktop --help");
    let text = format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(
        text.contains("--seed") && text.contains("-s") && text.contains("--once"),
        "help text missing expected flags (--seed/-s, --once)\n{text}"
    );
}

#[test]
fn test_unknown_argument_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_mocktop"))
        .arg("--bogus")
        .output()
        .expect("run mocktop");
    assert!(output.status.success(), "mocktop --bogus did not exit cleanly");
    let text = String::from_utf8_lossy(&output.stderr).to_string();
    assert!(text.contains("Usage:"), "expected usage on unknown arg\n{text}");
}

#[test]
fn test_seed_requires_an_unsigned_integer() {
    let exe = env!("CARGO_BIN_EXE_mocktop");

    // Non-numeric value
    let out = Command::new(exe)
        .args(["--seed", "abc"])
        .output()
        .expect("run mocktop");
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stderr).to_string();
    assert!(
        text.contains("Invalid seed"),
        "expected an invalid-seed message\n{text}"
    );

    // Missing value
    let out2 = Command::new(exe).arg("--seed").output().expect("run mocktop");
    assert!(out2.status.success());
    let text2 = String::from_utf8_lossy(&out2.stderr).to_string();
    assert!(
        text2.contains("Missing value for --seed"),
        "expected a missing-value message\n{text2}"
    );
}

#[test]
fn test_seed_equals_form_is_accepted() {
    // --seed=N with --once exercises acceptance without a terminal
    let out = Command::new(env!("CARGO_BIN_EXE_mocktop"))
        .args(["--seed=5", "--once"])
        .output()
        .expect("run mocktop");
    assert!(out.status.success(), "mocktop --seed=5 --once did not succeed");
    let text = String::from_utf8_lossy(&out.stdout).to_string();
    assert!(
        text.contains("cpu_percent"),
        "expected a JSON snapshot on stdout\n{text}"
    );
}
