use std::process::Command;

fn pretty_sleepy() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pretty-sleepy"));
    // The test runner's own environment must not steer the tick rate.
    cmd.env_remove("PRETTY_SLEEPY_FPS").env_remove("FPS");
    cmd
}

#[test]
fn test_no_argument_prints_usage_and_exits_1() {
    let output = pretty_sleepy().output().expect("failed to run pretty-sleepy");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Usage: pretty-sleepy [time]"),
        "usage text missing from: {stdout}"
    );
    // Usage lines sit behind a two-space left margin.
    assert!(
        stdout.contains("\n  Usage: pretty-sleepy [time]\n"),
        "usage margin missing from: {stdout}"
    );
}

#[test]
fn test_zero_duration_exits_cleanly() {
    let output = pretty_sleepy()
        .arg("0s")
        .output()
        .expect("failed to run pretty-sleepy");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Sleeping until"),
        "announcement missing from: {stdout}"
    );
}

#[test]
fn test_unrecognized_time_is_a_zero_countdown() {
    let output = pretty_sleepy()
        .arg("soon")
        .output()
        .expect("failed to run pretty-sleepy");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_short_countdown_completes() {
    let output = pretty_sleepy()
        .arg("120ms")
        .output()
        .expect("failed to run pretty-sleepy");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_invalid_fps_override_falls_back_to_default() {
    let output = pretty_sleepy()
        .arg("0")
        .env("PRETTY_SLEEPY_FPS", "banana")
        .output()
        .expect("failed to run pretty-sleepy");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_fps_fallback_variable_is_honored() {
    let output = pretty_sleepy()
        .arg("100ms")
        .env("FPS", "10")
        .output()
        .expect("failed to run pretty-sleepy");

    assert_eq!(output.status.code(), Some(0));
}
