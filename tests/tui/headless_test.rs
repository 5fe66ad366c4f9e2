//! Integration tests for headless mode.

use super::common::{run, run_with_stdin};

#[test]
fn test_headless_basic_execution() {
    let (code, stdout, _) = run(&["--headless", "--events", "line:enable"]);

    assert_eq!(code, 0, "Expected exit code 0");
    assert!(stdout.contains("Router#"));
    assert!(stdout.contains("Events: 1 executed"));
}

#[test]
fn test_headless_json_state() {
    let (code, stdout, _) = run(&[
        "--headless",
        "--events",
        "line:enable,line:configure terminal,line:interface g0/1,type:ip addr",
        "--output",
        "json",
    ]);

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["state"]["mode"], "interface-config");
    assert_eq!(json["state"]["interface"], "g0/1");
    assert_eq!(json["state"]["prompt"], "Router(config-if-g0/1)#");
    assert_eq!(json["state"]["input_text"], "ip addr");
}

#[test]
fn test_headless_assertion_failure_sets_exit_code() {
    let (code, stdout, _) = run(&[
        "--headless",
        "--events",
        "line:enable,assert:state:mode=global-config",
    ]);

    assert_eq!(code, 1, "Failed assertion should exit with 1");
    assert!(stdout.contains("Assertions: 0 passed, 1 failed"));
}

#[test]
fn test_headless_screen_assertions() {
    let (code, stdout, _) = run(&[
        "--headless",
        "--events",
        "line:enable,line:show ip route,assert:contains:Gateway of last resort,assert:not-contains:% Unrecognized",
        "--output",
        "json",
    ]);

    assert_eq!(code, 0);
    assert!(stdout.contains(r#""passed": 2"#));
    assert!(stdout.contains(r#""failed": 0"#));
}

#[test]
fn test_headless_frames_output() {
    let (code, stdout, _) = run(&[
        "--headless",
        "--events",
        "type:en,type:able",
        "--output",
        "frames",
    ]);

    assert_eq!(code, 0);
    assert!(stdout.contains("=== FRAME 0 (initial) ==="));
    assert!(stdout.contains("=== FRAME 1 (type:en) ==="));
    assert!(stdout.contains("=== FRAME 2 (type:able) ==="));
}

#[test]
fn test_headless_script_from_stdin() {
    let script = "\
# configure the WAN link
line:enable
line:configure terminal
line:interface g0/1
line:description WAN, to HQ
line:end
assert:state:mode=privileged-exec
";
    let (code, stdout, _) = run_with_stdin(
        &["--headless", "--script", "-", "--output", "json"],
        script,
    );

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(json["events_executed"], 6);
    assert_eq!(json["assertions"]["passed"], 1);
}

#[test]
fn test_headless_requires_events_or_script() {
    let (code, stdout, stderr) = run(&["--headless"]);

    assert_eq!(code, 1, "Should fail without events or script");
    let combined = format!("{stdout}{stderr}");
    assert!(
        combined.contains("requires --events or --script"),
        "Should show error message. Got: {combined}"
    );
}

#[test]
fn test_headless_invalid_event() {
    let (code, _, stderr) = run(&["--headless", "--events", "bogus:thing"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("Unknown event type"));
}

#[test]
fn test_headless_custom_size() {
    let (code, stdout, _) = run(&[
        "--headless",
        "--events",
        "line:enable",
        "--size",
        "80x12",
        "--output",
        "json",
    ]);

    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    let lines = json["screen_lines"].as_array().expect("screen_lines array");
    assert!(lines.len() <= 12);
}
