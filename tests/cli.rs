use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ezcanvas_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ezcanvas").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

const STROKE: &str = r#"
# horizontal stroke across the middle
{"type":"move","x":10,"y":50}
{"type":"down"}
{"type":"move","x":40,"y":50}
{"type":"move","x":70,"y":50}
{"type":"move","x":90,"y":50}
{"type":"up"}
"#;

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    ezcanvas_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay pointer events through a stabilized drawing canvas",
        ));
}

#[test]
fn events_are_required() {
    let temp = TempDir::new().unwrap();
    ezcanvas_cmd(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "required arguments were not provided",
        ));
}

#[test]
fn replay_writes_png() {
    let temp = TempDir::new().unwrap();
    let events = temp.path().join("events.jsonl");
    let output = temp.path().join("out.png");
    std::fs::write(&events, STROKE).unwrap();

    ezcanvas_cmd(&temp)
        .args(["--width", "100", "--height", "100", "--fill"])
        .arg("--events")
        .arg(&events)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let bytes = std::fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
}

#[test]
fn replay_reads_stdin_and_inline_settings() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out.png");

    ezcanvas_cmd(&temp)
        .args(["--events", "-", "--settings", r#"{"brush":{"size":3}}"#])
        .arg("--output")
        .arg(&output)
        .write_stdin(STROKE)
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn invalid_event_reports_line() {
    let temp = TempDir::new().unwrap();
    let events = temp.path().join("events.jsonl");
    std::fs::write(&events, "{\"type\":\"down\"}\n{\"type\":\"hover\"}\n").unwrap();

    ezcanvas_cmd(&temp)
        .arg("--events")
        .arg(&events)
        .arg("--output")
        .arg(temp.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pointer event on line 2"));
}

#[test]
fn init_config_writes_example_once() {
    let temp = TempDir::new().unwrap();

    ezcanvas_cmd(&temp)
        .arg("--init-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));

    let written = temp.path().join("ezcanvas").join("config.toml");
    let contents = std::fs::read_to_string(&written).unwrap();
    assert!(contents.contains("[stabilizer]"));

    ezcanvas_cmd(&temp)
        .arg("--init-config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn bad_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("bad.toml");
    let events = temp.path().join("events.jsonl");
    std::fs::write(&config, "[brush\n").unwrap();
    std::fs::write(&events, STROKE).unwrap();

    ezcanvas_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--events")
        .arg(&events)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}
