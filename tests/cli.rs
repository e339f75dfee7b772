use assert_cmd::Command;

fn stdout_of(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("typeling").unwrap();
    let assert = cmd.args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn demo_prints_reports_and_queries() {
    let output = stdout_of(&["demo"]);

    assert!(output.contains("=== languages ==="));
    assert!(output.contains("ru: 100 sym/min, 0 syms, 0.0 min"));
    assert!(output.contains("ru: 105 sym/min, 1200 syms, 12.0 min"));
    assert!(output.contains("most active: es"));
    assert!(output.contains("ru (105) needs 120000 symbols to catch es (705)"));
    assert!(output.contains("skipped: registry already holds 5 languages"));
}

#[test]
fn demo_emits_json_reports() {
    let output = stdout_of(&["--format", "json", "demo"]);

    assert!(output.contains("\"code\": \"ru\""));
    assert!(output.contains("\"speed\": 105"));
}

#[test]
fn simulate_with_seed_is_reproducible() {
    let args = [
        "simulate",
        "--languages",
        "en",
        "--seed",
        "9",
        "--no-log",
    ];

    assert_eq!(stdout_of(&args), stdout_of(&args));
}
