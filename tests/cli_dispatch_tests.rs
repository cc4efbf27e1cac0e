use std::process::Command;

fn dice_bin() -> &'static str {
    env!("CARGO_BIN_EXE_dice-run")
}

fn dispatch_bin() -> &'static str {
    env!("CARGO_BIN_EXE_rewardsim")
}

fn cards_bin() -> &'static str {
    env!("CARGO_BIN_EXE_bunny")
}

#[test]
fn dice_run_prints_rates_for_every_counter() {
    let output = Command::new(dice_bin())
        .arg("1,000")
        .output()
        .expect("dice-run should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let names: Vec<&str> = stdout
        .lines()
        .map(|line| line.split(':').next().unwrap_or_default())
        .collect();
    assert_eq!(
        names,
        vec!["Laps", "Pieces", "BonusPieces", "EnhancementStones", "Reports", "CreditsK"]
    );
    assert!(stdout.lines().all(|line| line.contains(" per 10, (")));
}

#[test]
fn dice_run_logs_raw_status_as_json() {
    let output = Command::new(dice_bin())
        .arg("500")
        .output()
        .expect("dice-run should run");

    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Num of iterate: 500"));
    let raw = stderr
        .lines()
        .find_map(|line| line.split_once("Status: ").map(|(_, json)| json))
        .expect("status line should be logged");
    let status: serde_json::Value = serde_json::from_str(raw).expect("status should be json");
    assert!(status["square_index"].as_u64().is_some_and(|i| i < 18));
    assert!(status["bonus_pieces"].as_u64() >= status["laps"].as_u64());
}

#[test]
fn dice_run_is_deterministic() {
    let run = || {
        Command::new(dice_bin())
            .arg("2000")
            .output()
            .expect("dice-run should run")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn dice_run_without_argument_is_usage_error() {
    let output = Command::new(dice_bin())
        .output()
        .expect("dice-run should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: dice-run"));
}

#[test]
fn dice_run_rejects_non_numeric_argument() {
    let output = Command::new(dice_bin())
        .arg("lots")
        .output()
        .expect("dice-run should run");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn dispatcher_runs_dice_with_zero_iterations() {
    let output = Command::new(dispatch_bin())
        .args(["dice", "0"])
        .output()
        .expect("rewardsim should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Laps: 0.0 per 10, (0)\n"));
}

#[test]
fn dispatcher_rejects_unknown_command() {
    let output = Command::new(dispatch_bin())
        .arg("poker")
        .output()
        .expect("rewardsim should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: rewardsim"));
}

#[test]
fn dice_run_rejects_negative_iterations() {
    let output = Command::new(dice_bin())
        .arg("-5")
        .output()
        .expect("dice-run should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid iteration count '-5'"));
}

#[test]
fn bunny_rejects_arguments() {
    let output = Command::new(cards_bin())
        .arg("x")
        .output()
        .expect("bunny should run");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: bunny"));
}

#[test]
fn dispatcher_rejects_extra_cards_arguments() {
    let output = Command::new(dispatch_bin())
        .args(["cards", "x"])
        .output()
        .expect("rewardsim should run");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: rewardsim"));
}
