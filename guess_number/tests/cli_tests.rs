use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_guess_number"))
        .args(args)
        .env_remove("GUESS_NUMBER_SEED")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start guess_number");

    // Dropping stdin closes it, so the game sees EOF after the input
    {
        let mut pipe = child.stdin.take().unwrap();
        // The game exits as soon as it wins, which may break the pipe
        let _ = pipe.write_all(stdin.as_bytes());
    }

    child.wait_with_output().expect("Failed to wait on guess_number")
}

fn all_numbers() -> String {
    (1..=100).map(|n| format!("{n}\n")).collect()
}

#[test]
fn test_wins_with_no_arguments() {
    let output = run(&[], &all_numbers());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.starts_with("Guess the number!\n"));
    assert!(stdout.contains("You win!"));
}

#[test]
fn test_shown_secret_is_the_winning_guess() {
    let output = run(&["--seed", "7", "--show-secret"], &all_numbers());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());

    let secret = stdout
        .lines()
        .find_map(|l| l.strip_prefix("The secret number is: "))
        .unwrap();
    let last_guess = stdout
        .lines()
        .filter_map(|l| l.strip_prefix("You guessed: "))
        .last()
        .unwrap();
    assert_eq!(secret, last_guess);
}

#[test]
fn test_seed_replays_the_same_game() {
    let first = run(&["--seed", "99"], &all_numbers());
    let second = run(&["--seed", "99"], &all_numbers());

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_closed_stdin_fails() {
    let output = run(&["--no-echo"], "abc\n");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(!stdout.contains("You guessed"));
    assert!(stderr.contains("input ended before the secret number was guessed"));
}
