use std::io::Write;
use std::process::{Command, Stdio};

#[test]
fn cli_plays_moves_and_reports_rejections() {
    let exe = env!("CARGO_BIN_EXE_chess_position");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    let input = b"p e2 e4\nx e7 e5\nn b8 b6\nquit\np e7 e5\n";
    child.stdin.as_mut().unwrap().write_all(input).unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("En passant: e3"));
    assert!(stdout.contains("Side to move: Black"));
    assert!(stdout.contains("Could not read move"));
    assert!(stdout.contains("Illegal move: Black knight on b8 cannot legally move to b6"));
    // input after quit is ignored
    assert!(!stdout.contains("En passant: e6"));
}

#[test]
fn cli_accepts_fen_option() {
    let exe = env!("CARGO_BIN_EXE_chess_position");
    let mut child = Command::new(exe)
        .args(["--fen", "4k3/8/8/8/8/8/8/K6R w - - 0 1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"r h1 e1\nquit\n")
        .unwrap();

    let output = child.wait_with_output().expect("failed to read output");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Black king in check."));
}

#[test]
fn cli_rejects_bad_fen() {
    let exe = env!("CARGO_BIN_EXE_chess_position");
    let output = Command::new(exe)
        .args(["--fen", "not a fen"])
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid FEN"));
}
