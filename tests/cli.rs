use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn problems_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("problems")
}

fn run_doubler(input: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_doubler"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn doubler");

    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write stdin");

    child.wait_with_output().expect("wait for doubler")
}

fn check_sample(name: &str) {
    let dir = problems_dir();
    let input = std::fs::read(dir.join(format!("{name}.in"))).expect("read .in");
    let answer = std::fs::read_to_string(dir.join(format!("{name}.ans"))).expect("read .ans");

    let output = run_doubler(&input);

    assert_eq!(output.status.code(), Some(0), "{name}: exit status");
    assert_eq!(String::from_utf8_lossy(&output.stdout), answer, "{name}: stdout");
    assert_eq!(String::from_utf8_lossy(&output.stderr), "", "{name}: stderr");
}

#[test]
fn sample_test() {
    check_sample("test");
}

#[test]
fn sample_test_1() {
    check_sample("test.1");
}

#[test]
fn sample_test_2() {
    check_sample("test.2");
}

#[test]
fn empty_stdin_exits_cleanly() {
    let output = run_doubler(b"");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn same_input_same_output() {
    let input = b"3\nabc\n-2.5\n0.1\n";
    let first = run_doubler(input);
    let second = run_doubler(input);
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(String::from_utf8_lossy(&first.stdout), "6\nNaN\n-5\n0.2\n");
}

#[test]
fn help_mentions_stdin() {
    let output = Command::new(env!("CARGO_BIN_EXE_doubler"))
        .arg("--help")
        .output()
        .expect("run doubler --help");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("stdin"));
}
