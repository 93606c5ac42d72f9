//! End-to-end protocol tests against the built binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn decint() -> Command {
    Command::cargo_bin("decint").expect("binary not found")
}

#[test]
fn help_flag() {
    decint()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("decint"));
}

#[test]
fn version_flag() {
    decint()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("decint"));
}

#[test]
fn empty_input_exits_zero() {
    decint().write_stdin("").assert().success().stdout("");
}

#[test]
fn large_addition() {
    decint()
        .write_stdin("U add 123456789012345678901234567890 987654321098765432109876543210\n")
        .assert()
        .success()
        .stdout("OK 1111111110111111111011111111100\n");
}

#[test]
fn subtraction_and_multiplication() {
    decint()
        .write_stdin(
            "U sub 987654321098765432109876543210 123456789012345678901234567890\n\
             U mul 123456789012345678901234567890 42\n",
        )
        .assert()
        .success()
        .stdout(
            "OK 864197532086419753208641975320\n\
             OK 5185185138518518513851851851380\n",
        );
}

#[test]
fn division_and_modulus() {
    decint()
        .write_stdin(
            "U div 123456789012345678901234567890 123456789\n\
             U mod 123456789012345678901234567890 123456789\n",
        )
        .assert()
        .success()
        .stdout(
            "OK 1000000007371000000094600000008\n\
             OK 82000000098\n",
        );
}

#[test]
fn division_by_zero_reports_exception() {
    decint()
        .write_stdin("U div 100 0\n")
        .assert()
        .success()
        .stdout("EXC UnsignedInteger division error: divisor is zero.\n");
}

#[test]
fn signed_operations() {
    decint()
        .write_stdin("S add -5 3\nS mul -6 -7\nS div -7 2\nS mod -7 2\nS cmp -1 1\n")
        .assert()
        .success()
        .stdout("OK -2\nOK 42\nOK -3\nOK -1\nOK -1\n");
}

#[test]
fn conversions_and_protocol_errors() {
    decint()
        .write_stdin(
            "U to_str 000123\n\
             S to_s64 -42\n\
             S to_u64 -42\n\
             U to_double 12345\n\
             X add 1 2\n\
             U nope 1\n\
             U add 1\n\
             \n\
             U cmp 5 5\n",
        )
        .assert()
        .success()
        .stdout(
            predicate::str::contains("OK 123\n")
                .and(predicate::str::contains("OK -42\n"))
                .and(predicate::str::contains(
                    "EXC UnsignedInteger conversion error",
                ))
                .and(predicate::str::contains("OK 12345\n"))
                .and(predicate::str::contains("EXC unknown type\n"))
                .and(predicate::str::contains("EXC unknown op\n"))
                .and(predicate::str::contains("EXC missing operand\n"))
                .and(predicate::str::contains("OK 0\n")),
        );
}

#[test]
fn input_file_flag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.txt");
    std::fs::write(&path, "U add 40 2\n").unwrap();
    decint()
        .arg("--input")
        .arg(&path)
        .assert()
        .success()
        .stdout("OK 42\n");
}

#[test]
fn blank_and_whitespace_lines_are_skipped() {
    decint()
        .write_stdin("\n   \nU add 1 1\n\t\n")
        .assert()
        .success()
        .stdout("OK 2\n");
}
