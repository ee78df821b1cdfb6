// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! End-to-end tests for the wildparen binary.

#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn wildparen() -> Command {
    let mut cmd = Command::cargo_bin("wildparen").unwrap();
    cmd.env_remove("WILDPAREN_LENIENT").env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// Stdin Token
// =============================================================================

mod stdin_token {
    use super::*;

    #[test]
    fn test_balanced_prints_true() {
        wildparen()
            .write_stdin("(*)\n")
            .assert()
            .success()
            .stdout("true\n");
    }

    #[test]
    fn test_unbalanced_prints_false_and_succeeds() {
        wildparen()
            .write_stdin(")(\n")
            .assert()
            .code(0)
            .stdout("false\n");
    }

    #[test]
    fn test_leading_whitespace_skipped() {
        wildparen()
            .write_stdin("\n   (*))  trailing\n")
            .assert()
            .success()
            .stdout("true\n");
    }

    #[test]
    fn test_no_input_fails() {
        wildparen()
            .write_stdin("")
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Error: no input provided"));
    }
}

// =============================================================================
// Arguments
// =============================================================================

mod arguments {
    use super::*;

    #[test]
    fn test_positional_input() {
        wildparen()
            .arg("(((*)")
            .assert()
            .success()
            .stdout("false\n");
    }

    #[test]
    fn test_empty_positional_input() {
        wildparen().arg("").assert().success().stdout("true\n");
    }

    #[test]
    fn test_all_mode() {
        wildparen()
            .arg("--all")
            .write_stdin("() )(\n(*)) *\n")
            .assert()
            .success()
            .stdout("true\nfalse\ntrue\ntrue\n");
    }

    #[test]
    fn test_json_output() {
        wildparen()
            .args(["--output-format", "json", "())"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""valid":false"#))
            .stdout(predicate::str::contains(r#""rejected_at":2"#));
    }

    #[test]
    fn test_all_conflicts_with_positional() {
        wildparen().args(["--all", "()"]).assert().failure();
    }
}

// =============================================================================
// Alphabet Policy
// =============================================================================

mod alphabet {
    use super::*;

    #[test]
    fn test_foreign_char_rejected() {
        wildparen()
            .arg("(a)")
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("unexpected character 'a' at position 1"))
            .stderr(predicate::str::contains("--lenient"));
    }

    #[test]
    fn test_lenient_flag_skips_foreign_char() {
        wildparen()
            .args(["--lenient", "(a)"])
            .assert()
            .success()
            .stdout("true\n");
    }

    #[test]
    fn test_lenient_env_skips_foreign_char() {
        for value in ["true", "1", "yes", "on"] {
            wildparen()
                .env("WILDPAREN_LENIENT", value)
                .arg("(a)")
                .assert()
                .success()
                .stdout("true\n");
        }
    }

    #[test]
    fn test_lenient_env_false_values_stay_strict() {
        for value in ["false", "0", "no", "off"] {
            wildparen()
                .env("WILDPAREN_LENIENT", value)
                .arg("(a)")
                .assert()
                .code(1);
        }
    }
}

// =============================================================================
// Test Case Files
// =============================================================================

mod case_files {
    use super::*;

    fn write_cases(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_all_cases_pass() {
        let file = write_cases(
            r#"[{"input": "(*))", "output": true}, {"input": "(((*)", "output": false}]"#,
        );
        wildparen()
            .arg("--cases")
            .arg(file.path())
            .assert()
            .success()
            .stdout("Test Case 1: Passed\nTest Case 2: Passed\n2 passed, 0 failed\n");
    }

    #[test]
    fn test_failing_case_reported_and_exits_nonzero() {
        let file = write_cases(r#"[{"input": ")(", "output": true}]"#);
        wildparen()
            .arg("--cases")
            .arg(file.path())
            .assert()
            .code(3)
            .stdout(predicate::str::contains("Test Case 1: Failed"))
            .stdout(predicate::str::contains("   Input: \")(\""))
            .stdout(predicate::str::contains("   Expected: true"))
            .stdout(predicate::str::contains("   Actual: false"))
            .stderr(predicate::str::contains("1 of 1 test cases failed"));
    }

    #[test]
    fn test_json_report() {
        let file = write_cases(r#"[{"input": "()", "output": false}]"#);
        wildparen()
            .args(["--output-format", "json", "--cases"])
            .arg(file.path())
            .assert()
            .code(3)
            .stdout(predicate::str::contains(r#""status":"failed""#));
    }

    #[test]
    fn test_malformed_file_rejected() {
        let file = write_cases(r#"[{"input": "()"}]"#);
        wildparen()
            .arg("--cases")
            .arg(file.path())
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("missing field `output`"));
    }
}

// =============================================================================
// Logging
// =============================================================================

mod logging {
    use super::*;

    #[test]
    fn test_quiet_by_default() {
        wildparen().arg("())").assert().success().stderr("");
    }

    #[test]
    fn test_verbose_logs_rejection() {
        wildparen()
            .args(["--verbose", "())"])
            .assert()
            .success()
            .stdout("false\n")
            .stderr(predicate::str::contains("unmatched ')' at position 2"));
    }
}
