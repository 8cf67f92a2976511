use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::predicate;

const CLEAN_INSTANCE: &str = r#"rung(main).
contact(main, X001, [w1], [w2]).
coil(main, Y001, [w2], []).
comment(X001, start push button).
comment(Y001, motor relay).
"#;

const UNCOMMENTED_INSTANCE: &str = r#"rung(main).
contact(main, X001, [w1], [w2]).
coil(main, Y001, [w2], []).
"#;

fn lint_instance(
    instance: &str,
    additional_args: &[&str],
) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("program.lad")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("rungcheck")?;
    cmd.arg("lint").arg("-f").arg(file.path());
    for a in additional_args {
        cmd.arg(a);
    }
    let assert = cmd.assert();
    file.close().unwrap();
    Ok(assert)
}

#[test]
fn test_lint_clean_program() -> Result<(), Box<dyn std::error::Error>> {
    lint_instance(CLEAN_INSTANCE, &[])?
        .success()
        .stdout(predicate::str::contains("0 violation(s) found"));
    Ok(())
}

#[test]
fn test_lint_uncommented_program() -> Result<(), Box<dyn std::error::Error>> {
    lint_instance(UNCOMMENTED_INSTANCE, &[])?
        .failure()
        .stdout(predicate::str::contains("[comment-completeness] X001"))
        .stdout(predicate::str::contains("[comment-completeness] Y001"))
        .stdout(predicate::str::contains("2 violation(s) found"));
    Ok(())
}

#[test]
fn test_lint_rule_selection() -> Result<(), Box<dyn std::error::Error>> {
    lint_instance(UNCOMMENTED_INSTANCE, &["--rule", "series-contacts"])?
        .success()
        .stdout(predicate::str::contains("0 violation(s) found"));
    Ok(())
}

#[test]
fn test_lint_unknown_rule() -> Result<(), Box<dyn std::error::Error>> {
    lint_instance(CLEAN_INSTANCE, &["--rule", "no-such-rule"])?.failure();
    Ok(())
}

#[test]
fn test_lint_series_contacts_violation() -> Result<(), Box<dyn std::error::Error>> {
    let instance = r#"rung(main).
contact(main, X001, [], [w1]).
contact(main, X002, [w1], [w2]).
contact(main, X003, [w2], [w3]).
contact(main, X004, [w3], [w4]).
contact(main, X005, [w4], [w5]).
"#;
    lint_instance(instance, &["--rule", "series-contacts"])?
        .failure()
        .stdout(predicate::str::contains("[series-contacts] main"));
    Ok(())
}

#[test]
fn test_lint_report_to_file() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("program.lad")?;
    file.write_str(UNCOMMENTED_INSTANCE)?;
    let report = NamedTempFile::new("report.txt")?;
    let mut cmd = Command::cargo_bin("rungcheck")?;
    cmd.arg("lint")
        .arg("-f")
        .arg(file.path())
        .arg("-o")
        .arg(report.path());
    cmd.assert().failure();
    let report_content = std::fs::read_to_string(report.path())?;
    assert!(report_content.contains("2 violation(s) found"));
    file.close().unwrap();
    report.close().unwrap();
    Ok(())
}
