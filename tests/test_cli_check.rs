use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use dungsem::solvers::ConsistencyLaw;
use predicates::prelude::{predicate, PredicateBooleanExt};
use strum::IntoEnumIterator;

#[test]
fn test_check_ok() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str("% a comment\narg(a).\narg(b).\natt(a,b).\natt(b,b).\n")?;
    let mut cmd = Command::cargo_bin("dungsem")?;
    cmd.arg("check").arg("-f").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::eq("2 argument(s), 2 attack(s)\n"));
    file.close()?;
    Ok(())
}

#[test]
fn test_check_duplicate_argument_is_a_warning() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str("arg(a).\narg(a).\n")?;
    let mut cmd = Command::cargo_bin("dungsem")?;
    cmd.arg("check").arg("-f").arg(file.path());
    cmd.assert()
        .success()
        .stdout(predicate::eq("1 argument(s), 0 attack(s)\n"))
        .stderr(predicate::str::contains("at line 2").and(predicate::str::contains("already defined")));
    file.close()?;
    Ok(())
}

#[test]
fn test_check_unknown_argument() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str("arg(a).\natt(a,b).\n")?;
    let mut cmd = Command::cargo_bin("dungsem")?;
    cmd.arg("check").arg("-f").arg(file.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("caused by"));
    file.close()?;
    Ok(())
}

#[test]
fn test_check_missing_file() {
    let mut cmd = Command::cargo_bin("dungsem").unwrap();
    cmd.arg("check").arg("-f").arg("/this/file/does/not/exist.apx");
    cmd.assert().failure().stdout(predicate::str::is_empty());
}

#[test]
fn test_consistency_ok() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str("arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,a).\natt(b,c).\natt(c,c).\n")?;
    let mut cmd = Command::cargo_bin("dungsem")?;
    cmd.arg("consistency")
        .arg("-f")
        .arg(file.path())
        .arg("--logging-level")
        .arg("off");
    cmd.assert().success().stdout(
        predicate::str::contains("OK")
            .and(predicate::str::contains("FAILED").not())
            .and(predicate::function(|s: &str| {
                s.lines().count() == ConsistencyLaw::iter().count()
            })),
    );
    file.close()?;
    Ok(())
}

#[test]
fn test_consistency_fails_on_truncated_search() -> Result<(), Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("test_instance.apx")?;
    file.write_str("arg(a).\narg(b).\narg(c).\narg(d).\natt(a,b).\natt(a,c).\natt(b,a).\natt(b,c).\natt(c,d).\natt(d,c).\n")?;
    let mut cmd = Command::cargo_bin("dungsem")?;
    cmd.arg("consistency")
        .arg("-f")
        .arg(file.path())
        .arg("--max-sets")
        .arg("1")
        .arg("--logging-level")
        .arg("off");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("GroundedIsIntersectionOfComplete: FAILED"));
    file.close()?;
    Ok(())
}
