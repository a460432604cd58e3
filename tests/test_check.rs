use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::predicate;

fn check(instance: &str) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("graph.bag")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("bagarre")?;
    cmd.arg("check")
        .arg("-f")
        .arg(file.path())
        .arg("--logging-level")
        .arg("off");
    let assert = cmd.assert();
    file.close()?;
    Ok(assert)
}

#[test]
fn test_check_ok() -> Result<(), Box<dyn std::error::Error>> {
    check("arg(a, 0.6).\narg(b).\natt(a, b).\nsup(b, a, 0.3).\n% comment\n")?
        .success()
        .stdout(predicate::eq(
            "2 argument(s), 1 attack(s), 1 support(s)\n",
        ));
    Ok(())
}

#[test]
fn test_check_warnings_are_not_errors() -> Result<(), Box<dyn std::error::Error>> {
    check("arg(a).\narg(a).\nsomething else\n")?
        .success()
        .stdout(predicate::eq(
            "1 argument(s), 0 attack(s), 0 support(s)\n",
        ));
    Ok(())
}

#[test]
fn test_check_undeclared_argument() -> Result<(), Box<dyn std::error::Error>> {
    check("arg(a).\natt(a, b).\n")?.failure().code(1);
    Ok(())
}

#[test]
fn test_check_weight_out_of_range() -> Result<(), Box<dyn std::error::Error>> {
    check("arg(a, 1.2).\n")?.failure().code(1);
    Ok(())
}

#[test]
fn test_check_missing_file() {
    let mut cmd = Command::cargo_bin("bagarre").unwrap();
    cmd.arg("check").arg("-f").arg("/this/file/does/not/exist.bag");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("while opening file"));
}
