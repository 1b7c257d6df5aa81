// CLI surface smoke tests. Flows that touch drives or package managers are
// covered by unit tests against mock backends instead.

use assert_cmd::Command;
use predicates::prelude::*;

fn rehome() -> Command {
    Command::cargo_bin("rehome").unwrap()
}

#[test]
fn help_lists_the_subcommands() {
    rehome()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("export"))
        .stdout(predicate::str::contains("import"))
        .stdout(predicate::str::contains("drives"));
}

#[test]
fn version_flag_works() {
    rehome()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rehome"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    rehome().arg("frobnicate").assert().failure();
}

#[test]
fn import_rejects_unknown_priority() {
    rehome()
        .args(["import", "--priority", "snap"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--priority"));
}

#[test]
fn import_help_documents_the_flags() {
    rehome()
        .args(["import", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--priority"))
        .stdout(predicate::str::contains("--skip-apps"))
        .stdout(predicate::str::contains("--drive"));
}
