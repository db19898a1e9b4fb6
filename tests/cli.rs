//! Command dispatch and exit codes of the mk binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn mk() -> Command {
    let mut cmd = Command::cargo_bin("mk").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn no_arguments_prints_help() {
    mk().assert()
        .success()
        .stdout(predicate::str::contains("Available commands"));
}

#[test]
fn help_aliases_print_help() {
    for alias in ["help", "h", "-h", "--help"] {
        mk().arg(alias)
            .assert()
            .success()
            .stdout(predicate::str::contains("init fork"));
    }
}

#[test]
fn subcommand_help_flag_prints_help() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"name":"new"}"#).unwrap();

    for args in [["init", "--help"], ["dev", "-h"], ["merge", "--help"]] {
        mk().current_dir(dir.path())
            .args(args)
            .assert()
            .success()
            .stdout(predicate::str::contains("Available commands"));
    }

    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        r#"{"name":"new"}"#
    );
}

#[test]
fn version_aliases_print_version() {
    for alias in ["version", "v", "-v", "--version"] {
        mk().arg(alias)
            .assert()
            .success()
            .stdout(predicate::str::diff(format!("version {}\n", env!("CARGO_PKG_VERSION"))));
    }
}

// Unknown commands take the usage-error path instead of exiting silently
#[test]
fn unknown_command_is_usage_error() {
    mk().arg("bogus-command")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Available commands"))
        .stderr(predicate::str::contains("bogus-command"));
}

#[test]
fn init_with_unknown_mode_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("package.json"), r#"{"name":"new"}"#).unwrap();

    mk().current_dir(dir.path())
        .args(["init", "frok"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("mk init fork"));

    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        r#"{"name":"new"}"#
    );
}

#[test]
fn merge_requires_upstream() {
    let dir = tempfile::tempdir().unwrap();
    mk().current_dir(dir.path())
        .args(["merge", "origin"])
        .assert()
        .code(2);
}

#[test]
fn build_minifies_styles() {
    let dir = tempfile::tempdir().unwrap();
    let css = dir.path().join("internal/ui/css/components");
    fs::create_dir_all(&css).unwrap();
    fs::write(css.join("button.css"), "/* button */\n.btn {\n  color: red;\n}\n").unwrap();

    mk().current_dir(dir.path()).arg("build").assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("dist/public/css/components/button.css")).unwrap(),
        ".btn{color: red}"
    );
    assert!(dir.path().join("dist/public/js").is_dir());
}

#[test]
fn dev_copies_styles_and_tolerates_missing_scripts() {
    let dir = tempfile::tempdir().unwrap();
    let css = dir.path().join("internal/ui/css");
    fs::create_dir_all(&css).unwrap();
    fs::write(css.join("app.css"), "body {\n  margin: 0;\n}\n").unwrap();

    mk().current_dir(dir.path()).arg("dev").assert().success();

    assert_eq!(
        fs::read_to_string(dir.path().join("public/css/app.css")).unwrap(),
        "body {\n  margin: 0;\n}\n"
    );
    assert!(!dir.path().join("public/js/app.js").exists());
}

#[cfg(unix)]
#[test]
fn dev_reports_bundler_failures_without_aborting() {
    let dir = tempfile::tempdir().unwrap();
    let ts = dir.path().join("internal/ui/ts");
    fs::create_dir_all(&ts).unwrap();
    fs::write(ts.join("main.ts"), "export {};").unwrap();
    fs::write(dir.path().join("mk.toml"), "[bundler]\nprogram = \"false\"\n").unwrap();

    mk().current_dir(dir.path())
        .arg("dev")
        .assert()
        .success()
        .stderr(predicate::str::contains("main.ts"));
}

#[test]
fn invalid_config_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("mk.toml"),
        "[dirs.style]\nsource = \"internal/ui/ts\"\ndev = \"a\"\nbuild = \"b\"\n",
    )
    .unwrap();

    mk().current_dir(dir.path()).arg("build").assert().code(1);
}
