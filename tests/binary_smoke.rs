mod common;

use common::{run_cmdfm, stderr_of, stdout_of};
use std::fs;
use std::process::Command;
use tempfile::tempdir;

const GOODBYE: &str = "Exiting program. Goodbye!";

#[test]
fn binary_print_config_succeeds() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    let out = run_cmdfm(&["--print-config"], "", &cfg);
    assert!(out.status.success(), "binary should succeed with --print-config");
    assert!(stdout_of(&out).contains(&cfg.display().to_string()));
}

#[test]
fn positional_arguments_are_rejected() {
    let me = assert_cmd::cargo::cargo_bin!("cmdfm");
    let out = Command::new(me).arg("/some/dir").output().expect("spawn binary");
    assert!(!out.status.success());
}

#[test]
fn exit_choice_says_goodbye_once() {
    let td = tempdir().unwrap();
    let out = run_cmdfm(&[], "3\n", &td.path().join("none.xml"));
    assert!(out.status.success());
    let stdout = stdout_of(&out);
    assert!(stdout.contains("Main Menu:"));
    assert_eq!(stdout.matches(GOODBYE).count(), 1);
}

#[test]
fn closed_stdin_exits_cleanly() {
    let td = tempdir().unwrap();
    let out = run_cmdfm(&[], "", &td.path().join("none.xml"));
    assert!(out.status.success());
    assert_eq!(stdout_of(&out).matches(GOODBYE).count(), 1);
}

#[test]
fn non_numeric_choice_warns_and_reprompts() {
    let td = tempdir().unwrap();
    let out = run_cmdfm(&[], "abc\n7\n3\n", &td.path().join("none.xml"));
    assert!(out.status.success());
    let stderr = stderr_of(&out);
    assert!(stderr.contains("Invalid input. Please enter a number."), "stderr: {stderr}");
    assert!(stderr.contains("Invalid choice."), "stderr: {stderr}");
}

#[test]
fn init_config_writes_template_once() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("cfg").join("config.xml");
    let out = run_cmdfm(&["--init-config"], "", &cfg);
    assert!(out.status.success(), "stderr: {}", stderr_of(&out));
    assert!(fs::read_to_string(&cfg).unwrap().contains("<session_mode>loop</session_mode>"));

    let again = run_cmdfm(&["--init-config"], "", &cfg);
    assert!(!again.status.success());
}

#[test]
fn malformed_config_fails_before_the_menu() {
    let td = tempdir().unwrap();
    let cfg = td.path().join("config.xml");
    fs::write(&cfg, "<config><colour>red</colour></config>").unwrap();
    let out = run_cmdfm(&[], "3\n", &cfg);
    assert!(!out.status.success());
    assert!(!stdout_of(&out).contains("Main Menu:"));
}
