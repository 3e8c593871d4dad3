#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run the binary with `input` on stdin. `CMDFM_CONFIG` points at `config`
/// so a developer's real config never leaks into the test.
pub fn run_cmdfm(args: &[&str], input: &str, config: &Path) -> Output {
    let me = assert_cmd::cargo::cargo_bin!("cmdfm");
    let mut child = Command::new(me)
        .args(args)
        .env("CMDFM_CONFIG", config)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

pub fn stdout_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

pub fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}
