#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at an empty directory so a user
/// config file never leaks into the results.
pub fn rbt() -> Command {
    let mut cmd = cargo_bin_cmd!("rbuildtimes");
    cmd.env("HOME", empty_home());
    cmd
}

fn empty_home() -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("rbuildtimes_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Write `content` to a unique log file inside the system temp dir
pub fn write_log(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbuildtimes.log", name));
    fs::write(&path, content).expect("write test log");
    path.to_string_lossy().to_string()
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// A reactor summary as printed by Maven, surrounded by ordinary noise.
pub const SAMPLE_LOG: &str = "\
[INFO] Scanning for projects...
[INFO] ------------------------------------------------------------------------
[INFO] Reactor Summary for parent 1.0.0-SNAPSHOT:
[INFO]
[INFO] parent ............................................. SUCCESS [  0.412 s]
[INFO] core-lib ........................................... SUCCESS [01:50 min]
[INFO] web app ............................................ SUCCESS [  5.990 s]
[INFO] integration-tests .................................. FAILED [  1.5 min]
[INFO] docs ............................................... SKIPPED
[INFO] ------------------------------------------------------------------------
[INFO] BUILD FAILURE
[INFO] Total time:  03:46 min
";
