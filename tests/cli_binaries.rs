use std::fs;
use std::path::Path;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn write_config(root: &Path) -> std::path::PathBuf {
    fs::create_dir_all(root.join("host")).unwrap();
    fs::create_dir_all(root.join("public")).unwrap();
    let config = root.join("config.toml");
    fs::write(
        &config,
        format!(
            "[site]\nspool_root = {root:?}\nlock_dir = {root:?}\npublic_dir = {public:?}\nlocal_host = \"here\"\ndefault_grade = \"n\"\n\n[hosts.host]\n",
            public = root.join("public"),
        ),
    )
    .unwrap();
    config
}

#[test]
fn uucp_queues_a_local_to_remote_copy() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let source = dir.path().join("a");
    fs::write(&source, b"hello").unwrap();

    Command::cargo_bin("uucp")
        .unwrap()
        .args([
            "-I",
            config.to_str().unwrap(),
            "-j",
            source.to_str().unwrap(),
            "host!/tmp/a",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("host!C.hostn0001"));

    assert!(dir.path().join("host/C.hostn0001").exists());
}

#[test]
fn uucp_omits_the_job_id_without_the_jobid_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let source = dir.path().join("a");
    fs::write(&source, b"hello").unwrap();

    Command::cargo_bin("uucp")
        .unwrap()
        .args([
            "-I",
            config.to_str().unwrap(),
            source.to_str().unwrap(),
            "host!/tmp/a",
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn uucp_rejects_two_local_paths() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    Command::cargo_bin("uucp")
        .unwrap()
        .args(["-I", config.to_str().unwrap(), "/tmp/a", "/tmp/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not name a remote host"));
}

#[test]
fn uux_queues_a_remote_command() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    Command::cargo_bin("uux")
        .unwrap()
        .args(["-I", config.to_str().unwrap(), "host!rmail", "foo@bar"])
        .assert()
        .success();

    assert!(dir.path().join("host/X.hostn0001").exists());
}

#[test]
fn uux_rejects_a_command_with_no_host() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    Command::cargo_bin("uux")
        .unwrap()
        .args(["-I", config.to_str().unwrap(), "rmail", "foo@bar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not name a host"));
}

#[test]
fn uuchk_reports_a_healthy_site() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());

    Command::cargo_bin("uuchk")
        .unwrap()
        .args(["-I", config.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn uuchk_fails_on_a_missing_spool_root() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "[site]\nspool_root = \"/no/such/spool\"\nlock_dir = \"/no/such/spool\"\npublic_dir = \"/no/such/spool\"\nlocal_host = \"here\"\ndefault_grade = \"n\"\n",
    )
    .unwrap();

    Command::cargo_bin("uuchk")
        .unwrap()
        .args(["-I", config.to_str().unwrap()])
        .assert()
        .failure();
}
