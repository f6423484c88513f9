use std::fs;

use crate::config::SystemTable;
use crate::context::SubmissionContext;
use crate::copy::{submit_copy, CopyDirection, CopyRequest};
use crate::exec::{submit_exec, ExecRequest};

fn context(root: &std::path::Path) -> SubmissionContext {
    fs::create_dir_all(root.join("host")).unwrap();
    fs::create_dir_all(root.join("public")).unwrap();
    let text = format!(
        "[site]\nspool_root = {root:?}\nlock_dir = {root:?}\npublic_dir = {pub_dir:?}\nlocal_host = \"localhost\"\ndefault_grade = \"n\"\n\n[hosts.host]\n",
        pub_dir = root.join("public"),
    );
    SubmissionContext::new(SystemTable::parse(&text).unwrap(), "uucp")
}

#[test]
fn scenario_s1_local_to_remote_copy_without_forced_staging() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("a");
    fs::write(&local, b"hello").unwrap();
    let ctx = context(dir.path());

    let job = submit_copy(
        &ctx,
        CopyRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            local_token: local.to_string_lossy().into_owned(),
            remote_token: "/tmp/a".to_string(),
            direction: CopyDirection::Out,
            grade: None,
            force_copy: false,
            notify: None,
        },
    )
    .unwrap();

    assert_eq!(job.command_file, "C.hostn0001");
    let contents = fs::read_to_string(dir.path().join("host").join("C.hostn0001")).unwrap();
    assert!(contents.starts_with(&format!("S {} /tmp/a u c D.0 0666 \"\"", local.display())));
}

#[test]
fn scenario_s2_local_to_remote_with_forced_copy() {
    let dir = tempfile::tempdir().unwrap();
    let local = dir.path().join("a");
    fs::write(&local, b"hello").unwrap();
    let ctx = context(dir.path());

    let job = submit_copy(
        &ctx,
        CopyRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            local_token: local.to_string_lossy().into_owned(),
            remote_token: "/tmp/a".to_string(),
            direction: CopyDirection::Out,
            grade: None,
            force_copy: true,
            notify: None,
        },
    )
    .unwrap();

    let host_dir = dir.path().join("host");
    assert!(host_dir.join("D.hostn0001").exists());
    assert_eq!(fs::read(host_dir.join("D.hostn0001")).unwrap(), b"hello");
    let contents = fs::read_to_string(host_dir.join(&job.command_file)).unwrap();
    assert!(contents.starts_with(&format!(
        "S {} D.hostn0001 u C D.hostn0001 0666 \"\"",
        local.display()
    )));
}

#[test]
fn copy_in_builds_a_receive_record() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());

    let job = submit_copy(
        &ctx,
        CopyRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            local_token: "/tmp/dest".to_string(),
            remote_token: "/tmp/src".to_string(),
            direction: CopyDirection::In,
            grade: None,
            force_copy: false,
            notify: None,
        },
    )
    .unwrap();

    let contents = fs::read_to_string(dir.path().join("host").join(job.command_file)).unwrap();
    assert_eq!(contents.trim_end(), "R /tmp/src /tmp/dest u \"\"");
}

#[test]
fn scenario_s3_stdin_redirected_from_a_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let msg = dir.path().join("msg");
    fs::write(&msg, b"body").unwrap();
    let ctx = context(dir.path());

    let job = submit_exec(
        &ctx,
        ExecRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            cmd: "rmail".to_string(),
            args: vec![format!("<{}", msg.display()), "foo@bar".to_string()],
            ..Default::default()
        },
    )
    .unwrap();

    let host_dir = dir.path().join("host");
    assert!(host_dir.join("D.hostn0001").exists());
    assert_eq!(fs::read(host_dir.join("D.hostn0001")).unwrap(), b"body");

    let xf = fs::read_to_string(host_dir.join("X.hostn0001")).unwrap();
    assert!(xf.contains("F D.hostn0001\n"));
    assert!(xf.contains("I D.hostn0001\n"));
    assert!(xf.contains("C rmail foo@bar\n"));

    let cf = fs::read_to_string(host_dir.join(job.command_file)).unwrap();
    let lines: Vec<&str> = cf.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(&format!("S {} D.hostn0001 u C D.hostn0001 0600", msg.display())));
    assert_eq!(lines[1], "S X.hostn0001 X.hostn0001 u C X.hostn0001 0666 \"\"");
}

#[test]
fn scenario_s4_stdout_redirected_to_a_third_host() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());

    submit_exec(
        &ctx,
        ExecRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            cmd: "cmd".to_string(),
            args: vec![">host2!/out".to_string()],
            ..Default::default()
        },
    )
    .unwrap();

    let xf = fs::read_to_string(dir.path().join("host").join("X.hostn0001")).unwrap();
    assert!(xf.contains("O /out host2\n"));
    assert!(!xf.contains('>'));
}

#[test]
fn scenario_s5_parenthesized_exclamation_is_passed_through_literally() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());

    submit_exec(
        &ctx,
        ExecRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            cmd: "cmd".to_string(),
            args: vec!["(a!b)".to_string()],
            ..Default::default()
        },
    )
    .unwrap();

    let xf = fs::read_to_string(dir.path().join("host").join("X.hostn0001")).unwrap();
    assert!(xf.lines().last().unwrap() == "C cmd a!b");
}

#[test]
fn exec_with_no_staged_files_mints_no_data_name() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());

    submit_exec(
        &ctx,
        ExecRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            cmd: "true".to_string(),
            args: vec![],
            ..Default::default()
        },
    )
    .unwrap();

    assert!(!dir.path().join("host").join("D.hostn0001").exists());
    assert!(dir.path().join("host").join("X.hostn0001").exists());
}

#[test]
fn illegal_grade_falls_back_to_the_host_default() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), b"x").unwrap();
    let ctx = context(dir.path());

    let job = submit_copy(
        &ctx,
        CopyRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            local_token: dir.path().join("a").to_string_lossy().into_owned(),
            remote_token: "/tmp/a".to_string(),
            direction: CopyDirection::Out,
            grade: Some('!'),
            force_copy: false,
            notify: None,
        },
    )
    .unwrap();

    assert_eq!(job.command_file, "C.hostn0001");
}

#[test]
fn submit_copy_fails_when_the_peer_lock_is_already_held() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), b"x").unwrap();
    let ctx = context(dir.path());

    let lock_name = spool_lock::peer_lock_name("host");
    let _held = ctx.locks.acquire(&lock_name).unwrap().unwrap();

    let err = submit_copy(
        &ctx,
        CopyRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            local_token: dir.path().join("a").to_string_lossy().into_owned(),
            remote_token: "/tmp/a".to_string(),
            direction: CopyDirection::Out,
            grade: None,
            force_copy: false,
            notify: None,
        },
    )
    .unwrap_err();

    assert!(matches!(err, crate::error::SubmitError::LockBusy(name) if name == lock_name));
    assert!(!dir.path().join("host").join("C.hostn0001").exists());
}

#[test]
fn submit_exec_fails_when_the_peer_lock_is_already_held() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());

    let lock_name = spool_lock::peer_lock_name("host");
    let _held = ctx.locks.acquire(&lock_name).unwrap().unwrap();

    let err = submit_exec(
        &ctx,
        ExecRequest {
            user: "u".to_string(),
            peer: "host".to_string(),
            cmd: "true".to_string(),
            args: vec![],
            ..Default::default()
        },
    )
    .unwrap_err();

    assert!(matches!(err, crate::error::SubmitError::LockBusy(name) if name == lock_name));
}

#[test]
fn unknown_host_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(dir.path());
    let err = submit_copy(
        &ctx,
        CopyRequest {
            user: "u".to_string(),
            peer: "ghost".to_string(),
            local_token: "/tmp/a".to_string(),
            remote_token: "/tmp/b".to_string(),
            direction: CopyDirection::Out,
            grade: None,
            force_copy: false,
            notify: None,
        },
    )
    .unwrap_err();
    assert!(matches!(err, crate::error::SubmitError::UnknownHost(h) if h == "ghost"));
}
