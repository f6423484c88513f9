use std::collections::HashSet;

use crate::namer::{FileKind, SpoolNamer};
use crate::Grade;

#[test]
fn concurrent_mints_for_the_same_host_grade_are_pairwise_distinct() {
    let dir = tempfile::tempdir().unwrap();
    let namer = SpoolNamer::new();
    let grade = Grade::parse('d').unwrap();

    let mut names = HashSet::new();
    for _ in 0..25 {
        let job = namer
            .mint_job(dir.path(), "host", grade, &[FileKind::Command])
            .unwrap();
        let name = job.name(FileKind::Command).unwrap();
        assert!(names.insert(name), "minted a duplicate spool name");
    }
}

#[test]
fn minted_names_never_exist_before_the_call() {
    let dir = tempfile::tempdir().unwrap();
    let namer = SpoolNamer::new();
    let grade = Grade::parse('a').unwrap();

    // Pre-create the first sequence number's data file to force a retry.
    std::fs::write(dir.path().join("D.hostna0001"), b"").unwrap();

    let job = namer
        .mint_job(dir.path(), "hostna", grade, &[FileKind::Data])
        .unwrap();
    assert_ne!(job.seq(), 1, "namer should have skipped the occupied sequence number");
}

#[test]
fn job_names_share_one_sequence_across_kinds() {
    let dir = tempfile::tempdir().unwrap();
    let namer = SpoolNamer::new();
    let grade = Grade::parse('n').unwrap();

    let job = namer
        .mint_job(
            dir.path(),
            "host",
            grade,
            &[FileKind::Command, FileKind::Data, FileKind::Execute],
        )
        .unwrap();

    let c = job.name(FileKind::Command).unwrap();
    let d = job.name(FileKind::Data).unwrap();
    let x = job.name(FileKind::Execute).unwrap();
    assert_eq!(&c[2..], &d[2..]);
    assert_eq!(&c[2..], &x[2..]);
}

#[test]
fn temp_names_are_unique_within_a_directory() {
    let dir = tempfile::tempdir().unwrap();
    let namer = SpoolNamer::new();

    let mut seen = HashSet::new();
    for _ in 0..25 {
        let path = namer.mint_temp(dir.path(), 4242).unwrap();
        assert!(seen.insert(path));
    }
}

#[test]
fn host_prefix_truncates_long_host_names() {
    let prefix = crate::host_prefix("averylonghostname").unwrap();
    assert_eq!(prefix.len(), crate::MAX_HOST_PREFIX);
    assert_eq!(prefix, "averylo");
}
