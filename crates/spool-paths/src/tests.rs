use std::path::Path;

use crate::resolve::resolve_local;
use crate::users::StaticUserDirs;

fn users() -> StaticUserDirs {
    StaticUserDirs::new().with("alice", "/home/alice")
}

#[test]
fn absolute_path_is_returned_unchanged() {
    let pubdir = Path::new("/var/spool/uucppublic");
    let cwd = Path::new("/home/u");
    let resolved = resolve_local("/abs/path", pubdir, cwd, &users()).unwrap();
    assert_eq!(resolved, Path::new("/abs/path"));
}

#[test]
fn bare_tilde_resolves_to_public_directory() {
    let pubdir = Path::new("/var/spool/uucppublic");
    let cwd = Path::new("/home/u");
    let resolved = resolve_local("~", pubdir, cwd, &users()).unwrap();
    assert_eq!(resolved, pubdir);
}

#[test]
fn tilde_slash_anchors_under_public_directory() {
    let pubdir = Path::new("/var/spool/uucppublic");
    let cwd = Path::new("/home/u");
    let resolved = resolve_local("~/foo", pubdir, cwd, &users()).unwrap();
    assert_eq!(resolved, pubdir.join("foo"));
}

#[test]
fn tilde_user_anchors_under_their_home() {
    let pubdir = Path::new("/var/spool/uucppublic");
    let cwd = Path::new("/home/u");
    let resolved = resolve_local("~alice/x", pubdir, cwd, &users()).unwrap();
    assert_eq!(resolved, Path::new("/home/alice/x"));
}

#[test]
fn tilde_unknown_user_is_an_error() {
    let pubdir = Path::new("/var/spool/uucppublic");
    let cwd = Path::new("/home/u");
    let err = resolve_local("~nobody/x", pubdir, cwd, &users()).unwrap_err();
    assert!(matches!(err, crate::PathError::UnknownUser { .. }));
}

#[test]
fn relative_path_anchors_under_cwd() {
    let pubdir = Path::new("/var/spool/uucppublic");
    let cwd = Path::new("/home/u");
    let resolved = resolve_local("rel", pubdir, cwd, &users()).unwrap();
    assert_eq!(resolved, cwd.join("rel"));
}
