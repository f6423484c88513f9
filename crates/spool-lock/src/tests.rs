use crate::manager::LockManager;
use crate::names::peer_lock_name;

#[test]
fn acquire_then_acquire_again_is_busy() {
    let dir = tempfile::tempdir().unwrap();
    let mgr = LockManager::new(dir.path());
    let name = peer_lock_name("hosta");

    let first = mgr.acquire(&name).unwrap();
    assert!(first.is_some());

    let second = mgr.acquire(&name).unwrap();
    assert!(second.is_none(), "lock should be busy while first guard lives");
}

#[test]
fn dropping_the_guard_releases_the_lock() {
    let dir = tempfile::tempdir().unwrap();
    let mgr = LockManager::new(dir.path());
    let name = peer_lock_name("hostb");

    {
        let _guard = mgr.acquire(&name).unwrap().unwrap();
        assert!(mgr.is_locked(&name).unwrap());
    }

    assert!(!mgr.is_locked(&name).unwrap());
}

#[test]
fn stale_lock_from_a_dead_pid_is_broken() {
    let dir = tempfile::tempdir().unwrap();
    let mgr = LockManager::new(dir.path());
    let name = "LCK..XQT-test";

    // A PID essentially guaranteed not to be alive in any test sandbox.
    std::fs::write(dir.path().join(name), "999999999\n").unwrap();

    let acquired = mgr.acquire(name).unwrap();
    assert!(acquired.is_some(), "stale lock should have been broken");
}

#[test]
fn live_pid_lock_is_never_broken() {
    let dir = tempfile::tempdir().unwrap();
    let mgr = LockManager::new(dir.path());
    let name = "LCK..self";

    std::fs::write(dir.path().join(name), format!("{}\n", std::process::id())).unwrap();

    let acquired = mgr.acquire(name).unwrap();
    assert!(acquired.is_none(), "lock held by a live PID must stay busy");
}

#[test]
fn explicit_release_works_without_dropping() {
    let dir = tempfile::tempdir().unwrap();
    let mgr = LockManager::new(dir.path());
    let name = "LCK..rel";

    let guard = mgr.acquire(name).unwrap().unwrap();
    guard.release();
    assert!(!mgr.is_locked(name).unwrap());
}
