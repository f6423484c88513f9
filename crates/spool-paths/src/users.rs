use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Looks up a local account's home directory.
///
/// Abstracted behind a trait so the resolver can be exercised in tests
/// without depending on the accounts actually configured on the machine
/// running the test suite — the production implementation
/// ([`RealUserDirs`]) is the only one that touches the system account
/// database.
pub trait UserDirs {
    /// Returns the home directory of `user`, or `None` if no such account
    /// exists.
    fn home_dir(&self, user: &str) -> Option<PathBuf>;
}

/// Looks accounts up via the host's password database (`getpwnam(3)`).
#[derive(Debug, Default, Clone, Copy)]
pub struct RealUserDirs;

#[cfg(unix)]
impl UserDirs for RealUserDirs {
    fn home_dir(&self, user: &str) -> Option<PathBuf> {
        let passwd = nix::unistd::User::from_name(user).ok()??;
        if passwd.dir.as_os_str().is_empty() {
            return None;
        }
        Some(passwd.dir)
    }
}

#[cfg(not(unix))]
impl UserDirs for RealUserDirs {
    fn home_dir(&self, _user: &str) -> Option<PathBuf> {
        None
    }
}

/// A fixed table of account → home directory, for tests and for hosts that
/// supply their own user map instead of consulting the system database.
#[derive(Debug, Default, Clone)]
pub struct StaticUserDirs(HashMap<String, PathBuf>);

impl StaticUserDirs {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Registers `user`'s home directory.
    #[must_use]
    pub fn with(mut self, user: impl Into<String>, home: impl AsRef<Path>) -> Self {
        self.0.insert(user.into(), home.as_ref().to_path_buf());
        self
    }
}

impl UserDirs for StaticUserDirs {
    fn home_dir(&self, user: &str) -> Option<PathBuf> {
        self.0.get(user).cloned()
    }
}
