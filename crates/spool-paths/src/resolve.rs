use std::path::{Path, PathBuf};

use crate::error::PathError;
use crate::users::UserDirs;

/// Where a resolved relative path is anchored when the token names neither
/// an absolute path nor a `~`-prefixed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor<'a> {
    /// Anchor relative tokens at this working directory (local use).
    Cwd(&'a Path),
    /// Anchor relative tokens at a peer's public directory (remote use).
    PeerPublicDir(&'a Path),
}

/// Resolves `token` for local use: relative tokens are anchored at `cwd`.
///
/// Implements rules 1–4 of §4.A. Rule 5 (appending a base name under a
/// resolved directory) is [`crate::add_base`], applied by the caller after
/// this returns, since it needs a second, independent file argument.
pub fn resolve_local(
    token: &str,
    pubdir: &Path,
    cwd: &Path,
    users: &dyn UserDirs,
) -> Result<PathBuf, PathError> {
    resolve(token, pubdir, Anchor::Cwd(cwd), users)
}

/// Resolves `token` as it should be stored for a remote peer: relative
/// tokens are anchored at that peer's public directory.
pub fn resolve_remote(
    token: &str,
    peer_pubdir: &Path,
    users: &dyn UserDirs,
) -> Result<PathBuf, PathError> {
    resolve(token, peer_pubdir, Anchor::PeerPublicDir(peer_pubdir), users)
}

fn resolve(
    token: &str,
    pubdir: &Path,
    anchor: Anchor<'_>,
    users: &dyn UserDirs,
) -> Result<PathBuf, PathError> {
    // Rule 1: a leading '/' is absolute.
    if let Some(stripped) = token.strip_prefix('/') {
        return Ok(Path::new("/").join(stripped));
    }

    if let Some(rest) = token.strip_prefix('~') {
        // Rule 2: bare '~' or '~/...' anchors at the public directory.
        if rest.is_empty() {
            return Ok(pubdir.to_path_buf());
        }
        if let Some(path) = rest.strip_prefix('/') {
            return Ok(pubdir.join(path));
        }

        // Rule 3: '~user' or '~user/...' anchors at that user's home.
        let (user, path) = match rest.split_once('/') {
            Some((user, path)) => (user, Some(path)),
            None => (rest, None),
        };
        let home = users.home_dir(user).ok_or_else(|| PathError::UnknownUser {
            user: user.to_string(),
            token: token.to_string(),
        })?;
        return Ok(match path {
            Some(path) => home.join(path),
            None => home,
        });
    }

    // Rule 4: relative tokens are anchored at the caller-selected base.
    let base = match anchor {
        Anchor::Cwd(cwd) => cwd,
        Anchor::PeerPublicDir(dir) => dir,
    };
    Ok(base.join(token))
}
