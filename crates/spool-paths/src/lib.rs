#![deny(unsafe_code)]

//! # Overview
//!
//! Path and name resolution for the job-spooling core (component A of the
//! design: §4.A). Turns a file token as typed by a user into a canonical
//! absolute path suitable either for local use (reading the source file) or
//! for storage as a string in a command record destined for a peer host.
//!
//! # Design
//!
//! Resolution rules are applied in the fixed order from the design:
//! absolute paths pass through unchanged, `~` and `~/...` anchor at a public
//! directory, `~user/...` anchors at `user`'s home directory via
//! [`UserDirs`], and anything else is relative to a caller-supplied base
//! (the current directory for local use, the peer's public directory for
//! remote use). [`add_base`] implements the directory-plus-basename rule
//! (rule 5); [`expand_wildcards`] delegates glob expansion to a child shell
//! process, matching how the original implementation shells out to expand
//! patterns rather than linking a glob library.
//!
//! # Errors
//!
//! [`PathError`] enumerates the per-argument failures from §7 that this
//! crate can raise: an unknown `~user` account, or the child shell used for
//! wildcard expansion failing to start or exit cleanly.

mod base;
mod error;
mod resolve;
mod users;
mod wildcard;

pub use base::add_base;
pub use error::PathError;
pub use resolve::{resolve_local, resolve_remote, Anchor};
pub use users::{RealUserDirs, StaticUserDirs, UserDirs};
pub use wildcard::expand_wildcards;

#[cfg(test)]
mod tests;
