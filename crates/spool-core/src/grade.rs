use spool_naming::Grade;

use crate::error::SubmitError;

/// Resolves the grade a job should use: the caller's request if it is a
/// legal grade character, otherwise `default` (§3's invariant that an
/// illegal grade is never silently accepted — the configured default is
/// substituted instead, and the substitution is the caller's to log).
///
/// # Errors
///
/// Returns [`SubmitError::ConfigInvalid`] if even `default` is not a legal
/// grade character, which means the site configuration itself is broken.
pub fn resolve_grade(requested: Option<char>, default: char) -> Result<(Grade, bool), SubmitError> {
    let fallback = Grade::parse(default).map_err(|source| SubmitError::ConfigInvalid {
        detail: format!("configured default grade is invalid: {source}"),
    })?;

    match requested {
        None => Ok((fallback, false)),
        Some(c) => match Grade::parse(c) {
            Ok(grade) => Ok((grade, false)),
            Err(_) => Ok((fallback, true)),
        },
    }
}
