use std::process::Command;

use crate::error::PathError;

/// Expands a local shell glob pattern using an external shell, mirroring
/// the original implementation's `unix/wldcrd.c`: rather than link a glob
/// library, a subordinate `sh -c 'echo <pattern>'` performs the expansion
/// and the space-separated result is tokenised.
///
/// Wildcards only expand for local files (§4.A); remote patterns are
/// passed through to the peer unexpanded by callers of this function, not
/// by this function itself.
///
/// # Errors
///
/// Returns [`PathError::WildcardSpawn`] if the shell cannot be started, or
/// [`PathError::WildcardExit`] if it exits with a failure status.
pub fn expand_wildcards(pattern: &str) -> Result<Vec<String>, PathError> {
    let output = Command::new("sh")
        .arg("-c")
        .arg(format!("echo {pattern}"))
        .output()
        .map_err(|source| PathError::WildcardSpawn { source })?;

    if !output.status.success() {
        return Err(PathError::WildcardExit {
            pattern: pattern.to_string(),
            status: output.status.code().unwrap_or(-1),
        });
    }

    let text = String::from_utf8_lossy(&output.stdout);
    Ok(text
        .trim_end_matches('\n')
        .split_whitespace()
        .map(str::to_string)
        .collect())
}
