/// Significant characters kept from a system name when building
/// `LCK..<system>`, matching the original `"LCK..%.8s"` format.
const SYSTEM_NAME_BUDGET: usize = 8;

/// Builds the peer lock name `LCK..<system>`, held by whoever is actively
/// talking to that peer.
#[must_use]
pub fn peer_lock_name(system: &str) -> String {
    let truncated: String = system.chars().take(SYSTEM_NAME_BUDGET).collect();
    format!("LCK..{truncated}")
}

/// Builds the command-class executor lock name `LCK..<cmd>`, ensuring only
/// one execution daemon processes jobs of that command class at a time.
#[must_use]
pub fn command_lock_name(cmd: &str) -> String {
    format!("LCK..{cmd}")
}

/// Builds the execute-file lock name `LCK.X.<base>`, held while a single
/// `X.` file is being processed.
#[must_use]
pub fn execute_file_lock_name(base: &str) -> String {
    format!("LCK.X.{base}")
}

/// The execute-directory lock name `LCK.XQT`, serialising use of the
/// shared scratch/work directory.
#[must_use]
pub fn execute_dir_lock_name() -> &'static str {
    "LCK.XQT"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peer_lock_truncates_long_system_names() {
        assert_eq!(peer_lock_name("averylongsystemname"), "LCK..averylon");
    }

    #[test]
    fn short_names_are_used_in_full() {
        assert_eq!(peer_lock_name("foo"), "LCK..foo");
    }
}
