use thiserror::Error;

/// Errors raised while classifying a `uucp` source/destination pair.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{0:?} does not name a remote host, and neither does {1:?} (expected one host!path argument)")]
    BothLocal(String, String),

    #[error("both {0:?} and {1:?} name a remote host; third-party forwarding is not supported")]
    BothRemote(String, String),
}

/// One `uucp` argument split into its optional `host!` prefix and the
/// remaining path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostToken {
    pub host: Option<String>,
    pub path: String,
}

/// Splits `token` on the first `!` that precedes any `/`, the same rule
/// `uucp.c`'s argument scanner uses to decide whether a leading segment
/// names a host rather than being part of the path itself.
#[must_use]
pub fn split_host_bang(token: &str) -> HostToken {
    if let Some((host, path)) = token.split_once('!') {
        if !host.is_empty() && !host.contains('/') {
            return HostToken {
                host: Some(host.to_string()),
                path: path.to_string(),
            };
        }
    }
    HostToken {
        host: None,
        path: token.to_string(),
    }
}

/// The result of classifying a `uucp` source/destination pair: which side
/// is remote, and that side's host and path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub peer: String,
    pub local_token: String,
    pub remote_token: String,
    pub direction: spool_core::CopyDirection,
}

/// Classifies a `uucp source dest` pair into a direction and the two
/// resolved tokens.
///
/// # Errors
///
/// Returns [`ParseError::BothLocal`] if neither side names a host, or
/// [`ParseError::BothRemote`] if both do (third-party forwarding between
/// two other hosts is out of scope here).
pub fn classify(source: &str, dest: &str) -> Result<Classified, ParseError> {
    let src = split_host_bang(source);
    let dst = split_host_bang(dest);

    match (src.host, dst.host) {
        (Some(_), Some(_)) => Err(ParseError::BothRemote(source.to_string(), dest.to_string())),
        (None, None) => Err(ParseError::BothLocal(source.to_string(), dest.to_string())),
        (None, Some(peer)) => Ok(Classified {
            peer,
            local_token: src.path,
            remote_token: dst.path,
            direction: spool_core::CopyDirection::Out,
        }),
        (Some(peer), None) => Ok(Classified {
            peer,
            local_token: dst.path,
            remote_token: src.path,
            direction: spool_core::CopyDirection::In,
        }),
    }
}

/// Resolves the submitting user: the account explicitly supplied on the
/// command line, else `$USER`, else `$LOGNAME`, else `"unknown"`.
#[must_use]
pub fn resolve_user(explicit: Option<&str>) -> String {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var("USER").ok())
        .or_else(|| std::env::var("LOGNAME").ok())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_a_host_prefixed_token() {
        let token = split_host_bang("host!path/to/file");
        assert_eq!(token.host.as_deref(), Some("host"));
        assert_eq!(token.path, "path/to/file");
    }

    #[test]
    fn leaves_a_plain_path_untouched() {
        let token = split_host_bang("/tmp/a");
        assert_eq!(token.host, None);
        assert_eq!(token.path, "/tmp/a");
    }

    #[test]
    fn an_embedded_slash_before_the_bang_is_not_a_host_prefix() {
        let token = split_host_bang("/tmp/a!b");
        assert_eq!(token.host, None);
        assert_eq!(token.path, "/tmp/a!b");
    }

    #[test]
    fn classifies_a_local_to_remote_copy_as_outbound() {
        let classified = classify("/home/u/a", "host!/tmp/a").unwrap();
        assert_eq!(classified.peer, "host");
        assert_eq!(classified.direction, spool_core::CopyDirection::Out);
    }

    #[test]
    fn classifies_a_remote_to_local_copy_as_inbound() {
        let classified = classify("host!/tmp/a", "/home/u/a").unwrap();
        assert_eq!(classified.peer, "host");
        assert_eq!(classified.direction, spool_core::CopyDirection::In);
    }

    #[test]
    fn rejects_two_local_paths() {
        assert!(matches!(classify("/a", "/b"), Err(ParseError::BothLocal(_, _))));
    }

    #[test]
    fn rejects_two_remote_paths() {
        assert!(matches!(
            classify("host1!/a", "host2!/b"),
            Err(ParseError::BothRemote(_, _))
        ));
    }
}
