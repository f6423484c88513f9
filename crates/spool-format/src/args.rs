/// One tokenised `uux`-style command-line argument (§4.E).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecArg {
    /// `(...)`: parentheses stripped, contents passed through literally —
    /// the quoting mechanism for a literal `!` (§8 property 5).
    Literal(String),
    /// A bare `-`, equivalent to `-p`: capture stdin to a data file.
    StdinMarker,
    /// `<file`: redirect stdin from a local file.
    InputRedirect(String),
    /// `>file` or `>host!file`: redirect stdout, optionally to a third
    /// host.
    OutputRedirect { target: String, host: Option<String> },
    /// An ordinary word, which may still contain an unquoted `!` naming a
    /// host (`host!path`) for the caller to resolve.
    Word(String),
}

/// Tokenises `uux`-style command arguments, grounded on `uux.c`'s
/// `zexclam = strchr(zcmd, '!')` scan: redirects and parenthesized
/// literals are recognised before any `!`-splitting is attempted, so a
/// quoted exclamation mark never triggers host resolution.
#[must_use]
pub fn tokenize_exec_args(args: &[String]) -> Vec<ExecArg> {
    args.iter().map(|arg| tokenize_one(arg)).collect()
}

fn tokenize_one(arg: &str) -> ExecArg {
    if arg == "-" {
        return ExecArg::StdinMarker;
    }
    if let Some(inner) = strip_parens(arg) {
        return ExecArg::Literal(inner.to_string());
    }
    if let Some(rest) = arg.strip_prefix('<') {
        return ExecArg::InputRedirect(rest.to_string());
    }
    if let Some(rest) = arg.strip_prefix('>') {
        return match rest.split_once('!') {
            Some((host, target)) => ExecArg::OutputRedirect {
                target: target.to_string(),
                host: Some(host.to_string()),
            },
            None => ExecArg::OutputRedirect {
                target: rest.to_string(),
                host: None,
            },
        };
    }
    ExecArg::Word(arg.to_string())
}

fn strip_parens(arg: &str) -> Option<&str> {
    let inner = arg.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner)
}
