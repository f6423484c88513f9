use std::path::PathBuf;

use clap::Parser;

/// Queue a file for transfer to or from a remote system (§6 `uucp`).
///
/// Exactly one of `source` or `dest` must carry a `host!path` prefix; the
/// other names a path on this host. `uucp host!a host!b` (both remote) and
/// `uucp a b` (both local) are rejected by [`crate::parse::classify`].
#[derive(Debug, Parser)]
#[command(name = "uucp", version, about)]
pub struct UucpArgs {
    /// Source file, either a local path or `host!path`.
    pub source: String,

    /// Destination file, either a local path or `host!path`.
    pub dest: String,

    /// Submitting user; defaults to the invoking account.
    #[arg(long)]
    pub user: Option<String>,

    /// Job grade (`0-9A-Za-z`); defaults to the host's configured grade.
    #[arg(short = 'g', long = "grade")]
    pub grade: Option<char>,

    /// Copy the source into the spool directory immediately rather than
    /// re-reading it when the transfer actually runs.
    #[arg(short = 'C', long = "copy", conflicts_with = "no_copy")]
    pub copy: bool,

    /// Explicitly request the opposite of `--copy` (the default).
    #[arg(short = 'c', long = "no-copy")]
    pub no_copy: bool,

    /// Mail this address once the transfer finishes.
    #[arg(short = 'm', long = "notify")]
    pub notify: Option<String>,

    /// Print the minted job id on stdout.
    #[arg(short = 'j', long = "jobid")]
    pub jobid: bool,

    /// Path to the site configuration file.
    #[arg(short = 'I', long = "config", default_value = "/etc/uucp/config.toml")]
    pub config: PathBuf,

    /// Debugging verbosity passed through to the logging subsystem.
    #[arg(short = 'x', long = "debug", default_value_t = 0)]
    pub debug: u8,
}

/// Queue a remote command execution (§6 `uux`).
#[derive(Debug, Parser)]
#[command(name = "uux", version, about)]
pub struct UuxArgs {
    /// `host!command`, or a bare command to run on the local host.
    pub command: String,

    /// Command arguments, in `uux` grammar: `-` for stdin, `<file` and
    /// `>file`/`>host!file` for redirects, `(text)` for a literal `!`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Submitting user; defaults to the invoking account.
    #[arg(long)]
    pub user: Option<String>,

    /// Job grade (`0-9A-Za-z`); defaults to the host's configured grade.
    #[arg(short = 'g', long = "grade")]
    pub grade: Option<char>,

    /// Suppress mail on success.
    #[arg(short = 'n', long = "no-ack")]
    pub no_ack: bool,

    /// Mail only on error.
    #[arg(short = 'z', long = "error-ack")]
    pub error_ack: bool,

    /// Mail status to this address regardless of outcome.
    #[arg(short = 'm', long = "notify")]
    pub notify: Option<String>,

    /// Write status to this file on the peer instead of mailing it.
    #[arg(long = "status")]
    pub status_file: Option<String>,

    /// Return the captured standard input to the submitter on failure.
    #[arg(short = 'b', long = "stdin-return")]
    pub stdin_return: bool,

    /// Print the minted job id on stdout.
    #[arg(short = 'j', long = "jobid")]
    pub jobid: bool,

    /// Path to the site configuration file.
    #[arg(short = 'I', long = "config", default_value = "/etc/uucp/config.toml")]
    pub config: PathBuf,

    /// Debugging verbosity passed through to the logging subsystem.
    #[arg(short = 'x', long = "debug", default_value_t = 0)]
    pub debug: u8,
}

/// Validate the site configuration and host table (§4.G, grounded on
/// `uuchk.c`).
#[derive(Debug, Parser)]
#[command(name = "uuchk", version, about)]
pub struct UuchkArgs {
    /// Path to the site configuration file.
    #[arg(short = 'I', long = "config", default_value = "/etc/uucp/config.toml")]
    pub config: PathBuf,
}
