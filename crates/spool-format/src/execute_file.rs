/// A file to stage before running the command (`F` line). `real_name`, if
/// set, is the name it should be staged under (symlink/copy target);
/// otherwise it is used as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSpec {
    pub local_name: String,
    pub real_name: Option<String>,
}

/// The destination of an `O` (stdout) line: a local name, optionally on a
/// third host distinct from both submitter and executor (§4.E).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub local_name: String,
    pub host: Option<String>,
}

/// Builds one execute (`X.`) file's contents (§3, §4.E).
///
/// `U` is always emitted first and `C` always last; every other line is
/// emitted in the fixed, deterministic order below (files, stdin, stdout,
/// notify address, the three mail-control flags, then the status file) —
/// the design calls this "any order" because a conforming executor must
/// accept any order, not because this writer should scramble it.
#[derive(Debug, Clone)]
pub struct ExecuteFile {
    user: String,
    origin_host: String,
    files: Vec<FileSpec>,
    stdin: Option<String>,
    stdout: Option<OutputTarget>,
    notify_address: Option<String>,
    suppress_success_mail: bool,
    mail_only_on_error: bool,
    return_stdin_on_error: bool,
    status_file: Option<String>,
    command: Vec<String>,
}

impl ExecuteFile {
    /// Starts a new execute file for `user` submitting from `origin_host`.
    #[must_use]
    pub fn new(user: impl Into<String>, origin_host: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            origin_host: origin_host.into(),
            files: Vec::new(),
            stdin: None,
            stdout: None,
            notify_address: None,
            suppress_success_mail: false,
            mail_only_on_error: false,
            return_stdin_on_error: false,
            status_file: None,
            command: Vec::new(),
        }
    }

    /// Registers a file to stage before the run (`F` line).
    pub fn with_file(&mut self, spec: FileSpec) -> &mut Self {
        self.files.push(spec);
        self
    }

    /// Sets the `I` (stdin) line.
    pub fn with_stdin(&mut self, local_name: impl Into<String>) -> &mut Self {
        self.stdin = Some(local_name.into());
        self
    }

    /// Sets the `O` (stdout) line.
    pub fn with_stdout(&mut self, target: OutputTarget) -> &mut Self {
        self.stdout = Some(target);
        self
    }

    /// Sets the `R` (mail status to this address) line.
    pub fn with_notify(&mut self, address: impl Into<String>) -> &mut Self {
        self.notify_address = Some(address.into());
        self
    }

    /// Emits `N` (suppress success mail).
    pub fn suppress_success_mail(&mut self) -> &mut Self {
        self.suppress_success_mail = true;
        self
    }

    /// Emits `Z` (mail only on error).
    pub fn mail_only_on_error(&mut self) -> &mut Self {
        self.mail_only_on_error = true;
        self
    }

    /// Emits `B` (return stdin on error).
    pub fn return_stdin_on_error(&mut self) -> &mut Self {
        self.return_stdin_on_error = true;
        self
    }

    /// Sets the `M` (write status to this file) line.
    pub fn with_status_file(&mut self, file: impl Into<String>) -> &mut Self {
        self.status_file = Some(file.into());
        self
    }

    /// Sets the command and its arguments (`C` line), already resolved by
    /// [`crate::tokenize_exec_args`] and the caller's path/redirect
    /// handling — no further `!`-splitting happens here.
    pub fn with_command(&mut self, words: Vec<String>) -> &mut Self {
        self.command = words;
        self
    }

    /// Renders the full, newline-terminated contents of the execute file.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("U {} {}\n", self.user, self.origin_host));

        for file in &self.files {
            match &file.real_name {
                Some(real_name) => out.push_str(&format!("F {} {real_name}\n", file.local_name)),
                None => out.push_str(&format!("F {}\n", file.local_name)),
            }
        }
        if let Some(stdin) = &self.stdin {
            out.push_str(&format!("I {stdin}\n"));
        }
        if let Some(stdout) = &self.stdout {
            match &stdout.host {
                Some(host) => out.push_str(&format!("O {} {host}\n", stdout.local_name)),
                None => out.push_str(&format!("O {}\n", stdout.local_name)),
            }
        }
        if let Some(address) = &self.notify_address {
            out.push_str(&format!("R {address}\n"));
        }
        if self.suppress_success_mail {
            out.push_str("N\n");
        }
        if self.mail_only_on_error {
            out.push_str("Z\n");
        }
        if self.return_stdin_on_error {
            out.push_str("B\n");
        }
        if let Some(file) = &self.status_file {
            out.push_str(&format!("M {file}\n"));
        }

        out.push('C');
        for word in &self.command {
            out.push(' ');
            out.push_str(word);
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stdin_from_local_file_scenario() {
        let mut xf = ExecuteFile::new("u", "localhost");
        xf.with_file(FileSpec {
            local_name: "D.hostn0001".to_string(),
            real_name: None,
        });
        xf.with_stdin("D.hostn0001");
        xf.with_command(vec!["rmail".to_string(), "foo@bar".to_string()]);

        assert_eq!(
            xf.render(),
            "U u localhost\nF D.hostn0001\nI D.hostn0001\nC rmail foo@bar\n"
        );
    }

    #[test]
    fn output_redirected_to_a_third_host() {
        let mut xf = ExecuteFile::new("u", "localhost");
        xf.with_stdout(OutputTarget {
            local_name: "/out".to_string(),
            host: Some("host2".to_string()),
        });
        xf.with_command(vec!["cmd".to_string(), "arg".to_string()]);

        let rendered = xf.render();
        assert!(rendered.contains("O /out host2\n"));
        assert!(rendered.contains("C cmd arg\n"));
        assert!(!rendered.contains('>'));
    }

    #[test]
    fn u_is_always_first_and_c_is_always_last() {
        let mut xf = ExecuteFile::new("u", "localhost");
        xf.with_notify("user@host");
        xf.suppress_success_mail();
        xf.with_status_file("status.txt");
        xf.with_command(vec!["true".to_string()]);

        let rendered = xf.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines.first().unwrap().starts_with("U "));
        assert!(lines.last().unwrap().starts_with('C'));
    }
}
