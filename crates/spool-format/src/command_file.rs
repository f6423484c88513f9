use crate::encode_field;

/// A `send local file to peer` record (§6 `S` grammar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Send {
    pub zfrom: String,
    pub zto: String,
    pub zuser: String,
    pub opts: String,
    pub ztemp: String,
    pub mode: u32,
    pub znotify: String,
}

impl Send {
    fn render(&self) -> String {
        format!(
            "S {} {} {} {} {} {:04o} {}",
            encode_field(&self.zfrom),
            encode_field(&self.zto),
            encode_field(&self.zuser),
            encode_field(&self.opts),
            encode_field(&self.ztemp),
            self.mode,
            encode_field(&self.znotify),
        )
    }
}

/// A `request peer file` record (§6 `R` grammar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receive {
    pub zfrom: String,
    pub zto: String,
    pub zuser: String,
    pub opts: String,
}

impl Receive {
    fn render(&self) -> String {
        format!(
            "R {} {} {} {}",
            encode_field(&self.zfrom),
            encode_field(&self.zto),
            encode_field(&self.zuser),
            encode_field(&self.opts),
        )
    }
}

/// The rare `request execution of a previously staged X. file` record
/// (§3's job-level `X` command, distinct from the `E` grammar below).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteRequest {
    pub zfrom: String,
    pub zto: String,
}

impl ExecuteRequest {
    fn render(&self) -> String {
        format!("X {} {}", encode_field(&self.zfrom), encode_field(&self.zto))
    }
}

/// The inline-command `E` grammar row from §6, used when a command and its
/// arguments are queued directly rather than via a staged `X.` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execute {
    pub zfrom: String,
    pub zto: String,
    pub zuser: String,
    pub opts: String,
    pub ztemp: String,
    pub mode: u32,
    pub znotify: String,
    pub command: String,
}

impl Execute {
    fn render(&self) -> String {
        format!(
            "E {} {} {} {} {} {:04o} {} {}",
            encode_field(&self.zfrom),
            encode_field(&self.zto),
            encode_field(&self.zuser),
            encode_field(&self.opts),
            encode_field(&self.ztemp),
            self.mode,
            encode_field(&self.znotify),
            self.command,
        )
    }
}

/// One line of a command file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRecord {
    Send(Send),
    Receive(Receive),
    ExecuteRequest(ExecuteRequest),
    Execute(Execute),
}

impl CommandRecord {
    fn render(&self) -> String {
        match self {
            Self::Send(r) => r.render(),
            Self::Receive(r) => r.render(),
            Self::ExecuteRequest(r) => r.render(),
            Self::Execute(r) => r.render(),
        }
    }
}

/// An in-memory command file: the ordered set of `S`/`R`/`X`/`E` records
/// for one job, destined for one peer's queue (§4.D).
///
/// §4.D's fixed ordering — sends that must land before execution, then
/// receives, then the execute cover — is the caller's responsibility to
/// respect by pushing records in that order; this type preserves whatever
/// order it is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandFile {
    records: Vec<CommandRecord>,
}

impl CommandFile {
    /// Creates an empty command file.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a `send` record.
    pub fn push_send(&mut self, record: Send) -> &mut Self {
        self.records.push(CommandRecord::Send(record));
        self
    }

    /// Appends a `receive` record.
    pub fn push_receive(&mut self, record: Receive) -> &mut Self {
        self.records.push(CommandRecord::Receive(record));
        self
    }

    /// Appends an `execute previously staged X. file` record.
    pub fn push_execute_request(&mut self, record: ExecuteRequest) -> &mut Self {
        self.records.push(CommandRecord::ExecuteRequest(record));
        self
    }

    /// Appends an inline `E` record.
    pub fn push_execute(&mut self, record: Execute) -> &mut Self {
        self.records.push(CommandRecord::Execute(record));
        self
    }

    /// The records in this command file, in submission order.
    #[must_use]
    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    /// Whether this command file has no records (an effectively empty
    /// job; see the namer's reservation scheme in `spool-naming`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Renders the full, newline-terminated contents of the command file.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.render());
            out.push('\n');
        }
        out
    }
}
