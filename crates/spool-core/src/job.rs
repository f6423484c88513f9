/// The result of a successful submission: which command file was written
/// and under which peer's spool directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobId {
    pub command_file: String,
    pub peer: String,
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}!{}", self.peer, self.command_file)
    }
}
