/// The severity prefix attached to a logged message (§4.F).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// No prefix.
    Normal,
    /// `ERROR: ` prefix; a per-job failure.
    Error,
    /// `FATAL: ` prefix; an invariant violation, logged then the process
    /// aborts.
    Fatal,
    /// `DEBUG: ` prefix; emitted only at a sufficiently high `-x` level.
    Debug,
}

impl Header {
    /// The literal prefix text, including trailing `": "` where the
    /// header is non-empty.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Error => "ERROR: ",
            Self::Fatal => "FATAL: ",
            Self::Debug => "DEBUG: ",
        }
    }
}
