use crate::format::LogFormat;
use crate::header::Header;
use crate::timestamp::LogTimestamp;

/// One event-log line (§4.F). `id`, when non-zero, is the conversation/job
/// id attached to the event; under `hdb` it is paired with `sequence`,
/// which the original leaves hard-coded to `0` and notes may belong to
/// the command-file sequence number instead (§9's open question) — kept
/// here as a plain field so callers can supply either.
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub program: String,
    pub system: String,
    pub user: String,
    pub timestamp: LogTimestamp,
    pub id: u32,
    pub sequence: u32,
    pub header: Header,
    pub message: String,
}

impl EventRecord {
    /// Renders this event the way `format` requires.
    #[must_use]
    pub fn render(&self, format: LogFormat) -> String {
        let ts = self.timestamp.render(format);
        match format {
            LogFormat::Taylor => {
                let id = if self.id != 0 {
                    format!(" {}", self.id)
                } else {
                    String::new()
                };
                format!(
                    "{} {} {} ({ts}{id}) {}{}",
                    self.program,
                    self.system,
                    self.user,
                    self.header.prefix(),
                    self.message,
                )
            }
            LogFormat::V2 => {
                let id = if self.id != 0 {
                    format!("-{}", self.id)
                } else {
                    String::new()
                };
                format!(
                    "{} {} ({ts}{id}) {}{}",
                    self.user,
                    self.system,
                    self.header.prefix(),
                    self.message,
                )
            }
            LogFormat::Hdb => {
                let id = if self.id != 0 {
                    format!(",{},{}", self.id, self.sequence)
                } else {
                    String::new()
                };
                format!(
                    "{} {} ({ts}{id}) {}{}",
                    self.user,
                    self.system,
                    self.header.prefix(),
                    self.message,
                )
            }
        }
    }
}
