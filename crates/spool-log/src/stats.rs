use crate::format::LogFormat;
use crate::timestamp::LogTimestamp;

/// Which way a transfer moved relative to the submitting host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Sent,
    Received,
}

/// Computes bytes/second for a transfer, per §8 property 7: zero when both
/// the whole-second and microsecond components are zero, to avoid a
/// division by zero; otherwise `(1000 * bytes) / (seconds * 1000 +
/// micros / 1000)`.
#[must_use]
pub fn compute_rate(bytes: u64, seconds: u64, micros: u64) -> u64 {
    if seconds == 0 && micros == 0 {
        return 0;
    }
    (1000 * bytes) / (seconds * 1000 + micros / 1000)
}

/// One per-transfer statistics record (§4.F).
#[derive(Debug, Clone)]
pub struct StatsRecord {
    pub user: String,
    pub system: String,
    pub timestamp: LogTimestamp,
    pub direction: Direction,
    pub success: bool,
    pub bytes: u64,
    pub seconds: u64,
    pub micros: u64,
    /// Conversation id, used by the `hdb` format.
    pub id: u32,
    /// Sequence number within this call, used by the `hdb` format.
    pub sequence: u32,
    /// Device name, used by the `hdb` format (defaults to `"unknown"`).
    pub device: Option<String>,
}

impl StatsRecord {
    fn rate(&self) -> u64 {
        compute_rate(self.bytes, self.seconds, self.micros)
    }

    fn direction_word(&self) -> &'static str {
        match self.direction {
            Direction::Sent => "sent",
            Direction::Received => "received",
        }
    }

    /// Renders this record, or `None` if this format does not report
    /// failed transfers at all (the original `hdb`/BNU format silently
    /// drops them).
    #[must_use]
    pub fn render(&self, format: LogFormat) -> Option<String> {
        let ts = self.timestamp.render(format);
        let millis = self.micros / 1000;
        match format {
            LogFormat::Taylor => {
                let prefix = if self.success { "" } else { "failed after " };
                Some(format!(
                    "{} {} ({ts}) {prefix}{} {} bytes in {}.{millis:03} seconds ({} bytes/sec)",
                    self.user,
                    self.system,
                    self.direction_word(),
                    self.bytes,
                    self.seconds,
                    self.rate(),
                ))
            }
            LogFormat::V2 => {
                let outcome = if self.success { "data" } else { "failed after" };
                let rounded_seconds = self.seconds + (self.micros + 500_000) / 1_000_000;
                Some(format!(
                    "{} {} ({ts}) ({}) {} {outcome} {} bytes {rounded_seconds} seconds",
                    self.user,
                    self.system,
                    self.timestamp.unix_seconds(),
                    self.direction_word(),
                    self.bytes,
                ))
            }
            LogFormat::Hdb => {
                if !self.success {
                    return None;
                }
                let arrow = match self.direction {
                    Direction::Sent => "->",
                    Direction::Received => "<-",
                };
                let device = self.device.as_deref().unwrap_or("unknown");
                Some(format!(
                    "{}!{} M ({ts}) (C,{},{}) [{device}] {arrow} {} / {}.{millis:03} secs, {} bytes/sec",
                    self.system, self.user, self.id, self.sequence, self.bytes, self.seconds, self.rate(),
                ))
            }
        }
    }
}
