use time::{Date, Month, OffsetDateTime, Time};

use crate::format::LogFormat;

/// A point in time as rendered by one of the three logging dialects
/// (§4.F's timestamp column), grounded on the original `zldate_and_time`:
/// taylor keeps full precision down to hundredths of a second, v2 only
/// minute resolution, hdb second resolution.
#[derive(Debug, Clone, Copy)]
pub struct LogTimestamp {
    dt: OffsetDateTime,
}

impl LogTimestamp {
    /// Captures the current local time (falling back to UTC if the local
    /// offset cannot be determined, e.g. in some sandboxes).
    #[must_use]
    pub fn now() -> Self {
        let dt = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self { dt }
    }

    /// Builds a timestamp from explicit calendar components, for tests and
    /// for replaying a recorded time.
    ///
    /// # Panics
    ///
    /// Panics if the components do not form a valid calendar date/time;
    /// callers pass fixed, known-good literals.
    #[must_use]
    pub fn from_components(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        hundredths: u8,
    ) -> Self {
        let month = Month::try_from(month).expect("valid month");
        let date = Date::from_calendar_date(year, month, day).expect("valid date");
        let time = Time::from_hms_milli(hour, minute, second, u16::from(hundredths) * 10)
            .expect("valid time");
        Self {
            dt: date.with_time(time).assume_utc(),
        }
    }

    /// Seconds since the Unix epoch, used by the v2 statistics format.
    #[must_use]
    pub fn unix_seconds(&self) -> i64 {
        self.dt.unix_timestamp()
    }

    /// Renders this timestamp the way `format` expects it to appear
    /// inside the enclosing `(...)` of a log or statistics line.
    #[must_use]
    pub fn render(&self, format: LogFormat) -> String {
        let hundredths = self.dt.millisecond() / 10;
        match format {
            LogFormat::Taylor => format!(
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}.{:02}",
                self.dt.year(),
                u8::from(self.dt.month()),
                self.dt.day(),
                self.dt.hour(),
                self.dt.minute(),
                self.dt.second(),
                hundredths,
            ),
            LogFormat::V2 => format!(
                "{}/{}-{:02}:{:02}",
                u8::from(self.dt.month()),
                self.dt.day(),
                self.dt.hour(),
                self.dt.minute(),
            ),
            LogFormat::Hdb => format!(
                "{}/{}-{:02}:{:02}:{:02}",
                u8::from(self.dt.month()),
                self.dt.day(),
                self.dt.hour(),
                self.dt.minute(),
                self.dt.second(),
            ),
        }
    }
}
