use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Store-assigned surrogate identifier shared by every record kind.
pub type RecordId = i32;

/// Per-weekday availability flags, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "One flag per weekday mirrors the stored columns"
)]
pub struct WeekdayFlags {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

impl WeekdayFlags {
    pub const ALL_DAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Returns whether the flag for `day` is set.
    #[must_use]
    pub const fn is_set(self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    /// Sets the flag for `day`.
    pub const fn set(&mut self, day: Weekday) {
        match day {
            Weekday::Mon => self.monday = true,
            Weekday::Tue => self.tuesday = true,
            Weekday::Wed => self.wednesday = true,
            Weekday::Thu => self.thursday = true,
            Weekday::Fri => self.friday = true,
            Weekday::Sat => self.saturday = true,
            Weekday::Sun => self.sunday = true,
        }
    }

    /// Days with their flag set, in week order.
    #[must_use]
    pub fn days(self) -> Vec<Weekday> {
        Self::ALL_DAYS
            .into_iter()
            .filter(|day| self.is_set(*day))
            .collect()
    }

    /// ## Summary
    /// Short human-readable list such as `"Mon, Wed, Fri"`, or `"none"`.
    #[must_use]
    pub fn summary(self) -> String {
        let days = self.days();
        if days.is_empty() {
            return "none".to_string();
        }
        days.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromIterator<Weekday> for WeekdayFlags {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut flags = Self::default();
        for day in iter {
            flags.set(day);
        }
        flags
    }
}
