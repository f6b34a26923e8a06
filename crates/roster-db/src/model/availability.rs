use chrono::NaiveTime;
use diesel::{pg::Pg, prelude::*};
use roster_core::types::WeekdayFlags;
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// Regular weekly availability for one staff member
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::staff_availability)]
#[diesel(check_for_backend(Pg))]
#[expect(
    clippy::struct_excessive_bools,
    reason = "One flag per weekday mirrors the stored columns"
)]
pub struct StaffAvailability {
    pub id: i32,
    pub staff_id: i32,
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl StaffAvailability {
    #[must_use]
    pub const fn days(&self) -> WeekdayFlags {
        WeekdayFlags {
            monday: self.monday,
            tuesday: self.tuesday,
            wednesday: self.wednesday,
            thursday: self.thursday,
            friday: self.friday,
            saturday: self.saturday,
            sunday: self.sunday,
        }
    }
}

/// Availability submission. Also the changeset applied when a row for the
/// same staff member already exists.
#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = schema::staff_availability)]
#[diesel(treat_none_as_null = true)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "One flag per weekday mirrors the stored columns"
)]
pub struct NewStaffAvailability {
    pub staff_id: i32,
    #[serde(default)]
    pub monday: bool,
    #[serde(default)]
    pub tuesday: bool,
    #[serde(default)]
    pub wednesday: bool,
    #[serde(default)]
    pub thursday: bool,
    #[serde(default)]
    pub friday: bool,
    #[serde(default)]
    pub saturday: bool,
    #[serde(default)]
    pub sunday: bool,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl NewStaffAvailability {
    /// Builds a submission from a set of weekday flags.
    #[must_use]
    pub const fn from_days(
        staff_id: i32,
        days: WeekdayFlags,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
    ) -> Self {
        Self {
            staff_id,
            monday: days.monday,
            tuesday: days.tuesday,
            wednesday: days.wednesday,
            thursday: days.thursday,
            friday: days.friday,
            saturday: days.saturday,
            sunday: days.sunday,
            start_time,
            end_time,
        }
    }
}

/// Availability row joined with the staff member's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffAvailabilityWithStaff {
    #[serde(flatten)]
    pub availability: StaffAvailability,
    pub staff_first_name: String,
    pub staff_last_name: String,
}
