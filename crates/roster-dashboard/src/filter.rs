//! Record filters applied to the lists fetched from the server.
//!
//! Exact-match criteria compare the whole field. The free-text search is a
//! case-insensitive substring match. Filtered results are sorted by first name.

use chrono::NaiveDate;
use roster_db::model::assignment::AssignmentWithNames;
use roster_db::model::service_user::ServiceUser;
use roster_db::model::staff::Staff;

fn field_equals(field: Option<&str>, wanted: Option<&str>) -> bool {
    wanted.is_none_or(|wanted| field == Some(wanted))
}

fn any_contains(fields: &[&str], needle: Option<&str>) -> bool {
    let Some(needle) = needle.map(str::trim).filter(|n| !n.is_empty()) else {
        return true;
    };
    let needle = needle.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffFilter {
    pub team: Option<String>,
    pub line_manager: Option<String>,
    /// Matched against first and last name.
    pub search: Option<String>,
}

impl StaffFilter {
    #[must_use]
    pub fn matches(&self, staff: &Staff) -> bool {
        field_equals(staff.primary_team.as_deref(), self.team.as_deref())
            && field_equals(staff.line_manager.as_deref(), self.line_manager.as_deref())
            && any_contains(
                &[staff.first_name.as_str(), staff.last_name.as_str()],
                self.search.as_deref(),
            )
    }

    /// ## Summary
    /// Returns the matching staff, sorted by first name.
    #[must_use]
    pub fn apply<'a>(&self, staff: &'a [Staff]) -> Vec<&'a Staff> {
        let mut matched: Vec<&Staff> = staff.iter().filter(|s| self.matches(s)).collect();
        matched.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        matched
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceUserFilter {
    pub team: Option<String>,
    pub gender: Option<String>,
    pub rag_rating: Option<String>,
    /// Matched against first name, last name and reference code.
    pub search: Option<String>,
}

impl ServiceUserFilter {
    #[must_use]
    pub fn matches(&self, user: &ServiceUser) -> bool {
        field_equals(user.primary_team.as_deref(), self.team.as_deref())
            && field_equals(Some(user.gender.as_str()), self.gender.as_deref())
            && field_equals(user.rag_rating.as_deref(), self.rag_rating.as_deref())
            && any_contains(
                &[
                    user.first_name.as_str(),
                    user.last_name.as_str(),
                    user.unique_reference_code.as_str(),
                ],
                self.search.as_deref(),
            )
    }

    /// ## Summary
    /// Returns the matching service users, sorted by first name.
    #[must_use]
    pub fn apply<'a>(&self, users: &'a [ServiceUser]) -> Vec<&'a ServiceUser> {
        let mut matched: Vec<&ServiceUser> = users.iter().filter(|u| self.matches(u)).collect();
        matched.sort_by(|a, b| a.first_name.cmp(&b.first_name));
        matched
    }
}

/// A service user can be assigned visits until their care has an end date.
#[must_use]
pub const fn is_eligible_for_assignment(user: &ServiceUser) -> bool {
    user.end_date.is_none()
}

/// ## Summary
/// Service users that can still be assigned visits, sorted by first name.
#[must_use]
pub fn eligible_for_assignment(users: &[ServiceUser]) -> Vec<&ServiceUser> {
    let mut eligible: Vec<&ServiceUser> = users
        .iter()
        .filter(|u| is_eligible_for_assignment(u))
        .collect();
    eligible.sort_by(|a, b| a.first_name.cmp(&b.first_name));
    eligible
}

/// ## Summary
/// Finds a listed assignment already holding the service user's date, other
/// than `exclude_id`. Checked before posting so the user sees the clash
/// without a round trip; the server enforces the same rule.
#[must_use]
pub fn assignment_on_date(
    assignments: &[AssignmentWithNames],
    service_user_id: i32,
    date: NaiveDate,
    exclude_id: Option<i32>,
) -> Option<&AssignmentWithNames> {
    assignments.iter().find(|row| {
        row.assignment.service_user_id == service_user_id
            && row.assignment.assignment_date == date
            && Some(row.assignment.id) != exclude_id
    })
}

/// ## Summary
/// Distinct non-empty values of an optional field, sorted. Used to list the
/// choices a filter accepts.
#[must_use]
pub fn distinct_values<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut distinct: Vec<String> = values
        .into_iter()
        .flatten()
        .filter(|v| !v.trim().is_empty())
        .map(ToString::to_string)
        .collect();
    distinct.sort();
    distinct.dedup();
    distinct
}
