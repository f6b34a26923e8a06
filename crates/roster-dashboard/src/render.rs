//! Plain-text tables for the CLI.

use std::fmt;

use roster_db::model::assignment::AssignmentWithNames;
use roster_db::model::availability::StaffAvailabilityWithStaff;
use roster_db::model::need::{ServiceUserNeed, ServiceUserNeedWithUser};
use roster_db::model::service_user::ServiceUser;
use roster_db::model::staff::Staff;

const EMPTY_CELL: &str = "-";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub const fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a row. Missing trailing cells render empty.
    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .fold(header.chars().count(), usize::max)
            })
            .collect()
    }
}

fn write_row<'a>(
    f: &mut fmt::Formatter<'_>,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> fmt::Result {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();

        write_row(f, self.headers.iter().copied(), &widths)?;
        let rule = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-");
        writeln!(f, "{rule}")?;

        for row in &self.rows {
            let cells = (0..widths.len()).map(|col| row.get(col).map_or("", String::as_str));
            write_row(f, cells, &widths)?;
        }

        Ok(())
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| EMPTY_CELL.to_string(), |v| v.to_string())
}

fn opt_time(value: Option<chrono::NaiveTime>) -> String {
    value.map_or_else(
        || EMPTY_CELL.to_string(),
        |t| t.format(TIME_FORMAT).to_string(),
    )
}

#[must_use]
pub fn staff_table<'a>(staff: impl IntoIterator<Item = &'a Staff>) -> Table {
    let mut table = Table::new(vec![
        "id", "name", "role", "team", "line manager", "hours", "start", "leave", "email",
    ]);
    for s in staff {
        table.push(vec![
            s.id.to_string(),
            s.full_name(),
            s.job_role.clone(),
            opt(s.primary_team.as_deref()),
            opt(s.line_manager.as_deref()),
            opt(s.contracted_hours),
            opt(s.start_date),
            opt(s.leave_date),
            opt(s.email.as_deref()),
        ]);
    }
    table
}

#[must_use]
pub fn service_user_table<'a>(users: impl IntoIterator<Item = &'a ServiceUser>) -> Table {
    let mut table = Table::new(vec![
        "id", "ref", "name", "born", "gender", "rag", "team", "start", "end",
    ]);
    for u in users {
        table.push(vec![
            u.id.to_string(),
            u.unique_reference_code.clone(),
            u.full_name(),
            u.date_of_birth.to_string(),
            u.gender.clone(),
            opt(u.rag_rating.as_deref()),
            opt(u.primary_team.as_deref()),
            opt(u.start_date),
            opt(u.end_date),
        ]);
    }
    table
}

#[must_use]
pub fn availability_table(rows: &[StaffAvailabilityWithStaff]) -> Table {
    let mut table = Table::new(vec!["id", "staff id", "staff", "days", "from", "to"]);
    for row in rows {
        let a = &row.availability;
        table.push(vec![
            a.id.to_string(),
            a.staff_id.to_string(),
            format!("{} {}", row.staff_first_name, row.staff_last_name),
            a.days().summary(),
            opt_time(a.start_time),
            opt_time(a.end_time),
        ]);
    }
    table
}

#[must_use]
pub fn assignment_table(rows: &[AssignmentWithNames]) -> Table {
    let mut table = Table::new(vec![
        "id", "date", "from", "to", "staff", "service user", "notes",
    ]);
    for row in rows {
        let a = &row.assignment;
        table.push(vec![
            a.id.to_string(),
            a.assignment_date.to_string(),
            a.start_time.format(TIME_FORMAT).to_string(),
            a.end_time.format(TIME_FORMAT).to_string(),
            format!("{} {}", row.staff_first_name, row.staff_last_name),
            format!("{} {}", row.user_first_name, row.user_last_name),
            opt(a.notes.as_deref()),
        ]);
    }
    table
}

fn need_cells(need: &ServiceUserNeed) -> Vec<String> {
    vec![
        need.care_type.clone(),
        opt(need.frequency.as_deref()),
        opt_time(need.preferred_time),
        opt(need.duration_minutes),
        if need.active { "yes" } else { "no" }.to_string(),
        opt(need.description.as_deref()),
    ]
}

#[must_use]
pub fn need_table(rows: &[ServiceUserNeedWithUser]) -> Table {
    let mut table = Table::new(vec![
        "id", "service user", "care type", "frequency", "time", "minutes", "active", "description",
    ]);
    for row in rows {
        let mut cells = vec![
            row.need.id.to_string(),
            format!("{} {}", row.user_first_name, row.user_last_name),
        ];
        cells.extend(need_cells(&row.need));
        table.push(cells);
    }
    table
}

/// Needs of a single service user, without the name column.
#[must_use]
pub fn user_need_table(needs: &[ServiceUserNeed]) -> Table {
    let mut table = Table::new(vec![
        "id", "care type", "frequency", "time", "minutes", "active", "description",
    ]);
    for need in needs {
        let mut cells = vec![need.id.to_string()];
        cells.extend(need_cells(need));
        table.push(cells);
    }
    table
}
