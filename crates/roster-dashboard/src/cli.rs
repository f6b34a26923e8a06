//! Command-line interface of the dashboard.

use chrono::{NaiveDate, NaiveTime, Weekday};
use clap::{Args, Parser, Subcommand};
use roster_core::types::{RecordId, WeekdayFlags};
use roster_db::model::assignment::NewAssignment;
use roster_db::model::availability::NewStaffAvailability;
use roster_db::model::need::NewServiceUserNeed;
use roster_db::model::service_user::NewServiceUser;
use roster_db::model::staff::NewStaff;

use crate::client::RosterClient;
use crate::error::{ClientError, ClientResult};
use crate::filter::{
    ServiceUserFilter, StaffFilter, assignment_on_date, distinct_values, is_eligible_for_assignment,
};
use crate::render;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Parser, Debug)]
#[command(name = "roster-dashboard")]
#[command(version)]
#[command(about = "View and edit care roster records")]
pub struct Cli {
    /// Base URL of the roster server
    #[arg(long, env = "ROSTER_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that the server is up
    Health,
    /// Staff records
    Staff {
        #[command(subcommand)]
        action: StaffCommand,
    },
    /// Service user records
    ServiceUsers {
        #[command(subcommand)]
        action: ServiceUserCommand,
    },
    /// Weekly staff availability
    Availability {
        #[command(subcommand)]
        action: AvailabilityCommand,
    },
    /// Visits scheduled between staff and service users
    Assignments {
        #[command(subcommand)]
        action: AssignmentCommand,
    },
    /// Care needs of service users
    Needs {
        #[command(subcommand)]
        action: NeedCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum StaffCommand {
    /// List staff, optionally filtered
    List {
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        line_manager: Option<String>,
        /// Case-insensitive search over first and last name
        #[arg(long)]
        search: Option<String>,
        /// Print the teams and line managers that can be filtered on
        #[arg(long)]
        choices: bool,
    },
    /// Show one staff member
    Show {
        #[arg(value_name = "STAFF_ID")]
        id: RecordId,
    },
    /// Add a staff member
    Add(StaffArgs),
    /// Replace a staff member's details
    Update {
        #[arg(value_name = "STAFF_ID")]
        id: RecordId,
        #[command(flatten)]
        fields: StaffArgs,
    },
    /// Delete a staff member
    Delete {
        #[arg(value_name = "STAFF_ID")]
        id: RecordId,
    },
}

#[derive(Args, Debug, Clone)]
pub struct StaffArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long = "role")]
    pub job_role: String,
    #[arg(long)]
    pub line_manager: Option<String>,
    #[arg(long = "hours")]
    pub contracted_hours: Option<f64>,
    #[arg(long = "team")]
    pub primary_team: Option<String>,
    #[arg(long = "travel")]
    pub preferred_travel_type: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start_date: Option<NaiveDate>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub leave_date: Option<NaiveDate>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub work_number: Option<String>,
    #[arg(long)]
    pub postcode: Option<String>,
}

impl From<StaffArgs> for NewStaff {
    fn from(args: StaffArgs) -> Self {
        Self {
            first_name: args.first_name,
            last_name: args.last_name,
            job_role: args.job_role,
            line_manager: args.line_manager,
            contracted_hours: args.contracted_hours,
            primary_team: args.primary_team,
            preferred_travel_type: args.preferred_travel_type,
            start_date: args.start_date,
            leave_date: args.leave_date,
            email: args.email,
            work_number: args.work_number,
            postcode: args.postcode,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ServiceUserCommand {
    /// List service users, optionally filtered
    List {
        #[arg(long)]
        team: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long = "rag")]
        rag_rating: Option<String>,
        /// Case-insensitive search over name and reference code
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a service user
    Add(ServiceUserArgs),
    /// Replace a service user's details
    Update {
        #[arg(value_name = "SERVICE_USER_ID")]
        id: RecordId,
        #[command(flatten)]
        fields: ServiceUserArgs,
    },
    /// Delete a service user
    Delete {
        #[arg(value_name = "SERVICE_USER_ID")]
        id: RecordId,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ServiceUserArgs {
    #[arg(long = "ref")]
    pub unique_reference_code: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long = "dob", value_name = "YYYY-MM-DD")]
    pub date_of_birth: NaiveDate,
    #[arg(long)]
    pub gender: String,
    #[arg(long = "rag")]
    pub rag_rating: Option<String>,
    #[arg(long)]
    pub nhs_number: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start_date: Option<NaiveDate>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub end_date: Option<NaiveDate>,
    #[arg(long = "team")]
    pub primary_team: Option<String>,
    #[arg(long)]
    pub contact_number: Option<String>,
    #[arg(long)]
    pub contact_email: Option<String>,
    #[arg(long = "address")]
    pub full_address: Option<String>,
    #[arg(long)]
    pub keysafe_code: Option<String>,
}

impl From<ServiceUserArgs> for NewServiceUser {
    fn from(args: ServiceUserArgs) -> Self {
        Self {
            unique_reference_code: args.unique_reference_code,
            first_name: args.first_name,
            last_name: args.last_name,
            date_of_birth: args.date_of_birth,
            gender: args.gender,
            rag_rating: args.rag_rating,
            nhs_number: args.nhs_number,
            start_date: args.start_date,
            end_date: args.end_date,
            primary_team: args.primary_team,
            contact_number: args.contact_number,
            contact_email: args.contact_email,
            full_address: args.full_address,
            keysafe_code: args.keysafe_code,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum AvailabilityCommand {
    /// List availability for all staff
    List,
    /// Set a staff member's weekly availability, replacing what they had
    Set {
        #[arg(value_name = "STAFF_ID")]
        staff_id: RecordId,
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Replace an availability row by its ID
    Update {
        #[arg(value_name = "AVAILABILITY_ID")]
        id: RecordId,
        #[arg(long)]
        staff_id: RecordId,
        #[command(flatten)]
        week: WeekArgs,
    },
    /// Delete an availability row
    Delete {
        #[arg(value_name = "AVAILABILITY_ID")]
        id: RecordId,
    },
}

#[derive(Args, Debug, Clone)]
pub struct WeekArgs {
    /// Comma-separated days, e.g. mon,tue,fri
    #[arg(long, value_delimiter = ',')]
    pub days: Vec<Weekday>,
    #[arg(long = "from", value_name = "HH:MM")]
    pub start_time: Option<NaiveTime>,
    #[arg(long = "to", value_name = "HH:MM")]
    pub end_time: Option<NaiveTime>,
}

impl WeekArgs {
    #[must_use]
    pub fn submission(self, staff_id: RecordId) -> NewStaffAvailability {
        let days: WeekdayFlags = self.days.into_iter().collect();
        NewStaffAvailability::from_days(staff_id, days, self.start_time, self.end_time)
    }
}

#[derive(Subcommand, Debug)]
pub enum AssignmentCommand {
    /// List assignments, most recent first
    List,
    /// Schedule a visit
    Add(AssignmentArgs),
    /// Replace a visit's details
    Update {
        #[arg(value_name = "ASSIGNMENT_ID")]
        id: RecordId,
        #[command(flatten)]
        fields: AssignmentArgs,
    },
    /// Cancel a visit
    Delete {
        #[arg(value_name = "ASSIGNMENT_ID")]
        id: RecordId,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AssignmentArgs {
    #[arg(long)]
    pub staff_id: RecordId,
    #[arg(long)]
    pub service_user_id: RecordId,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: NaiveDate,
    #[arg(long = "from", value_name = "HH:MM")]
    pub start_time: NaiveTime,
    #[arg(long = "to", value_name = "HH:MM")]
    pub end_time: NaiveTime,
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<AssignmentArgs> for NewAssignment {
    fn from(args: AssignmentArgs) -> Self {
        Self {
            staff_id: args.staff_id,
            service_user_id: args.service_user_id,
            assignment_date: args.date,
            start_time: args.start_time,
            end_time: args.end_time,
            notes: args.notes,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum NeedCommand {
    /// List care needs
    List {
        /// Only this service user's needs
        #[arg(long)]
        service_user_id: Option<RecordId>,
    },
    /// Record a care need
    Add(NeedArgs),
    /// Replace a care need's details
    Update {
        #[arg(value_name = "NEED_ID")]
        id: RecordId,
        #[command(flatten)]
        fields: NeedArgs,
    },
    /// Delete a care need
    Delete {
        #[arg(value_name = "NEED_ID")]
        id: RecordId,
    },
}

#[derive(Args, Debug, Clone)]
pub struct NeedArgs {
    #[arg(long)]
    pub service_user_id: RecordId,
    #[arg(long)]
    pub care_type: String,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub frequency: Option<String>,
    #[arg(long = "time", value_name = "HH:MM")]
    pub preferred_time: Option<NaiveTime>,
    #[arg(long = "minutes")]
    pub duration_minutes: Option<i32>,
    /// Record the need as inactive
    #[arg(long)]
    pub inactive: bool,
}

impl From<NeedArgs> for NewServiceUserNeed {
    fn from(args: NeedArgs) -> Self {
        Self {
            service_user_id: args.service_user_id,
            care_type: args.care_type,
            description: args.description,
            frequency: args.frequency,
            preferred_time: args.preferred_time,
            duration_minutes: args.duration_minutes,
            active: !args.inactive,
        }
    }
}

fn print_table(table: &render::Table, empty: &str) {
    if table.is_empty() {
        println!("{empty}");
    } else {
        print!("{table}");
    }
}

/// ## Summary
/// Runs one dashboard command against the server.
///
/// ## Errors
/// Returns the client error for a failed request. `Api` errors carry the
/// server's message.
#[tracing::instrument(skip(client))]
pub async fn run(client: &RosterClient, command: Command) -> ClientResult<()> {
    match command {
        Command::Health => {
            if client.health().await? {
                println!("Server is healthy");
            } else {
                println!("Server answered but is not healthy");
            }
        }
        Command::Staff { action } => run_staff(client, action).await?,
        Command::ServiceUsers { action } => run_service_users(client, action).await?,
        Command::Availability { action } => run_availability(client, action).await?,
        Command::Assignments { action } => run_assignments(client, action).await?,
        Command::Needs { action } => run_needs(client, action).await?,
    }
    Ok(())
}

async fn run_staff(client: &RosterClient, action: StaffCommand) -> ClientResult<()> {
    let ack = match action {
        StaffCommand::List {
            team,
            line_manager,
            search,
            choices,
        } => {
            let staff = client.list_staff().await?;
            if choices {
                let teams = distinct_values(staff.iter().map(|s| s.primary_team.as_deref()));
                let managers = distinct_values(staff.iter().map(|s| s.line_manager.as_deref()));
                println!("Teams: {}", teams.join(", "));
                println!("Line managers: {}", managers.join(", "));
                return Ok(());
            }
            let filter = StaffFilter {
                team,
                line_manager,
                search,
            };
            print_table(
                &render::staff_table(filter.apply(&staff)),
                "No staff match the filter.",
            );
            return Ok(());
        }
        StaffCommand::Show { id } => {
            let staff = client.get_staff(id).await?;
            print_table(&render::staff_table([&staff]), "No staff found.");
            return Ok(());
        }
        StaffCommand::Add(fields) => client.create_staff(&fields.into()).await?,
        StaffCommand::Update { id, fields } => client.update_staff(id, &fields.into()).await?,
        StaffCommand::Delete { id } => client.delete_staff(id).await?,
    };
    println!("{} (ID {})", ack.message, ack.id);
    Ok(())
}

async fn run_service_users(client: &RosterClient, action: ServiceUserCommand) -> ClientResult<()> {
    let ack = match action {
        ServiceUserCommand::List {
            team,
            gender,
            rag_rating,
            search,
        } => {
            let users = client.list_service_users().await?;
            let filter = ServiceUserFilter {
                team,
                gender,
                rag_rating,
                search,
            };
            print_table(
                &render::service_user_table(filter.apply(&users)),
                "No service users match the filter.",
            );
            return Ok(());
        }
        ServiceUserCommand::Add(fields) => client.create_service_user(&fields.into()).await?,
        ServiceUserCommand::Update { id, fields } => {
            client.update_service_user(id, &fields.into()).await?
        }
        ServiceUserCommand::Delete { id } => client.delete_service_user(id).await?,
    };
    println!("{} (ID {})", ack.message, ack.id);
    Ok(())
}

async fn run_availability(client: &RosterClient, action: AvailabilityCommand) -> ClientResult<()> {
    let ack = match action {
        AvailabilityCommand::List => {
            let rows = client.list_availability().await?;
            print_table(
                &render::availability_table(&rows),
                "No availability recorded.",
            );
            return Ok(());
        }
        AvailabilityCommand::Set { staff_id, week } => {
            let days: WeekdayFlags = week.days.iter().copied().collect();
            let ack = client.set_availability(&week.submission(staff_id)).await?;
            println!("{} (ID {}): {}", ack.message, ack.id, days.summary());
            return Ok(());
        }
        AvailabilityCommand::Update { id, staff_id, week } => {
            client.update_availability(id, &week.submission(staff_id)).await?
        }
        AvailabilityCommand::Delete { id } => client.delete_availability(id).await?,
    };
    println!("{} (ID {})", ack.message, ack.id);
    Ok(())
}

/// Refuses a visit for a service user whose care has ended, or whose date is
/// already taken in the current listing.
async fn check_assignment(
    client: &RosterClient,
    assignment: &NewAssignment,
    exclude_id: Option<RecordId>,
) -> ClientResult<()> {
    let service_user_id = assignment.service_user_id;
    let user = client.get_service_user(service_user_id).await?;
    if !is_eligible_for_assignment(&user) {
        return Err(ClientError::NotEligible(service_user_id));
    }

    let listed = client.list_assignments().await?;
    if let Some(existing) = assignment_on_date(
        &listed,
        service_user_id,
        assignment.assignment_date,
        exclude_id,
    ) {
        tracing::debug!(existing_id = existing.assignment.id, "Date already taken");
        return Err(ClientError::DateTaken {
            service_user_id,
            date: assignment.assignment_date,
        });
    }
    Ok(())
}

async fn run_assignments(client: &RosterClient, action: AssignmentCommand) -> ClientResult<()> {
    match action {
        AssignmentCommand::List => {
            let rows = client.list_assignments().await?;
            print_table(
                &render::assignment_table(&rows),
                "No assignments scheduled.",
            );
        }
        AssignmentCommand::Add(fields) => {
            let assignment: NewAssignment = fields.into();
            check_assignment(client, &assignment, None).await?;
            let ack = client.create_assignment(&assignment).await?;
            println!("{} (ID {})", ack.message, ack.id);
        }
        AssignmentCommand::Update { id, fields } => {
            let assignment: NewAssignment = fields.into();
            check_assignment(client, &assignment, Some(id)).await?;
            let ack = client.update_assignment(id, &assignment).await?;
            println!("{} (ID {})", ack.message, ack.id);
        }
        AssignmentCommand::Delete { id } => {
            let ack = client.delete_assignment(id).await?;
            println!("{} (ID {})", ack.message, ack.id);
        }
    }
    Ok(())
}

async fn run_needs(client: &RosterClient, action: NeedCommand) -> ClientResult<()> {
    match action {
        NeedCommand::List {
            service_user_id: Some(service_user_id),
        } => {
            let needs = client.list_needs_for(service_user_id).await?;
            print_table(
                &render::user_need_table(&needs),
                "No needs recorded for this service user.",
            );
        }
        NeedCommand::List {
            service_user_id: None,
        } => {
            let rows = client.list_needs().await?;
            print_table(&render::need_table(&rows), "No needs recorded.");
        }
        NeedCommand::Add(fields) => {
            let ack = client.create_need(&fields.into()).await?;
            println!("{} (ID {})", ack.message, ack.id);
        }
        NeedCommand::Update { id, fields } => {
            let ack = client.update_need(id, &fields.into()).await?;
            println!("{} (ID {})", ack.message, ack.id);
        }
        NeedCommand::Delete { id } => {
            let ack = client.delete_need(id).await?;
            println!("{} (ID {})", ack.message, ack.id);
        }
    }
    Ok(())
}
