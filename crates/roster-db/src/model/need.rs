use chrono::NaiveTime;
use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

/// A recurring care requirement for a service user
#[derive(
    Debug, Clone, PartialEq, Eq, Queryable, Selectable, Identifiable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::service_user_needs)]
#[diesel(check_for_backend(Pg))]
pub struct ServiceUserNeed {
    pub id: i32,
    pub service_user_id: i32,
    pub care_type: String,
    pub description: Option<String>,
    pub frequency: Option<String>,
    pub preferred_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    pub active: bool,
}

const fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable, AsChangeset, Serialize, Deserialize)]
#[diesel(table_name = schema::service_user_needs)]
#[diesel(treat_none_as_null = true)]
pub struct NewServiceUserNeed {
    pub service_user_id: i32,
    pub care_type: String,
    pub description: Option<String>,
    pub frequency: Option<String>,
    pub preferred_time: Option<NaiveTime>,
    pub duration_minutes: Option<i32>,
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Need joined with the service user's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceUserNeedWithUser {
    #[serde(flatten)]
    pub need: ServiceUserNeed,
    pub user_first_name: String,
    pub user_last_name: String,
}
