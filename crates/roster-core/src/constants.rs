/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const HEALTHCHECK_ROUTE_COMPONENT: &str = "healthcheck";

pub const STAFF_ROUTE_COMPONENT: &str = "staff";
pub const STAFF_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", STAFF_ROUTE_COMPONENT);

pub const SERVICE_USERS_ROUTE_COMPONENT: &str = "service-users";
pub const SERVICE_USERS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", SERVICE_USERS_ROUTE_COMPONENT);

pub const AVAILABILITY_ROUTE_COMPONENT: &str = "staff-availability";
pub const AVAILABILITY_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", AVAILABILITY_ROUTE_COMPONENT);

pub const ASSIGNMENTS_ROUTE_COMPONENT: &str = "assignments";
pub const ASSIGNMENTS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", ASSIGNMENTS_ROUTE_COMPONENT);

pub const NEEDS_ROUTE_COMPONENT: &str = "service-user-needs";
pub const NEEDS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", NEEDS_ROUTE_COMPONENT);
