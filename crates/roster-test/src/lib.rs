//! Care roster server - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `roster_test::` paths.

pub mod component {
    pub use roster_core::*;

    pub mod db {
        pub use roster_db::db::*;

        pub mod connection {
            pub use roster_app::db_handler::DbProviderHandler;
            pub use roster_db::db::connection::*;
        }
    }

    pub mod model {
        pub use roster_db::model::*;
    }

    pub mod service {
        pub use roster_service::*;
    }

    pub mod config {
        pub use roster_app::config::ConfigHandler;
        pub use roster_core::config::*;
    }
}

pub mod app {
    pub use roster_app::*;

    pub mod api {
        pub use roster_app::app::api::*;
    }
}
