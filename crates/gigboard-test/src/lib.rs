//! Gigboard integration test support.
//!
//! Re-exports the workspace crates under one root so integration tests can
//! reach the app, service and database layers through `gigboard_test::`.

pub mod component {
    pub use gigboard_core::{catalog, constants, util};
    pub use gigboard_service::{auth, error, seed, skill, taxonomy};

    pub mod db {
        pub use gigboard_db::db::*;

        pub mod connection {
            pub use gigboard_app::db_handler::DbProviderHandler;
            pub use gigboard_db::db::connection::*;
        }
    }

    pub mod model {
        pub use gigboard_db::model::*;
    }

    pub mod depot_types {
        pub use gigboard_db::depot_types::*;
    }

    pub mod config {
        pub use gigboard_app::config::ConfigHandler;
        pub use gigboard_core::config::*;
    }
}

pub mod app {
    pub use gigboard_app::*;

    pub mod api {
        pub use gigboard_app::app::api::*;
    }
}
