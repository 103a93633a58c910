/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const APP_ROUTE_COMPONENT: &str = "app";
pub const APP_ROUTE_PREFIX: &str = const_str::concat!(API_ROUTE_PREFIX, "/", APP_ROUTE_COMPONENT);

pub const SEED_ROUTE_COMPONENT: &str = "seed";
pub const SEED_ROUTE_PREFIX: &str =
    const_str::concat!(APP_ROUTE_PREFIX, "/", SEED_ROUTE_COMPONENT);

pub const CATEGORIES_ROUTE_COMPONENT: &str = "categories";
pub const SUBCATEGORIES_ROUTE_COMPONENT: &str = "subcategories";
pub const USERS_ROUTE_COMPONENT: &str = "users";
