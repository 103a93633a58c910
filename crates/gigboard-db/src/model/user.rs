use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserUniqueCriteria {
    Id(uuid::Uuid),
    Username(String),
    TokenIdentifier(String),
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Identifiable, Queryable, Selectable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::user)]
#[diesel(check_for_backend(Pg))]
pub struct User {
    pub id: uuid::Uuid,
    /// Subject assigned by the external identity provider.
    #[serde(skip_serializing)]
    pub token_identifier: String,
    pub username: String,
    pub name: String,
    pub email: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Insertable)]
#[diesel(table_name = schema::user)]
pub struct NewUser<'a> {
    pub id: uuid::Uuid,
    pub token_identifier: &'a str,
    pub username: &'a str,
    pub name: &'a str,
    pub email: Option<&'a str>,
}
