use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Identifiable, Queryable, Selectable, Serialize, Deserialize,
)]
#[diesel(table_name = schema::category)]
#[diesel(check_for_backend(Pg))]
pub struct Category {
    pub id: uuid::Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::category)]
pub struct NewCategory<'a> {
    pub id: uuid::Uuid,
    pub name: &'a str,
}

impl<'a> NewCategory<'a> {
    /// Builds an insertable row with a fresh time-ordered id.
    #[must_use]
    pub fn named(name: &'a str) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            name,
        }
    }
}
