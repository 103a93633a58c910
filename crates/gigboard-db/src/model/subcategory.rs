use diesel::{pg::Pg, prelude::*};
use serde::{Deserialize, Serialize};

use crate::db::schema;

#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Identifiable,
    Queryable,
    Selectable,
    Associations,
    Serialize,
    Deserialize,
)]
#[diesel(table_name = schema::subcategory)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(super::category::Category, foreign_key = category_id))]
pub struct Subcategory {
    pub id: uuid::Uuid,
    pub category_id: uuid::Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Insertable)]
#[diesel(table_name = schema::subcategory)]
pub struct NewSubcategory<'a> {
    pub id: uuid::Uuid,
    pub category_id: uuid::Uuid,
    pub name: &'a str,
}

impl<'a> NewSubcategory<'a> {
    #[must_use]
    pub fn new(category_id: uuid::Uuid, name: &'a str) -> Self {
        Self {
            id: uuid::Uuid::now_v7(),
            category_id,
            name,
        }
    }
}
