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
#[diesel(table_name = schema::skill)]
#[diesel(check_for_backend(Pg))]
#[diesel(belongs_to(super::user::User, foreign_key = user_id))]
pub struct Skill {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub label: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schema::skill)]
pub struct NewSkill<'a> {
    pub id: uuid::Uuid,
    pub user_id: uuid::Uuid,
    pub label: &'a str,
}
