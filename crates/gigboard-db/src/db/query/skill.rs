use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::{connection::DbConnection, schema};
use crate::error::DbResult;
use crate::model::skill::{NewSkill, Skill};

/// ## Summary
/// Loads a user's skills in the order they were added.
///
/// ## Errors
/// Returns an error if the query fails.
pub async fn list_for_user(conn: &mut DbConnection<'_>, user_id: uuid::Uuid) -> DbResult<Vec<Skill>> {
    Ok(schema::skill::table
        .filter(schema::skill::user_id.eq(user_id))
        .select(Skill::as_select())
        .order((schema::skill::created_at.asc(), schema::skill::id.asc()))
        .load::<Skill>(conn)
        .await?)
}

/// ## Summary
/// Inserts a skill and returns the stored row.
///
/// ## Errors
/// Returns an error if the insert fails.
pub async fn create(conn: &mut DbConnection<'_>, new_skill: &NewSkill<'_>) -> DbResult<Skill> {
    Ok(diesel::insert_into(schema::skill::table)
        .values(new_skill)
        .returning(Skill::as_select())
        .get_result::<Skill>(conn)
        .await?)
}
