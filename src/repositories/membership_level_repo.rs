use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::{MembershipLevel, NewMembershipLevel};
use crate::schema::membership_levels;

#[derive(Clone)]
pub struct MembershipLevelRepository {
    pool: AsyncDbPool,
}

impl MembershipLevelRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    /// All levels ordered by id.
    pub async fn list_all(&self) -> Result<Vec<MembershipLevel>, AppError> {
        let mut conn = self.pool.get().await?;

        membership_levels::table
            .order(membership_levels::id.asc())
            .select(MembershipLevel::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }

    pub async fn find_by_id(&self, level_id: i32) -> Result<Option<MembershipLevel>, AppError> {
        let mut conn = self.pool.get().await?;

        membership_levels::table
            .filter(membership_levels::id.eq(level_id))
            .select(MembershipLevel::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Inserts `level` unless a level with the same id exists.
    ///
    /// Returns whether a row was inserted.
    pub async fn insert_if_missing(&self, level: &NewMembershipLevel) -> Result<bool, AppError> {
        let mut conn = self.pool.get().await?;

        let inserted = diesel::insert_into(membership_levels::table)
            .values(level)
            .on_conflict(membership_levels::id)
            .do_nothing()
            .execute(&mut conn)
            .await?;

        Ok(inserted > 0)
    }
}
