use diesel::pg::Pg;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::db::AsyncDbPool;
use crate::error::AppError;
use crate::models::Payment;
use crate::schema::payments;

#[derive(Clone)]
pub struct PaymentRepository {
    pool: AsyncDbPool,
}

impl PaymentRepository {
    pub fn new(pool: AsyncDbPool) -> Self {
        Self { pool }
    }

    fn owned_by(owner_id: i32) -> payments::BoxedQuery<'static, Pg> {
        payments::table
            .filter(payments::user_id.eq(owner_id))
            .order((payments::paid_on.desc(), payments::id.desc()))
            .into_boxed()
    }

    /// Payments of one user, most recent `paid_on` first.
    pub async fn list_for_user(&self, owner_id: i32) -> Result<Vec<Payment>, AppError> {
        let mut conn = self.pool.get().await?;

        Self::owned_by(owner_id)
            .select(Payment::as_select())
            .load(&mut conn)
            .await
            .map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_newest_paid_on_first() {
        let sql = diesel::debug_query::<Pg, _>(&PaymentRepository::owned_by(7)).to_string();
        assert!(sql.contains(r#""payments"."user_id" = $1"#));
        assert!(sql.contains(r#"ORDER BY "payments"."paid_on" DESC, "payments"."id" DESC"#));
        assert!(sql.ends_with("[7]"));
    }
}
