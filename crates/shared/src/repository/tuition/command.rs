use crate::{
    abstract_trait::tuition::InstallmentCommandRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct InstallmentCommandRepository {
    db: ConnectionPool,
}

impl InstallmentCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl InstallmentCommandRepositoryTrait for InstallmentCommandRepository {
    async fn mark_paid(&self, invoice_id: i32, installment_no: i32) -> Result<u64, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            UPDATE installments
            SET paid_date = NOW()
            WHERE invoice_id = $1
              AND installment_no = $2
              AND paid_date IS NULL
            "#,
        )
        .bind(invoice_id)
        .bind(installment_no)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to mark installment {invoice_id}/{installment_no} paid: {e:?}");
            RepositoryError::from(e)
        })?;

        info!(
            "💳 mark_paid {invoice_id}/{installment_no} affected {} rows",
            result.rows_affected()
        );

        Ok(result.rows_affected())
    }
}
