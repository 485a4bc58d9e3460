use crate::{
    abstract_trait::tuition::{InstallmentQueryRepositoryTrait, InvoiceQueryRepositoryTrait},
    config::ConnectionPool,
    errors::RepositoryError,
    model::{installment::InstallmentModel, invoice::InvoiceModel},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct InvoiceQueryRepository {
    db: ConnectionPool,
}

impl InvoiceQueryRepository {
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
impl InvoiceQueryRepositoryTrait for InvoiceQueryRepository {
    async fn find_by_student(
        &self,
        student_id: &str,
    ) -> Result<Vec<InvoiceModel>, RepositoryError> {
        info!("🔍 Fetching invoices for student {student_id}");

        let mut conn = self.get_conn().await?;

        let rows = sqlx::query_as::<_, InvoiceModel>(
            r#"
            SELECT
                invoice_id,
                student_id,
                year,
                term,
                tuition_fee,
                scholarship_amount,
                payable_amount,
                pay_start_date,
                pay_end_date
            FROM tuition_invoices
            WHERE student_id = $1
            ORDER BY year DESC, term DESC, invoice_id DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch invoices for student {student_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ Found {} invoices", rows.len());

        Ok(rows)
    }

    async fn find_by_id(&self, invoice_id: i32) -> Result<Option<InvoiceModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, InvoiceModel>(
            r#"
            SELECT
                invoice_id,
                student_id,
                year,
                term,
                tuition_fee,
                scholarship_amount,
                payable_amount,
                pay_start_date,
                pay_end_date
            FROM tuition_invoices
            WHERE invoice_id = $1
            "#,
        )
        .bind(invoice_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch invoice {invoice_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(row)
    }
}

pub struct InstallmentQueryRepository {
    db: ConnectionPool,
}

impl InstallmentQueryRepository {
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
impl InstallmentQueryRepositoryTrait for InstallmentQueryRepository {
    async fn find_by_invoice(
        &self,
        invoice_id: i32,
    ) -> Result<Vec<InstallmentModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let rows = sqlx::query_as::<_, InstallmentModel>(
            r#"
            SELECT
                invoice_id,
                installment_no,
                amount,
                due_start_date,
                due_end_date,
                paid_date
            FROM installments
            WHERE invoice_id = $1
            ORDER BY installment_no ASC
            "#,
        )
        .bind(invoice_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch installments of invoice {invoice_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_one(
        &self,
        invoice_id: i32,
        installment_no: i32,
    ) -> Result<Option<InstallmentModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let row = sqlx::query_as::<_, InstallmentModel>(
            r#"
            SELECT
                invoice_id,
                installment_no,
                amount,
                due_start_date,
                due_end_date,
                paid_date
            FROM installments
            WHERE invoice_id = $1 AND installment_no = $2
            "#,
        )
        .bind(invoice_id)
        .bind(installment_no)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch installment {invoice_id}/{installment_no}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(row)
    }
}
